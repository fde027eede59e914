use url::Url;

use super::{Attribution, TileSource};
use crate::crs::CoordinateSystem;
use crate::error::Error;
use crate::licensing::{self, ORDNANCE_SURVEY_URL};
use crate::tiles::TileId;
use crate::zoom::InvalidZoom;

/// Tiled WMS endpoint of the service.
pub const ENDPOINT: &str = "https://openspace.ordnancesurvey.co.uk/osmapapi/ts";

/// Placeholder for applications which were not registered with a URL.
const DEFAULT_API_URL: &str = "file:///";

const TILE_SIZE: u32 = 200;

/// What to show as the attribution of the layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributionSetting {
    /// Crown copyright notice, shortened on narrow viewports.
    #[default]
    Default,
    Custom(String),
    /// No attribution at all. Note that OS terms require one, so make sure it is shown elsewhere.
    Disabled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct OpenSpaceOptions {
    pub attribution: AttributionSetting,

    /// URL of the application, as registered together with the API key.
    pub api_url: String,

    /// Tile service to send requests to.
    pub endpoint: String,

    /// Size of each tile, in pixels.
    pub tile_size: u32,

    pub min_zoom: u8,

    /// Highest zoom the layer should be shown at, `None` for the finest resolution available.
    pub max_zoom: Option<u8>,
}

impl Default for OpenSpaceOptions {
    fn default() -> Self {
        Self {
            attribution: AttributionSetting::Default,
            api_url: DEFAULT_API_URL.to_owned(),
            endpoint: ENDPOINT.to_owned(),
            tile_size: TILE_SIZE,
            min_zoom: 0,
            max_zoom: None,
        }
    }
}

/// Query parameters of a single tile request.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestParams<'a> {
    pub key: &'a str,
    pub format: &'static str,
    pub url: &'a str,
    pub request: &'static str,
    pub width: u32,
    pub height: u32,
    /// Lower-left corner of the tile followed by two zeros. The service ignores the upper-right
    /// corner of its tiles, but still expects four numbers.
    pub bbox: [f64; 4],
    /// Resolution of the tile, which the service uses to pick its layer.
    pub layers: f64,
}

impl RequestParams<'_> {
    pub fn bbox(&self) -> String {
        self.bbox
            .iter()
            .map(|value| format_number(*value))
            .collect::<Vec<_>>()
            .join(",")
    }

    pub fn layers(&self) -> String {
        format_number(self.layers)
    }

    /// Name-value pairs in the order they are sent.
    pub fn pairs(&self) -> [(&'static str, String); 8] {
        [
            ("KEY", self.key.to_owned()),
            ("FORMAT", self.format.to_owned()),
            ("URL", self.url.to_owned()),
            ("REQUEST", self.request.to_owned()),
            ("WIDTH", self.width.to_string()),
            ("HEIGHT", self.height.to_string()),
            ("BBOX", self.bbox()),
            ("LAYERS", self.layers()),
        ]
    }
}

/// Shortest representation which reads back to the same value, with zero always being `0`.
fn format_number(value: f64) -> String {
    if value == 0. {
        "0".to_owned()
    } else {
        value.to_string()
    }
}

/// Ordnance Survey maps of Great Britain, served by OS OpenSpace.
/// <https://www.ordnancesurvey.co.uk/>
///
/// Tiles are laid out on the British National Grid, see
/// [`CoordinateSystem::british_national_grid`].
#[derive(Debug, Clone)]
pub struct OpenSpace {
    api_key: String,
    api_url: String,
    endpoint: Url,
    attribution: AttributionSetting,
    crs: CoordinateSystem,
    tile_size: u32,
    min_zoom: u8,
    max_zoom: u8,
}

impl OpenSpace {
    /// Construct new [`OpenSpace`] with default [`OpenSpaceOptions`].
    ///
    /// # Errors
    ///
    /// Fails if the API key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_options(api_key, OpenSpaceOptions::default())
    }

    /// Construct new [`OpenSpace`] with supplied [`OpenSpaceOptions`].
    ///
    /// # Errors
    ///
    /// Fails if the API key is empty or the options are inconsistent.
    pub fn with_options(
        api_key: impl Into<String>,
        options: OpenSpaceOptions,
    ) -> Result<Self, Error> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }

        if options.tile_size == 0 {
            return Err(Error::InvalidTileSize);
        }

        let endpoint = Url::parse(&options.endpoint)?;
        let crs = CoordinateSystem::british_national_grid();
        let finest = crs.resolutions().max_zoom();

        let max_zoom = match options.max_zoom {
            Some(max_zoom) if max_zoom > finest => {
                log::warn!("OS OpenSpace has no tiles beyond zoom {finest}, not {max_zoom}.");
                finest
            }
            Some(max_zoom) => max_zoom,
            None => finest,
        };

        if options.min_zoom > max_zoom {
            return Err(Error::InvalidZoomRange {
                min: options.min_zoom,
                max: max_zoom,
            });
        }

        if options.attribution == AttributionSetting::Disabled {
            log::warn!("OS OpenSpace attribution is disabled, it must be shown some other way.");
        }

        Ok(Self {
            api_key,
            api_url: options.api_url,
            endpoint,
            attribution: options.attribution,
            crs,
            tile_size: options.tile_size,
            min_zoom: options.min_zoom,
            max_zoom,
        })
    }

    pub fn crs(&self) -> &CoordinateSystem {
        &self.crs
    }

    /// Parameters of the request for the given tile. They are built from scratch on each call.
    ///
    /// # Errors
    ///
    /// Fails if there is no resolution for the tile's zoom.
    pub fn request_params(&self, tile_id: TileId) -> Result<RequestParams<'_>, InvalidZoom> {
        let resolution = self.crs.resolution_at(tile_id.zoom)?;
        let tile_size_in_map_units = f64::from(self.tile_size) * resolution;

        // Rows grow south from the top-left corner of the grid, while northings grow north.
        // The service wants the lower-left corner, hence the extra row.
        let x0 = tile_size_in_map_units * tile_id.x as f64;
        let y0 = tile_size_in_map_units * (-1 - tile_id.y) as f64;

        Ok(RequestParams {
            key: &self.api_key,
            format: "image/png",
            url: &self.api_url,
            request: "GetMap",
            width: self.tile_size,
            height: self.tile_size,
            bbox: [x0, y0, 0., 0.],
            layers: resolution,
        })
    }
}

impl TileSource for OpenSpace {
    fn tile_url(&self, tile_id: TileId) -> Result<String, InvalidZoom> {
        let params = self.request_params(tile_id)?;

        let mut url = self.endpoint.clone();
        url.query_pairs_mut().extend_pairs(params.pairs());

        log::debug!("Tile {tile_id:?} is at {url}.");
        Ok(url.into())
    }

    fn attribution(&self, viewport_width: f32) -> Option<Attribution> {
        match &self.attribution {
            AttributionSetting::Default => Some(licensing::attribution(viewport_width)),
            AttributionSetting::Custom(text) => Some(Attribution {
                text: text.clone(),
                url: ORDNANCE_SURVEY_URL,
                terms: true,
            }),
            AttributionSetting::Disabled => None,
        }
    }

    fn tile_size(&self) -> u32 {
        self.tile_size
    }

    fn min_zoom(&self) -> u8 {
        self.min_zoom
    }

    fn max_zoom(&self) -> u8 {
        self.max_zoom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn source() -> OpenSpace {
        OpenSpace::new("abc123").unwrap()
    }

    fn query(url: &str) -> HashMap<String, String> {
        Url::parse(url)
            .unwrap()
            .query_pairs()
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect()
    }

    #[test]
    fn api_key_is_required() {
        assert!(matches!(OpenSpace::new(""), Err(Error::MissingApiKey)));
        assert!(matches!(OpenSpace::new("  "), Err(Error::MissingApiKey)));
        assert!(OpenSpace::new("abc123").is_ok());
    }

    #[test]
    fn tile_url_of_the_coarsest_tile() {
        let _ = env_logger::try_init();

        assert_eq!(
            "https://openspace.ordnancesurvey.co.uk/osmapapi/ts?KEY=abc123&FORMAT=image%2Fpng\
             &URL=file%3A%2F%2F%2F&REQUEST=GetMap&WIDTH=200&HEIGHT=200\
             &BBOX=0%2C-500000%2C0%2C0&LAYERS=2500",
            source().tile_url(TileId::new(0, 0, 0)).unwrap()
        );
    }

    #[test]
    fn bbox_is_the_lower_left_corner() {
        let source = source();

        let params = source.request_params(TileId::new(0, 0, 0)).unwrap();
        assert_eq!("0,-500000,0,0", params.bbox());

        let params = source.request_params(TileId::new(2, -1, 9)).unwrap();
        assert_eq!("1000,0,0,0", params.bbox());

        let params = source.request_params(TileId::new(-3, 4, 9)).unwrap();
        assert_eq!("-1500,-2500,0,0", params.bbox());

        let url = source.tile_url(TileId::new(2, -1, 9)).unwrap();
        assert_eq!("1000,0,0,0", query(&url)["BBOX"]);
    }

    #[test]
    fn layers_is_the_resolution() {
        let source = source();

        for zoom in source.crs().zoom_levels() {
            let resolution = source.crs().resolution_at(zoom).unwrap();
            let first = source.request_params(TileId::new(0, 0, zoom)).unwrap();
            let second = source.request_params(TileId::new(7, -7, zoom)).unwrap();

            assert_eq!(resolution, first.layers);
            assert_eq!(first.layers(), second.layers());
        }

        let url = source.tile_url(TileId::new(0, 0, 9)).unwrap();
        assert_eq!("2.5", query(&url)["LAYERS"]);
    }

    #[test]
    fn consecutive_requests_do_not_leak_into_each_other() {
        let source = source();
        let first = TileId::new(1, 1, 2);
        let second = TileId::new(-4, 6, 8);

        let expected = OpenSpace::new("abc123").unwrap().tile_url(second).unwrap();

        let first_url = source.tile_url(first).unwrap();
        let second_url = source.tile_url(second).unwrap();

        assert_eq!(expected, second_url);
        assert_ne!(first_url, second_url);
        assert_eq!("-4000,-7000,0,0", query(&second_url)["BBOX"]);
        assert_eq!("5", query(&second_url)["LAYERS"]);
    }

    #[test]
    fn zoom_past_resolution_table_fails() {
        assert_eq!(
            Err(InvalidZoom { zoom: 10, max: 9 }),
            source().tile_url(TileId::new(0, 0, 10))
        );
    }

    #[test]
    fn all_parameters_are_sent_in_order() {
        let source = OpenSpace::with_options(
            "abc123",
            OpenSpaceOptions {
                api_url: "https://example.com/my map".to_owned(),
                ..Default::default()
            },
        )
        .unwrap();

        let url = source.tile_url(TileId::new(0, 0, 3)).unwrap();
        let names: Vec<String> = Url::parse(&url)
            .unwrap()
            .query_pairs()
            .map(|(name, _)| name.into_owned())
            .collect();

        assert_eq!(
            vec!["KEY", "FORMAT", "URL", "REQUEST", "WIDTH", "HEIGHT", "BBOX", "LAYERS"],
            names
        );

        let query = query(&url);
        assert_eq!("abc123", query["KEY"]);
        assert_eq!("image/png", query["FORMAT"]);
        assert_eq!("https://example.com/my map", query["URL"]);
        assert_eq!("GetMap", query["REQUEST"]);
        assert_eq!("200", query["WIDTH"]);
        assert_eq!("200", query["HEIGHT"]);
    }

    #[test]
    fn defaults_follow_the_service() {
        let source = source();

        assert_eq!(200, source.tile_size());
        assert_eq!(0, source.min_zoom());
        assert_eq!(9, source.max_zoom());
        assert_eq!("EPSG:27700", source.crs().code());
    }

    #[test]
    fn tile_size_changes_the_bbox() {
        let source = OpenSpace::with_options(
            "abc123",
            OpenSpaceOptions {
                tile_size: 250,
                ..Default::default()
            },
        )
        .unwrap();

        let params = source.request_params(TileId::new(1, 0, 9)).unwrap();
        assert_eq!("625,-625,0,0", params.bbox());
        assert_eq!(250, params.width);
        assert_eq!(250, params.height);
    }

    #[test]
    fn invalid_options_are_rejected() {
        let with = |options| OpenSpace::with_options("abc123", options);

        assert!(matches!(
            with(OpenSpaceOptions {
                tile_size: 0,
                ..Default::default()
            }),
            Err(Error::InvalidTileSize)
        ));

        assert!(matches!(
            with(OpenSpaceOptions {
                endpoint: "not a url".to_owned(),
                ..Default::default()
            }),
            Err(Error::InvalidEndpoint(_))
        ));

        assert!(matches!(
            with(OpenSpaceOptions {
                min_zoom: 5,
                max_zoom: Some(3),
                ..Default::default()
            }),
            Err(Error::InvalidZoomRange { min: 5, max: 3 })
        ));
    }

    #[test]
    fn max_zoom_is_clamped_to_resolution_table() {
        let source = OpenSpace::with_options(
            "abc123",
            OpenSpaceOptions {
                max_zoom: Some(14),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(9, source.max_zoom());
    }

    #[test]
    fn custom_endpoint_keeps_its_query() {
        let source = OpenSpace::with_options(
            "abc123",
            OpenSpaceOptions {
                endpoint: "http://localhost:8080/ts?proxy=1".to_owned(),
                ..Default::default()
            },
        )
        .unwrap();

        let url = source.tile_url(TileId::new(0, 0, 0)).unwrap();
        assert!(url.starts_with("http://localhost:8080/ts?proxy=1&KEY=abc123&"));
    }

    #[test]
    fn attribution_settings() {
        let attribution = source().attribution(1024.).unwrap();
        assert!(attribution.text.contains("database rights"));
        assert!(attribution.terms);

        let attribution = source().attribution(320.).unwrap();
        assert!(!attribution.text.contains("database rights"));

        let custom = OpenSpace::with_options(
            "abc123",
            OpenSpaceOptions {
                attribution: AttributionSetting::Custom("Maps by OS".to_owned()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!("Maps by OS", custom.attribution(1024.).unwrap().text);

        let disabled = OpenSpace::with_options(
            "abc123",
            OpenSpaceOptions {
                attribution: AttributionSetting::Disabled,
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(None, disabled.attribution(1024.));
    }

    #[test]
    fn numbers_are_formatted_like_the_service_expects() {
        assert_eq!("0", format_number(-0.));
        assert_eq!("2500", format_number(2500.));
        assert_eq!("2.5", format_number(2.5));
        assert_eq!("-500000", format_number(-500_000.));
    }

    #[test]
    fn source_can_be_shared_between_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<OpenSpace>();
    }
}
