//! British National Grid, the coordinate reference system of the OS OpenSpace tile service.
//! <https://epsg.io/27700>
//!
//! Projection math is not done here. The parameter set is handed over to an external engine
//! (see the `proj` feature), while tiling only needs the resolution table.

use std::ops::RangeInclusive;

use geo::{Distance, Haversine};

use crate::position::{MapUnits, Position};
use crate::tiles::TileId;
use crate::zoom::InvalidZoom;

/// Map units per pixel of the OpenSpace service, coarsest first.
const OPENSPACE_RESOLUTIONS: [f64; 10] = [
    2500., 1000., 500., 200., 100., 50., 25., 10., 5., 2.5,
];

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InvalidResolutions {
    #[error("resolution table is empty")]
    Empty,
    #[error("resolution table has {0} levels, at most 256 are supported")]
    TooManyLevels(usize),
    #[error("resolution {value} at zoom {zoom} is not a finite positive number")]
    NotPositive { zoom: usize, value: f64 },
    #[error("resolution at zoom {zoom} is not smaller than the one before it")]
    NotDecreasing { zoom: usize },
}

/// Map units per pixel, indexed by zoom level. Always non-empty and strictly decreasing.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolutions(Vec<f64>);

impl Resolutions {
    /// # Errors
    ///
    /// Fails if the table is empty, longer than what `u8` zoom levels can address, or not
    /// strictly decreasing positive numbers.
    pub fn new(values: Vec<f64>) -> Result<Self, InvalidResolutions> {
        if values.is_empty() {
            return Err(InvalidResolutions::Empty);
        }

        if values.len() > usize::from(u8::MAX) + 1 {
            return Err(InvalidResolutions::TooManyLevels(values.len()));
        }

        if let Some((zoom, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, value)| !value.is_finite() || **value <= 0.)
        {
            return Err(InvalidResolutions::NotPositive { zoom, value });
        }

        if let Some(zoom) = values
            .windows(2)
            .position(|pair| pair[1] >= pair[0])
            .map(|index| index + 1)
        {
            return Err(InvalidResolutions::NotDecreasing { zoom });
        }

        Ok(Self(values))
    }

    /// # Errors
    ///
    /// Fails if there is no resolution for the given zoom.
    pub fn get(&self, zoom: u8) -> Result<f64, InvalidZoom> {
        self.0
            .get(usize::from(zoom))
            .copied()
            .ok_or(InvalidZoom {
                zoom,
                max: self.max_zoom(),
            })
    }

    /// Highest zoom level present in the table.
    pub fn max_zoom(&self) -> u8 {
        // Length is checked to be in 1..=256 by the constructor.
        u8::try_from(self.0.len() - 1).unwrap_or(u8::MAX)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

impl TryFrom<Vec<f64>> for Resolutions {
    type Error = InvalidResolutions;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

/// Parameters of a transverse Mercator projection, in the vocabulary of PROJ.
#[derive(Debug, Clone, PartialEq)]
pub struct TransverseMercator {
    /// Latitude of natural origin, in degrees.
    pub latitude_of_origin: f64,
    /// Longitude of natural origin, in degrees.
    pub central_meridian: f64,
    pub scale_factor: f64,
    /// In metres.
    pub false_easting: f64,
    /// In metres.
    pub false_northing: f64,
    pub ellipsoid: &'static str,
    pub datum: &'static str,
}

impl TransverseMercator {
    /// OSGB36 / British National Grid.
    pub fn british_national_grid() -> Self {
        Self {
            latitude_of_origin: 49.,
            central_meridian: -2.,
            scale_factor: 0.999_601_271_7,
            false_easting: 400_000.,
            false_northing: -100_000.,
            ellipsoid: "airy",
            datum: "OSGB36",
        }
    }

    /// Definition in the PROJ string format.
    pub fn proj4(&self) -> String {
        format!(
            "+proj=tmerc +lat_0={} +lon_0={} +k={} +x_0={} +y_0={} +ellps={} +datum={} +units=m +no_defs",
            self.latitude_of_origin,
            self.central_meridian,
            self.scale_factor,
            self.false_easting,
            self.false_northing,
            self.ellipsoid,
            self.datum,
        )
    }
}

/// Projected coordinate reference system together with its tile pyramid.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSystem {
    code: &'static str,
    projection: TransverseMercator,
    resolutions: Resolutions,
}

impl CoordinateSystem {
    pub fn new(
        code: &'static str,
        projection: TransverseMercator,
        resolutions: Resolutions,
    ) -> Self {
        Self {
            code,
            projection,
            resolutions,
        }
    }

    /// EPSG:27700 with the resolutions served by OS OpenSpace.
    pub fn british_national_grid() -> Self {
        Self::new(
            "EPSG:27700",
            TransverseMercator::british_national_grid(),
            Resolutions(OPENSPACE_RESOLUTIONS.to_vec()),
        )
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    pub fn projection(&self) -> &TransverseMercator {
        &self.projection
    }

    pub fn proj4(&self) -> String {
        self.projection.proj4()
    }

    pub fn resolutions(&self) -> &Resolutions {
        &self.resolutions
    }

    /// Map units per pixel at the given zoom level.
    ///
    /// # Errors
    ///
    /// Fails if the zoom is past the end of the resolution table.
    pub fn resolution_at(&self, zoom: u8) -> Result<f64, InvalidZoom> {
        self.resolutions.get(zoom)
    }

    pub fn zoom_levels(&self) -> RangeInclusive<u8> {
        0..=self.resolutions.max_zoom()
    }

    /// Length of a tile's edge in map units.
    ///
    /// # Errors
    ///
    /// Fails if the zoom is past the end of the resolution table.
    pub fn tile_size_in_map_units(&self, zoom: u8, tile_size: u32) -> Result<f64, InvalidZoom> {
        Ok(f64::from(tile_size) * self.resolution_at(zoom)?)
    }

    /// Tile which covers the given point. Columns grow east and rows grow south, both counted
    /// from the grid origin, which is the convention tile URLs are built with.
    ///
    /// # Errors
    ///
    /// Fails if the zoom is past the end of the resolution table.
    pub fn tile_at(
        &self,
        point: MapUnits,
        zoom: u8,
        tile_size: u32,
    ) -> Result<TileId, InvalidZoom> {
        let size = self.tile_size_in_map_units(zoom, tile_size)?;

        Ok(TileId {
            x: (point.x() / size).floor() as i64,
            y: (-point.y() / size).floor() as i64,
            zoom,
        })
    }

    /// Great-circle distance between two positions, in metres. Measured on a sphere, not on the
    /// grid.
    pub fn distance(&self, a: Position, b: Position) -> f64 {
        Haversine.distance(a, b)
    }

    /// Create a [`Projector`] converting between WGS84 and this system.
    ///
    /// # Errors
    ///
    /// Fails if PROJ does not accept the definition.
    #[cfg(feature = "proj")]
    pub fn projector(&self) -> Result<Projector, crate::Error> {
        let definition = self.proj4();
        Ok(Projector {
            to_grid: proj::Proj::new_known_crs("EPSG:4326", &definition, None)?,
            to_wgs84: proj::Proj::new_known_crs(&definition, "EPSG:4326", None)?,
        })
    }
}

/// Converts positions with PROJ. Creating one is expensive, so keep it around.
#[cfg(feature = "proj")]
pub struct Projector {
    to_grid: proj::Proj,
    to_wgs84: proj::Proj,
}

#[cfg(feature = "proj")]
impl std::fmt::Debug for Projector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Projector").finish_non_exhaustive()
    }
}

#[cfg(feature = "proj")]
impl Projector {
    /// # Errors
    ///
    /// Fails if PROJ cannot transform the position.
    pub fn project(&self, position: Position) -> Result<MapUnits, crate::Error> {
        let (x, y) = self.to_grid.convert((position.x(), position.y()))?;
        Ok(MapUnits::new(x, y))
    }

    /// # Errors
    ///
    /// Fails if PROJ cannot transform the point.
    pub fn unproject(&self, point: MapUnits) -> Result<Position, crate::Error> {
        let (lon, lat) = self.to_wgs84.convert((point.x(), point.y()))?;
        Ok(Position::new(lon, lat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lat_lon;
    use approx::assert_relative_eq;

    #[test]
    fn resolution_at_follows_the_table() {
        let crs = CoordinateSystem::british_national_grid();

        for (zoom, expected) in crs.zoom_levels().zip(OPENSPACE_RESOLUTIONS) {
            assert_eq!(Ok(expected), crs.resolution_at(zoom));
        }

        let resolutions: Vec<f64> = crs
            .zoom_levels()
            .map(|zoom| crs.resolution_at(zoom).unwrap())
            .collect();
        assert!(resolutions.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[test]
    fn resolution_at_rejects_zoom_past_the_table() {
        let crs = CoordinateSystem::british_national_grid();

        assert_eq!(0..=9, crs.zoom_levels());
        assert_eq!(Err(InvalidZoom { zoom: 10, max: 9 }), crs.resolution_at(10));
        assert_eq!(Err(InvalidZoom { zoom: 255, max: 9 }), crs.resolution_at(255));
    }

    #[test]
    fn resolution_table_is_validated() {
        assert_eq!(Err(InvalidResolutions::Empty), Resolutions::new(vec![]));
        assert_eq!(
            Err(InvalidResolutions::NotPositive { zoom: 1, value: 0. }),
            Resolutions::new(vec![10., 0.])
        );
        assert!(matches!(
            Resolutions::new(vec![10., f64::NAN]),
            Err(InvalidResolutions::NotPositive { zoom: 1, .. })
        ));
        assert_eq!(
            Err(InvalidResolutions::NotDecreasing { zoom: 2 }),
            Resolutions::new(vec![10., 5., 5.])
        );
        assert_eq!(
            Err(InvalidResolutions::TooManyLevels(257)),
            Resolutions::new((0..257).map(|i| 1000. - f64::from(i)).collect())
        );

        let resolutions = Resolutions::try_from(vec![4., 2., 1.]).unwrap();
        assert_eq!(3, resolutions.len());
        assert_eq!(2, resolutions.max_zoom());
        assert_eq!(Ok(1.), resolutions.get(2));
    }

    #[test]
    fn proj4_definition_of_british_national_grid() {
        let crs = CoordinateSystem::british_national_grid();

        assert_eq!("EPSG:27700", crs.code());
        assert_eq!(
            "+proj=tmerc +lat_0=49 +lon_0=-2 +k=0.9996012717 +x_0=400000 +y_0=-100000 \
             +ellps=airy +datum=OSGB36 +units=m +no_defs",
            crs.proj4()
        );
    }

    #[test]
    fn tile_at_covers_the_point() {
        let crs = CoordinateSystem::british_national_grid();

        // 500 km tiles at the coarsest level.
        let tile_at = |x, y| crs.tile_at(MapUnits::new(x, y), 0, 200);
        assert_eq!(Ok(TileId::new(0, -1, 0)), tile_at(1., 1.));
        assert_eq!(Ok(TileId::new(0, 0, 0)), tile_at(1., -1.));
        assert_eq!(Ok(TileId::new(-1, 0, 0)), tile_at(-1., -1.));

        // 500 m tiles at the finest level.
        assert_eq!(
            Ok(TileId::new(1058, -343, 9)),
            crs.tile_at(MapUnits::new(529_090., 171_260.), 9, 200)
        );

        assert_eq!(
            Err(InvalidZoom { zoom: 10, max: 9 }),
            crs.tile_at(MapUnits::new(0., 0.), 10, 200)
        );
    }

    #[test]
    fn tile_size_in_map_units_scales_with_resolution() {
        let crs = CoordinateSystem::british_national_grid();

        assert_eq!(Ok(500_000.), crs.tile_size_in_map_units(0, 200));
        assert_eq!(Ok(500.), crs.tile_size_in_map_units(9, 200));
        assert_eq!(Ok(640.), crs.tile_size_in_map_units(9, 256));
    }

    #[test]
    fn distance_is_measured_on_the_sphere() {
        let crs = CoordinateSystem::british_national_grid();
        let london = lat_lon(51.5074, -0.1278);
        let edinburgh = lat_lon(55.9533, -3.1883);

        assert_relative_eq!(crs.distance(london, edinburgh), 534_000., max_relative = 0.01);
        assert_relative_eq!(crs.distance(london, london), 0.);
    }

    #[cfg(feature = "proj")]
    #[test]
    fn projecting_there_and_back() {
        let crs = CoordinateSystem::british_national_grid();
        let projector = crs.projector().unwrap();

        // Trig point on top of Ben Nevis.
        let ben_nevis = lat_lon(56.796_891, -5.003_675);
        let projected = projector.project(ben_nevis).unwrap();
        assert_relative_eq!(projected.x(), 216_666., max_relative = 0.001);
        assert_relative_eq!(projected.y(), 771_288., max_relative = 0.001);

        let unprojected = projector.unproject(projected).unwrap();
        assert_relative_eq!(unprojected.x(), ben_nevis.x(), epsilon = 1e-6);
        assert_relative_eq!(unprojected.y(), ben_nevis.y(), epsilon = 1e-6);
    }
}
