//! Tile sources for projected grids. Make sure you follow terms of usage of the particular source.

mod openspace;

use crate::licensing::escape_html;
use crate::tiles::TileId;
use crate::zoom::InvalidZoom;
pub use openspace::{AttributionSetting, ENDPOINT, OpenSpace, OpenSpaceOptions, RequestParams};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribution {
    pub text: String,
    pub url: &'static str,
    /// Whether a "Terms of Use" link should follow the text.
    pub terms: bool,
}

impl Attribution {
    /// HTML form, with the terms link marked by the `os-terms` class.
    pub fn html(&self) -> String {
        let text = escape_html(&self.text);
        if self.terms {
            format!(r##"{text} <a class="os-terms" href="#">Terms of Use</a>"##)
        } else {
            text
        }
    }
}

/// Remote tile server definition. It only tells where the tiles are, fetching them is up to the
/// map widget.
pub trait TileSource {
    /// # Errors
    ///
    /// Fails if the source does not serve the tile's zoom level.
    fn tile_url(&self, tile_id: TileId) -> Result<String, InvalidZoom>;

    /// Attribution for a map of the given width, `None` if it was turned off.
    fn attribution(&self, viewport_width: f32) -> Option<Attribution>;

    /// Size of each tile, in pixels.
    fn tile_size(&self) -> u32 {
        256
    }

    fn min_zoom(&self) -> u8 {
        0
    }

    fn max_zoom(&self) -> u8;
}
