#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("invalid zoom level {zoom}, supported range is 0..={max}")]
pub struct InvalidZoom {
    /// Requested zoom level.
    pub zoom: u8,
    /// Highest zoom level the resolution table supports.
    pub max: u8,
}
