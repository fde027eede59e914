/// Identifies the tile in the tile grid.
///
/// Unlike the Web Mercator pyramid, the grid of a projected coordinate system has no natural
/// bounds, so column and row can be any integer, including negative ones.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileId {
    /// Column of the tile, growing east.
    pub x: i64,

    /// Row of the tile, growing south from the grid origin.
    pub y: i64,

    /// Index into the resolution table, where 0 is the coarsest level.
    pub zoom: u8,
}

impl TileId {
    pub fn new(x: i64, y: i64, zoom: u8) -> Self {
        Self { x, y, zoom }
    }

    pub fn east(&self) -> Self {
        Self::new(self.x + 1, self.y, self.zoom)
    }

    pub fn west(&self) -> Self {
        Self::new(self.x - 1, self.y, self.zoom)
    }

    pub fn north(&self) -> Self {
        Self::new(self.x, self.y - 1, self.zoom)
    }

    pub fn south(&self) -> Self {
        Self::new(self.x, self.y + 1, self.zoom)
    }
}
