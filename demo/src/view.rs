use egui::{Rect, Vec2, pos2, vec2};
use os_openspace::sources::{OpenSpace, TileSource};
use os_openspace::{InvalidZoom, MapUnits, TileId};

/// What part of the grid is shown. Kept between frames.
pub struct GridView {
    /// Grid coordinates shown in the middle of the map.
    pub center: MapUnits,
    pub zoom: u8,
}

impl Default for GridView {
    fn default() -> Self {
        Self {
            // Central London.
            center: MapUnits::new(530_000., 180_000.),
            zoom: 5,
        }
    }
}

impl GridView {
    pub fn zoom_in(&mut self, source: &OpenSpace) {
        if self.zoom < source.max_zoom() {
            self.zoom += 1;
        }
    }

    pub fn zoom_out(&mut self, source: &OpenSpace) {
        if self.zoom > source.min_zoom() {
            self.zoom -= 1;
        }
    }

    /// Move the grid along with the pointer.
    pub fn drag(&mut self, source: &OpenSpace, delta: Vec2) -> Result<(), InvalidZoom> {
        let resolution = source.crs().resolution_at(self.zoom)?;
        self.center = MapUnits::new(
            self.center.x() - f64::from(delta.x) * resolution,
            self.center.y() + f64::from(delta.y) * resolution,
        );
        Ok(())
    }

    /// Tiles covering `rect`, each with the place on the screen it should be painted at.
    pub fn visible_tiles(
        &self,
        source: &OpenSpace,
        rect: Rect,
    ) -> Result<Vec<(TileId, Rect)>, InvalidZoom> {
        let crs = source.crs();
        let tile_size = source.tile_size();
        let resolution = crs.resolution_at(self.zoom)?;
        let tile_size_in_map_units = crs.tile_size_in_map_units(self.zoom, tile_size)?;

        let half_width = f64::from(rect.width()) / 2. * resolution;
        let half_height = f64::from(rect.height()) / 2. * resolution;

        let top_left = crs.tile_at(
            MapUnits::new(self.center.x() - half_width, self.center.y() + half_height),
            self.zoom,
            tile_size,
        )?;
        let bottom_right = crs.tile_at(
            MapUnits::new(self.center.x() + half_width, self.center.y() - half_height),
            self.zoom,
            tile_size,
        )?;

        let mut tiles = Vec::new();
        for y in top_left.y..=bottom_right.y {
            for x in top_left.x..=bottom_right.x {
                // Top-left corner of the tile, in grid coordinates.
                let east = (x as f64) * tile_size_in_map_units;
                let north = -(y as f64) * tile_size_in_map_units;

                let min = pos2(
                    rect.center().x + ((east - self.center.x()) / resolution) as f32,
                    rect.center().y + ((self.center.y() - north) / resolution) as f32,
                );

                tiles.push((
                    TileId::new(x, y, self.zoom),
                    Rect::from_min_size(min, vec2(tile_size as f32, tile_size as f32)),
                ));
            }
        }

        Ok(tiles)
    }
}
