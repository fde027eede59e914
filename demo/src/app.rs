use egui::{Context, Image, Sense};
use os_openspace::extras::TermsOfUse;
use os_openspace::sources::{OpenSpace, TileSource};

use crate::view::GridView;
use crate::windows;

/// Pass in the API key at compile time, or set it when running the demo. May or may not be what
/// you want to do, potentially loading it from application settings instead.
fn api_key() -> Option<String> {
    std::option_env!("OS_OPENSPACE_API_KEY")
        .map(ToOwned::to_owned)
        .or_else(|| std::env::var("OS_OPENSPACE_API_KEY").ok())
}

pub struct MyApp {
    source: Option<OpenSpace>,
    view: GridView,
    terms: TermsOfUse,
}

impl MyApp {
    pub fn new(egui_ctx: &Context) -> Self {
        // Tiles are downloaded and decoded by egui's loaders.
        egui_extras::install_image_loaders(egui_ctx);

        let source = match api_key().map(OpenSpace::new) {
            Some(Ok(source)) => Some(source),
            Some(Err(e)) => {
                log::error!("Cannot use OS OpenSpace: {e}");
                None
            }
            None => {
                log::warn!("OS_OPENSPACE_API_KEY is not set.");
                None
            }
        };

        Self {
            source,
            view: GridView::default(),
            terms: TermsOfUse::default(),
        }
    }
}

impl eframe::App for MyApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let rimless = egui::Frame {
            fill: ctx.style().visuals.panel_fill,
            ..Default::default()
        };

        egui::CentralPanel::default()
            .frame(rimless)
            .show(ctx, |ui| {
                let Some(source) = &self.source else {
                    ui.centered_and_justified(|ui| {
                        ui.label("Set OS_OPENSPACE_API_KEY to see the map.");
                    });
                    return;
                };

                let response = ui.allocate_response(ui.available_size(), Sense::drag());
                let map_rect = response.rect;

                if let Err(e) = self.view.drag(source, response.drag_delta()) {
                    log::warn!("Cannot move the map: {e}");
                }

                match self.view.visible_tiles(source, map_rect) {
                    Ok(tiles) => {
                        for (tile_id, rect) in tiles {
                            match source.tile_url(tile_id) {
                                Ok(url) => Image::new(url).paint_at(ui, rect),
                                Err(e) => log::warn!("No tile {tile_id:?}: {e}"),
                            }
                        }
                    }
                    Err(e) => log::warn!("Cannot lay out tiles: {e}"),
                }

                if let Some(attribution) = source.attribution(map_rect.width()) {
                    windows::acknowledge(ui, &attribution, &mut self.terms);
                }
                windows::zoom(ui, &mut self.view, source);
                windows::center(ui, &self.view);

                self.terms.show(ctx, map_rect);
            });
    }
}
