use egui::{Align2, Context, Id, Pos2, Rect, RichText, ScrollArea, Ui, Window};

use crate::licensing::terms::{Block, TERMS};
use crate::sources::Attribution;

/// Placement of the terms popup over a map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermsLayout {
    /// Where the bottom centre of the popup goes.
    pub anchor: Pos2,
    pub max_width: f32,
    pub max_height: f32,
}

impl TermsLayout {
    /// Centred horizontally, a tenth of the map's height above its bottom edge, leaving some
    /// margin on the sides and at the top.
    pub fn for_map(map_rect: Rect) -> Self {
        Self {
            anchor: Pos2::new(
                map_rect.center().x,
                map_rect.bottom() - 0.1 * map_rect.height(),
            ),
            max_width: (map_rect.width() - 100.).max(0.),
            max_height: 0.8 * map_rect.height(),
        }
    }
}

/// Terms of use popup of the OpenSpace layer. It must persist between frames.
///
/// # Examples
///
/// ```
/// # use os_openspace::{extras::TermsOfUse, sources::{OpenSpace, TileSource}};
/// fn update(ui: &mut egui::Ui, source: &OpenSpace, terms: &mut TermsOfUse) {
///     let map_rect = ui.max_rect();
///
///     if let Some(attribution) = source.attribution(map_rect.width()) {
///         terms.attribution_ui(ui, &attribution);
///     }
///
///     terms.show(ui.ctx(), map_rect);
/// }
/// ```
#[derive(Debug, Default, Clone)]
pub struct TermsOfUse {
    open: bool,
}

impl TermsOfUse {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Show the attribution, followed by a link to the terms if the attribution asks for it.
    pub fn attribution_ui(&mut self, ui: &mut Ui, attribution: &Attribution) {
        ui.horizontal_wrapped(|ui| {
            ui.hyperlink_to(attribution.text.as_str(), attribution.url);
            if attribution.terms && ui.link("Terms of Use").clicked() {
                log::debug!("Opening OS OpenSpace terms of use.");
                self.open = true;
            }
        });
    }

    /// Show the popup over the map occupying `map_rect`, if it was opened.
    pub fn show(&mut self, ctx: &Context, map_rect: Rect) {
        if !self.open {
            return;
        }

        let layout = TermsLayout::for_map(map_rect);

        Window::new("Terms of Use")
            .id(Id::new("os_openspace_terms"))
            .open(&mut self.open)
            .collapsible(false)
            .resizable(false)
            .pivot(Align2::CENTER_BOTTOM)
            .fixed_pos(layout.anchor)
            .max_width(layout.max_width)
            .max_height(layout.max_height)
            .show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    for block in TERMS {
                        block_ui(ui, block);
                    }
                });
            });
    }
}

fn block_ui(ui: &mut Ui, block: &Block) {
    match *block {
        Block::Heading(3, text) => {
            ui.heading(text);
        }
        Block::Heading(_, text) | Block::Strong(text) => {
            ui.label(RichText::new(text).strong());
        }
        Block::Paragraph(text) => {
            ui.label(text);
        }
    }
}
