use egui::{Align2, RichText, Ui, Window};
use os_openspace::extras::TermsOfUse;
use os_openspace::sources::{Attribution, OpenSpace};

use crate::view::GridView;

pub fn acknowledge(ui: &Ui, attribution: &Attribution, terms: &mut TermsOfUse) {
    Window::new("Acknowledge")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::LEFT_TOP, [10., 10.])
        .show(ui.ctx(), |ui| {
            ui.label("map provided by");
            terms.attribution_ui(ui, attribution);
        });
}

/// Simple GUI to zoom in and out.
pub fn zoom(ui: &Ui, view: &mut GridView, source: &OpenSpace) {
    Window::new("Map")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::LEFT_BOTTOM, [10., -10.])
        .show(ui.ctx(), |ui| {
            ui.horizontal(|ui| {
                if ui.button(RichText::new("➕").heading()).clicked() {
                    view.zoom_in(source);
                }

                if ui.button(RichText::new("➖").heading()).clicked() {
                    view.zoom_out(source);
                }
            });
        });
}

/// Grid coordinates of the map's centre.
pub fn center(ui: &Ui, view: &GridView) {
    Window::new("Center")
        .collapsible(false)
        .resizable(false)
        .title_bar(false)
        .anchor(Align2::RIGHT_BOTTOM, [-10., -10.])
        .show(ui.ctx(), |ui| {
            ui.label(format!(
                "E {:.0} N {:.0}, zoom {}",
                view.center.x(),
                view.center.y(),
                view.zoom
            ));
        });
}
