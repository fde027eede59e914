mod app;
mod view;
mod windows;

use app::MyApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    eframe::run_native(
        "OS OpenSpace",
        eframe::NativeOptions::default(),
        Box::new(|cc| Ok(Box::new(MyApp::new(&cc.egui_ctx)))),
    )
}
