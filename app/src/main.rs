use eframe::egui;

mod app;

fn main() -> eframe::Result<()> {
    env_logger::init();
    eframe::run_native(
        "Float Menu Demo",
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size([900.0, 600.0]),
            ..Default::default()
        },
        Box::new(|cc| Ok(Box::new(app::DemoApp::new(cc)))),
    )
}
