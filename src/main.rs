mod app;
mod config;
mod host;
mod service;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([700.0, 500.0])
            .with_title("Bash Wizard"),
        ..Default::default()
    };

    eframe::run_native(
        "Bash Wizard",
        options,
        Box::new(|cc| Ok(Box::new(app::BashWizardApp::new(cc)))),
    )
}
