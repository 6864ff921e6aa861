// GUI-subsystem binary: Windows never allocates a console for it.  Launch
// options are parsed before the window opens; there is no headless mode.
#![windows_subsystem = "windows"]

use clap::Parser;
use eframe::egui;

use smudgepad::app::SmudgePadApp;
use smudgepad::cli::LaunchArgs;
use smudgepad::{i18n, log_info, logger, t};

fn main() -> Result<(), eframe::Error> {
    let args = LaunchArgs::parse().sanitized();

    // Session log (truncates the previous session's file), then translations.
    logger::init();
    i18n::init();
    let lang = args
        .lang
        .clone()
        .unwrap_or_else(i18n::detect_system_language);
    i18n::set_language(&lang);
    log_info!("language: {}", i18n::current_language());

    // Size the window to the canvas plus room for the toolbar and palette,
    // within reason for small screens.
    let inner_w = (args.width as f32 + 32.0).clamp(480.0, 1600.0);
    let inner_h = (args.height as f32 + 200.0).clamp(360.0, 1000.0);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([inner_w, inner_h])
            .with_title(t!("app.title")),
        ..Default::default()
    };

    eframe::run_native(
        "SmudgePad",
        options,
        Box::new(move |cc| Box::new(SmudgePadApp::new(cc, args))),
    )
}
