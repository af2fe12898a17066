//! Main application entry point (native).
//!
//! Usage: `linekit [CONFIG.json]`

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting LineKit");

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "native")]
fn run() -> Result<(), linekit_app::AppError> {
    let mut config = linekit_app::AppConfig::default();
    if let Some(path) = std::env::args().nth(1) {
        config = config.with_editor(linekit_core::EditorConfig::load(path)?);
    }

    linekit_app::ShortcutRegistry::print_all();
    linekit_app::App::run(config)
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
