//! Zync desktop shell.
//!
//! Entry point: installs logging, loads settings, then opens the main window with the embedded webview.
//! When built without the `gui` feature, prints what the window would load and exits.

use zync::app::App;

fn start() -> App {
    let logging = zync::logging::init();
    let mut app = App::new(None);
    let loaded = app.startup();
    logging.apply_configured(&app.settings().logging.filter);
    if let Err(e) = loaded {
        tracing::warn!(path = %app.config_path(), "using default settings: {}", e);
    }
    app
}

#[cfg(feature = "gui")]
fn main() {
    let app = start();
    if let Err(e) = zync::ui::shell_app::run(app) {
        tracing::error!("failed to start Zync: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "gui"))]
fn main() {
    let app = start();
    let plan = match app.launch_plan() {
        Ok(plan) => plan,
        Err(e) => {
            tracing::error!("failed to resolve launch plan: {}", e);
            std::process::exit(1);
        }
    };

    println!("Zync v{} (headless)", env!("CARGO_PKG_VERSION"));
    println!("  settings: {}", app.config_path());
    println!(
        "  window:   \"{}\" {}x{}",
        plan.window.title, plan.window.size.width, plan.window.size.height
    );
    println!("  mode:     {:?}", plan.mode);
    println!("  target:   {}", plan.start_url);
    match &plan.asset_scheme {
        Some(scheme) => println!("  assets:   {}: -> {}", scheme, plan.asset_root.display()),
        None => println!("  assets:   served by the webview"),
    }
}
