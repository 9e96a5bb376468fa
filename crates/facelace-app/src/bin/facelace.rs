//! Facelace desktop and web entry point.

use facelace_app::FacelaceApp;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    const APP_ID: &str = "io.github.facelace";

    better_panic::install();
    env_logger::init();

    log::info!(
        "Starting Facelace, version={}",
        facelace_app::version::build_version()
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_app_id(APP_ID)
            .with_resizable(true)
            .with_inner_size((820.0, 720.0))
            .with_min_inner_size((420.0, 380.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Facelace",
        options,
        Box::new(|cc| Ok(Box::new(FacelaceApp::new(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn install_panic_alert_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        previous(panic_info);

        let message = panic_info.to_string();
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!(
                "Facelace has crashed.\n\n{message}\n\nReloading the page may fix the issue.\n\nSee the developer console for details."
            ));
        }
    }));
}

#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "the_canvas_id";

#[cfg(target_arch = "wasm32")]
async fn start_web(document: &web_sys::Document) -> Result<(), String> {
    use eframe::wasm_bindgen::JsCast as _;

    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| format!("no element with id {CANVAS_ID}"))?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| format!("{CANVAS_ID} is not a canvas"))?;

    eframe::WebRunner::new()
        .start(
            canvas,
            eframe::WebOptions::default(),
            Box::new(|cc| Ok(Box::new(FacelaceApp::new(cc)))),
        )
        .await
        .map_err(|err| format!("failed to start eframe: {err:?}"))
}

#[cfg(target_arch = "wasm32")]
fn main() {
    install_panic_alert_hook();

    // Redirect `log` message to `console.log` and friends:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    log::info!(
        "Starting Facelace WASM application, version={}",
        facelace_app::version::build_version()
    );

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::error!("no browser document to attach to");
        return;
    };

    wasm_bindgen_futures::spawn_local(async move {
        let result = start_web(&document).await;
        if let Err(err) = &result {
            log::error!("{err}");
        }
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            if result.is_ok() {
                loading_text.remove();
            } else {
                loading_text.set_inner_html(
                    "<p> Facelace failed to start. See the developer console for details. </p>",
                );
            }
        }
    });
}
