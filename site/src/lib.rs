//! Personal portfolio site, rendered client side with `weft`.

pub mod config;
pub mod fetch;
pub mod github;
pub mod routes;
pub mod strings;
pub mod views;

use wasm_bindgen::prelude::*;

use crate::config::{SiteConfig, EMBEDDED_CONFIG};

const ROOT_ID: &str = "app";

fn init_tracing(level: tracing::Level) {
    let config = tracing_wasm::WASMLayerConfigBuilder::new()
        .set_report_logs_in_timings(false)
        .set_max_level(level)
        .set_console_config(tracing_wasm::ConsoleConfig::ReportWithoutConsoleColor)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);
}

/// Element the router mounts into, created if the page does not provide one.
fn mount_root() -> Result<web_sys::Node, JsValue> {
    let document = weft::web::document();
    if let Some(root) = document.get_element_by_id(ROOT_ID) {
        return Ok(root.into());
    }
    let root = document.create_element("div")?;
    root.set_id(ROOT_ID);
    weft::web::body().append_child(&root)?;
    Ok(root.into())
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let browser_language = weft::web::window().navigator().language();
    let (config, config_error) =
        match SiteConfig::from_toml(EMBEDDED_CONFIG, browser_language.as_deref()) {
            Ok(config) => (config, None),
            Err(err) => (SiteConfig::default(), Some(err)),
        };

    init_tracing(config.log_level);
    if let Some(err) = config_error {
        tracing::error!(error = %err, "invalid embedded configuration, using defaults");
    }
    tracing::info!(
        language = config.language.tag(),
        user = %config.github_user,
        "starting site"
    );

    let handle = routes::router(config, mount_root()?).start()?;
    // The router lives for the whole page lifetime.
    std::mem::forget(handle);
    Ok(())
}
