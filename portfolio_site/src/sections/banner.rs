//! Console greeting for visitors who open the dev tools.

use leptos::prelude::*;
use portfolio_core::VERSION;
use wasm_bindgen::prelude::*;

use crate::state::use_portfolio;
use crate::transport::SiteTransport;

/// Prints the banner once on mount; renders nothing.
#[component]
#[allow(clippy::unused_unit)]
pub fn ConsoleBanner() -> impl IntoView {
    let data = use_portfolio();
    let name = data.personal.name.clone();
    let github = data.personal.github.clone();

    Effect::new(move || {
        print_banner(&name, &github);
    });

    view! {}
}

fn print_banner(name: &str, github: &str) {
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%c{name} \u{00B7} portfolio v{VERSION}")),
        &JsValue::from_str("color: #111827; font-weight: bold; font-size: 14px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str(&format!("%cCurious how this works? Source lives at {github}")),
        &JsValue::from_str("color: #4b5563;"),
    );
    web_sys::console::log_1(&JsValue::from_str(&SiteTransport::from_config().describe()));
}
