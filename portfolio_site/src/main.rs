// Portfolio site, Leptos 0.8 CSR
// Built with trunk: `trunk serve` for development, `trunk build --release` to ship.

mod config;
mod dom;
mod sections;
mod state;
mod transport;

use std::sync::Arc;

use leptos::prelude::*;
use portfolio_core::PortfolioData;
use sections::*;
use state::SiteState;

fn main() {
    console_error_panic_hook::set_once();
    match PortfolioData::embedded() {
        Ok(data) => {
            let data = Arc::new(data);
            leptos::mount::mount_to_body(move || view! { <App data /> });
        }
        Err(err) => web_sys::console::error_1(
            &format!("portfolio data failed to load: {err}").into(),
        ),
    }
}

#[component]
fn App(data: Arc<PortfolioData>) -> impl IntoView {
    let state = SiteState::new();
    provide_context(state);
    provide_context(data);
    state.track_scroll();

    view! {
        <ConsoleBanner />
        <Header />
        <main>
            <Hero />
            <About />
            <Education />
            <Experience />
            <Projects />
            <Contact />
        </main>
        <Footer />
    }
}
