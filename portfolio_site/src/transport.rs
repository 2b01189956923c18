// Contact transports: real fetch to the backend, or a simulated delay

use std::time::Duration;

use leptos::prelude::set_timeout;
use portfolio_core::api::contact_url;
use portfolio_core::contact::SUCCESS_DESCRIPTION;
use portfolio_core::{ContactRequest, ContactResponse, ContactTransport, ErrorBody, SubmitError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config;

/// Delay of the simulated submission.
pub const SIMULATED_DELAY: Duration = Duration::from_millis(1000);

fn js_error(err: JsValue) -> SubmitError {
    SubmitError::Transport(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// `POST {base}/api/contact` with a JSON body.
#[derive(Clone, Debug)]
pub struct FetchTransport {
    url: String,
}

impl FetchTransport {
    pub fn new(base_url: &str) -> Self {
        Self {
            url: contact_url(base_url),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl ContactTransport for FetchTransport {
    async fn send(&self, request: ContactRequest) -> Result<ContactResponse, SubmitError> {
        let body = serde_json::to_string(&request)
            .map_err(|err| SubmitError::Transport(err.to_string()))?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_mode(RequestMode::Cors);
        init.set_body(&JsValue::from_str(&body));

        let req = Request::new_with_str_and_init(&self.url, &init).map_err(js_error)?;
        req.headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;

        let window = web_sys::window()
            .ok_or_else(|| SubmitError::Transport("no window available".to_string()))?;
        let response: Response = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?
            .as_string()
            .unwrap_or_default();

        if !response.ok() {
            let detail = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .map(|body| body.detail);
            return Err(SubmitError::Status {
                status: response.status(),
                detail,
            });
        }
        serde_json::from_str(&text).map_err(|err| SubmitError::Decode(err.to_string()))
    }
}

/// Waits a fixed delay and always succeeds. No request leaves the browser.
#[derive(Clone, Debug)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self {
            delay: SIMULATED_DELAY,
        }
    }
}

impl ContactTransport for SimulatedTransport {
    async fn send(&self, _request: ContactRequest) -> Result<ContactResponse, SubmitError> {
        let (tx, rx) = futures::channel::oneshot::channel::<()>();
        set_timeout(
            move || {
                let _ = tx.send(());
            },
            self.delay,
        );
        let _ = rx.await;
        Ok(ContactResponse {
            success: true,
            message: SUCCESS_DESCRIPTION.to_string(),
            id: None,
        })
    }
}

/// Transport picked from the build-time backend setting.
#[derive(Clone, Debug)]
pub enum SiteTransport {
    Fetch(FetchTransport),
    Simulated(SimulatedTransport),
}

impl SiteTransport {
    pub fn from_config() -> Self {
        match config::backend_url() {
            Some(base) => SiteTransport::Fetch(FetchTransport::new(base)),
            None => SiteTransport::Simulated(SimulatedTransport::default()),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            SiteTransport::Fetch(fetch) => format!("contact form posts to {}", fetch.url()),
            SiteTransport::Simulated(_) => "contact form runs in simulated mode".to_string(),
        }
    }
}

impl ContactTransport for SiteTransport {
    async fn send(&self, request: ContactRequest) -> Result<ContactResponse, SubmitError> {
        match self {
            SiteTransport::Fetch(fetch) => fetch.send(request).await,
            SiteTransport::Simulated(simulated) => simulated.send(request).await,
        }
    }
}
