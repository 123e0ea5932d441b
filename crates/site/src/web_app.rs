//! Route dispatch for the two server-rendered pages.

use fileman_core::model::BootstrapPayload;
use fileman_page_listing::ListingPage;
use fileman_page_markdown::MarkdownPage;
use leptos::*;

/// Global the server's page templates assign the bootstrap JSON to.
const BOOTSTRAP_GLOBAL: &str = "__FILEMAN__";

#[component]
/// Mounts the page matching `location.pathname`: `/markdown` renders the
/// markdown page, everything else the directory listing.
pub fn SiteApp() -> impl IntoView {
    match page_view() {
        Ok(page) => page,
        Err(message) => {
            logging::error!("site boot failed: {message}");
            view! {
                <div class="site-boot-error" role="alert">
                    <p>"The file manager could not start."</p>
                    <p class="site-boot-error-detail">{message}</p>
                </div>
            }
            .into_view()
        }
    }
}

fn page_view() -> Result<View, String> {
    let services = fileman_host_web::page_services();
    let payload = bootstrap_payload()?;

    if current_pathname()?.starts_with("/markdown") {
        let markdown = payload
            .markdown
            .ok_or_else(|| "bootstrap payload has no markdown document".to_string())?;
        Ok(view! { <MarkdownPage payload=markdown services=services /> }.into_view())
    } else {
        let listing = payload
            .listing
            .ok_or_else(|| "bootstrap payload has no directory listing".to_string())?;
        Ok(view! { <ListingPage payload=listing services=services /> }.into_view())
    }
}

#[cfg(target_arch = "wasm32")]
fn bootstrap_payload() -> Result<BootstrapPayload, String> {
    use wasm_bindgen::JsValue;

    let window = web_sys::window().ok_or_else(|| "no window in this context".to_string())?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(BOOTSTRAP_GLOBAL))
        .map_err(|err| format!("bootstrap lookup failed: {err:?}"))?;
    if value.is_undefined() || value.is_null() {
        return Err(format!("global `{BOOTSTRAP_GLOBAL}` payload is missing"));
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|err| format!("bootstrap payload is invalid: {err}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn bootstrap_payload() -> Result<BootstrapPayload, String> {
    Err("bootstrap payload is only available in the browser".to_string())
}

#[cfg(target_arch = "wasm32")]
fn current_pathname() -> Result<String, String> {
    web_sys::window()
        .ok_or_else(|| "no window in this context".to_string())?
        .location()
        .pathname()
        .map_err(|err| format!("pathname lookup failed: {err:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn current_pathname() -> Result<String, String> {
    Err("location is only available in the browser".to_string())
}
