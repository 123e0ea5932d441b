//! Browser entry for the file-manager client: bootstrap decode, route
//! dispatch, and mounting.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod web_app;

pub use web_app::SiteApp;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
/// Installs the panic hook and mounts the page selected by the current
/// location.
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
