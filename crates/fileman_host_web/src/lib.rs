//! Browser (`wasm32`) implementations of the [`fileman_host`] contracts.
//!
//! Fetch-backed HTTP for the file-manager endpoints, the blocking
//! `window.alert`/`confirm`/`prompt` dialogs, `location`-based navigation,
//! and the JS-interop binding to the page-hosted markdown editing widget.
//! Non-wasm builds get inert fallbacks so dependent crates still compile
//! natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod adapters;
pub mod dialogs;
pub mod editor;
mod http;
pub mod navigation;

pub use adapters::page_services;
pub use dialogs::WebDialogService;
pub use editor::WebEditorWidget;
pub use http::WebFileManagerApi;
pub use navigation::WebNavigationService;
