//! Pure client-side logic for the file-manager pages.
//!
//! This crate carries everything that can run off the browser: the hover-menu
//! reducer driving the per-entry action menus, the request descriptions for
//! the file-manager HTTP service, and the listing/markdown page models. The
//! browser wiring lives in `fileman_host_web` and the page crates.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod hover;
pub mod model;
pub mod requests;

pub use hover::{
    reduce_hover, HoverAction, HoverEffect, HoverPhase, HoverState, MenuPosition, REVEAL_DELAY_MS,
};
pub use model::{BootstrapPayload, Entry, EntryKind, ListingPayload, MarkdownPayload};
pub use requests::{
    child_path, create_markdown, create_subdirectory, delete_entry, edit_mode_from_query,
    filename_from_query, listing_url, markdown_editor_url, markdown_file_name, markdown_view_url,
    pasted_image_name, rename_entry, save_markdown_url, FormRequest, QueryError,
};
