//! Listing and markdown page models delivered by the server bootstrap.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// What kind of row an entry renders as.
pub enum EntryKind {
    /// A subdirectory; navigates to its own listing.
    Directory,
    /// A regular file.
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One row of the directory listing. The name is unique within its listing
/// and is the only identifier the action menu needs.
pub struct Entry {
    /// Entry name, unique within the listing.
    pub name: String,
    /// Row kind.
    pub kind: EntryKind,
}

impl Entry {
    /// Whether the entry opens in the markdown page.
    pub fn is_markdown(&self) -> bool {
        self.kind == EntryKind::File && self.name.ends_with(".md")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Server-provided data for the directory-listing page.
pub struct ListingPayload {
    /// Directory the listing was rendered for.
    pub current_dir: String,
    /// Entries in listing order.
    pub entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// Server-provided data for the markdown page.
pub struct MarkdownPayload {
    /// Raw markdown source handed to the editing widget.
    pub raw_markdown: String,
    /// Server-rendered HTML shown in view mode.
    pub rendered_html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
/// The `window.__FILEMAN__` bootstrap blob; exactly one side is populated
/// depending on which page the server rendered.
pub struct BootstrapPayload {
    /// Present on the directory-listing page.
    pub listing: Option<ListingPayload>,
    /// Present on the markdown page.
    pub markdown: Option<MarkdownPayload>,
}
