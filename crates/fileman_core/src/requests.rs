//! Typed request descriptions for the file-manager HTTP service.
//!
//! Every mutating page action boils down to one of these descriptions; the
//! host API (`fileman_host`) turns them into `fetch` calls. Form bodies and
//! query strings go through `url::form_urlencoded` instead of hand-built
//! string splicing.

use thiserror::Error;
use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A form-encoded POST to one fixed endpoint.
pub struct FormRequest {
    endpoint: &'static str,
    fields: Vec<(&'static str, String)>,
}

impl FormRequest {
    /// Endpoint path the request is POSTed to.
    pub fn endpoint(&self) -> &'static str {
        self.endpoint
    }

    /// Form fields in wire order.
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    /// The `application/x-www-form-urlencoded` body.
    pub fn encoded_body(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.fields {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}

/// Request creating a subdirectory `name` under `path`.
pub fn create_subdirectory(path: &str, name: &str) -> FormRequest {
    FormRequest {
        endpoint: "/createSubdirectory",
        fields: vec![("path", path.to_string()), ("name", name.to_string())],
    }
}

/// Request creating the markdown file `file_name` (already normalized via
/// [`markdown_file_name`]) under `path`.
pub fn create_markdown(path: &str, file_name: &str) -> FormRequest {
    FormRequest {
        endpoint: "/createMarkdown",
        fields: vec![("path", path.to_string()), ("name", file_name.to_string())],
    }
}

/// Request renaming `old_name` to `new_name` within `path`.
pub fn rename_entry(path: &str, old_name: &str, new_name: &str) -> FormRequest {
    FormRequest {
        endpoint: "/renameEntry",
        fields: vec![
            ("path", path.to_string()),
            ("oldName", old_name.to_string()),
            ("newName", new_name.to_string()),
        ],
    }
}

/// Request deleting `name` from `path`.
pub fn delete_entry(path: &str, name: &str) -> FormRequest {
    FormRequest {
        endpoint: "/deleteEntry",
        fields: vec![("path", path.to_string()), ("name", name.to_string())],
    }
}

/// Normalizes a user-entered markdown file name to carry exactly one `.md`
/// suffix.
pub fn markdown_file_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let base = trimmed.strip_suffix(".md").unwrap_or(trimmed);
    format!("{base}.md")
}

/// File name assigned to an image blob pasted from the clipboard.
pub fn pasted_image_name(epoch_ms: u64) -> String {
    format!("pasted_image_{epoch_ms}.png")
}

/// Path of `name` inside `dir`; `dir` is empty at the listing root.
pub fn child_path(dir: &str, name: &str) -> String {
    if dir.is_empty() {
        name.to_string()
    } else {
        format!("{dir}/{name}")
    }
}

/// Listing-page URL for a directory `path`.
pub fn listing_url(path: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("path", path)
        .finish();
    format!("/?{query}")
}

/// Editor-page URL for a markdown file `file_name` under `path`.
pub fn markdown_editor_url(path: &str, file_name: &str) -> String {
    let filename = child_path(path, file_name);
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("filename", &filename)
        .finish();
    format!("/markdown?{query}")
}

/// View-mode URL the save flow navigates to.
pub fn markdown_view_url(filename: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("filename", filename)
        .append_pair("edit", "false")
        .finish();
    format!("/markdown?{query}")
}

/// Endpoint URL for saving markdown content (raw text body).
pub fn save_markdown_url(filename: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("filename", filename)
        .finish();
    format!("/saveMarkdown?{query}")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
/// Failure extracting page parameters from `location.search`.
pub enum QueryError {
    /// The query string carries no `filename` parameter.
    #[error("query string has no `filename` parameter")]
    MissingFilename,
}

/// Extracts the `filename` query parameter: its value up to the next `&` or
/// the end of the query string, percent-decoded.
pub fn filename_from_query(search: &str) -> Result<String, QueryError> {
    pairs(search)
        .find(|(key, _)| key == "filename")
        .map(|(_, value)| value.into_owned())
        .ok_or(QueryError::MissingFilename)
}

/// Whether the query string requests edit mode (`edit=true`); absent or any
/// other value means view mode.
pub fn edit_mode_from_query(search: &str) -> bool {
    pairs(search).any(|(key, value)| key == "edit" && value == "true")
}

fn pairs(search: &str) -> form_urlencoded::Parse<'_> {
    form_urlencoded::parse(search.trim_start_matches('?').as_bytes())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn markdown_name_gains_single_suffix() {
        assert_eq!(markdown_file_name("notes"), "notes.md");
        assert_eq!(markdown_file_name("notes.md"), "notes.md");
        assert_eq!(markdown_file_name("  weekly report "), "weekly report.md");
    }

    #[test]
    fn delete_request_body_matches_wire_format() {
        let request = delete_entry("docs/2026", "foo.txt");
        assert_eq!(request.endpoint(), "/deleteEntry");
        assert_eq!(request.encoded_body(), "path=docs%2F2026&name=foo.txt");
    }

    #[test]
    fn rename_request_carries_both_names() {
        let request = rename_entry("docs", "old name.md", "new.md");
        assert_eq!(
            request.encoded_body(),
            "path=docs&oldName=old+name.md&newName=new.md"
        );
    }

    #[test]
    fn create_subdirectory_body_encodes_fields() {
        let request = create_subdirectory("docs", "meeting notes");
        assert_eq!(request.encoded_body(), "path=docs&name=meeting+notes");
    }

    #[test]
    fn child_path_skips_empty_root() {
        assert_eq!(child_path("", "docs"), "docs");
        assert_eq!(child_path("docs", "2026"), "docs/2026");
    }

    #[test]
    fn listing_url_encodes_path() {
        assert_eq!(listing_url("docs/meeting notes"), "/?path=docs%2Fmeeting+notes");
    }

    #[test]
    fn editor_url_targets_the_created_file() {
        assert_eq!(
            markdown_editor_url("docs", "notes.md"),
            "/markdown?filename=docs%2Fnotes.md"
        );
        assert_eq!(
            markdown_editor_url("", "notes.md"),
            "/markdown?filename=notes.md"
        );
    }

    #[test]
    fn view_url_disables_edit_mode() {
        assert_eq!(
            markdown_view_url("docs/notes.md"),
            "/markdown?filename=docs%2Fnotes.md&edit=false"
        );
    }

    #[test]
    fn filename_extraction_stops_at_next_pair_and_decodes() {
        assert_eq!(
            filename_from_query("?filename=docs%2Fnotes.md&edit=false"),
            Ok("docs/notes.md".to_string())
        );
        assert_eq!(
            filename_from_query("edit=true&filename=a.md"),
            Ok("a.md".to_string())
        );
        assert_eq!(
            filename_from_query("?edit=true"),
            Err(QueryError::MissingFilename)
        );
    }

    #[test]
    fn edit_mode_defaults_to_view() {
        assert!(edit_mode_from_query("?filename=a.md&edit=true"));
        assert!(!edit_mode_from_query("?filename=a.md&edit=false"));
        assert!(!edit_mode_from_query("?filename=a.md"));
        assert!(!edit_mode_from_query(""));
    }

    #[test]
    fn pasted_image_name_embeds_timestamp() {
        assert_eq!(pasted_image_name(1756100000000), "pasted_image_1756100000000.png");
    }
}
