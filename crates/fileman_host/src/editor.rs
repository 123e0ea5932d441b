//! Contract for the third-party markdown editing widget.
//!
//! The widget itself is an opaque external library loaded by the page
//! template; the pages only ever mount it into a host element and read its
//! current document back.

use std::{cell::RefCell, rc::Rc};

/// Stable interface to the rich-text markdown widget.
pub trait EditorWidgetService {
    /// Mounts the widget into the element with `host_dom_id`, seeded with
    /// `initial_markdown`.
    fn mount(&self, host_dom_id: &str, initial_markdown: &str) -> Result<(), String>;

    /// Reads the widget's current markdown document.
    fn content(&self) -> Result<String, String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Widget stand-in for unsupported targets; mounting succeeds and the
/// document is empty.
pub struct NoopEditorWidget;

impl EditorWidgetService for NoopEditorWidget {
    fn mount(&self, _host_dom_id: &str, _initial_markdown: &str) -> Result<(), String> {
        Ok(())
    }

    fn content(&self) -> Result<String, String> {
        Ok(String::new())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory widget for native tests: holds the mounted document and lets
/// tests overwrite it as if the user typed.
pub struct MemoryEditorWidget {
    document: Rc<RefCell<Option<String>>>,
}

impl MemoryEditorWidget {
    /// Replaces the widget document, as a user edit would.
    pub fn set_content(&self, markdown: &str) {
        *self.document.borrow_mut() = Some(markdown.to_string());
    }

    /// Whether `mount` has been called.
    pub fn is_mounted(&self) -> bool {
        self.document.borrow().is_some()
    }
}

impl EditorWidgetService for MemoryEditorWidget {
    fn mount(&self, _host_dom_id: &str, initial_markdown: &str) -> Result<(), String> {
        *self.document.borrow_mut() = Some(initial_markdown.to_string());
        Ok(())
    }

    fn content(&self) -> Result<String, String> {
        self.document
            .borrow()
            .clone()
            .ok_or_else(|| "editor widget is not mounted".to_string())
    }
}
