//! Concrete service wiring for the browser pages.

use std::rc::Rc;

use fileman_host::PageServices;

use crate::{WebDialogService, WebEditorWidget, WebFileManagerApi, WebNavigationService};

/// Builds the browser-backed service bundle the site hands to its pages.
pub fn page_services() -> PageServices {
    PageServices {
        api: Rc::new(WebFileManagerApi),
        dialogs: Rc::new(WebDialogService),
        navigation: Rc::new(WebNavigationService),
        editor: Rc::new(WebEditorWidget),
    }
}
