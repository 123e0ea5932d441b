//! Service bundle handed to the page components.

use std::rc::Rc;

use crate::{
    api::{FileManagerApi, NoopFileManagerApi},
    dialogs::{DialogService, NoopDialogService},
    editor::{EditorWidgetService, NoopEditorWidget},
    navigation::{NavigationService, NoopNavigationService},
};

#[derive(Clone)]
/// Every host service a page needs, behind shared trait objects so page
/// closures can clone the bundle freely.
pub struct PageServices {
    /// File-manager HTTP service.
    pub api: Rc<dyn FileManagerApi>,
    /// Blocking browser dialogs.
    pub dialogs: Rc<dyn DialogService>,
    /// Location / navigation access.
    pub navigation: Rc<dyn NavigationService>,
    /// Markdown editing widget.
    pub editor: Rc<dyn EditorWidgetService>,
}

impl PageServices {
    /// Bundle of no-op services for unsupported targets and component
    /// previews.
    pub fn noop() -> Self {
        Self {
            api: Rc::new(NoopFileManagerApi),
            dialogs: Rc::new(NoopDialogService),
            navigation: Rc::new(NoopNavigationService),
            editor: Rc::new(NoopEditorWidget),
        }
    }
}
