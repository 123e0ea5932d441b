//! Host-service contracts for the file-manager pages.
//!
//! This crate is the API-first boundary between page components and the
//! browser: the HTTP service, blocking dialogs, navigation, and the opaque
//! markdown editing widget are all reached through these traits. Concrete
//! browser adapters live in `fileman_host_web`; the `Noop`/`Memory`
//! implementations here back native tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod api;
pub mod dialogs;
pub mod editor;
pub mod navigation;
pub mod services;

pub use api::{
    ApiFuture, FileManagerApi, MemoryFileManagerApi, NoopFileManagerApi, RecordedCall,
    UploadPayload,
};
pub use dialogs::{DialogService, MemoryDialogService, NoopDialogService};
pub use editor::{EditorWidgetService, MemoryEditorWidget, NoopEditorWidget};
pub use navigation::{
    MemoryNavigationService, NavigationRecord, NavigationService, NoopNavigationService,
};
pub use services::PageServices;
