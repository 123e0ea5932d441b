//! Markdown page: server-rendered view mode and a widget-backed edit mode.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use fileman_core::{model::MarkdownPayload, requests};
use fileman_host::PageServices;
use leptos::*;

const EDITOR_HOST_ID: &str = "markdown-editor-host";

/// Reads the widget document and posts it; success returns the page to view
/// mode, any failure alerts with the fixed save message.
async fn save_document(services: PageServices, filename: String) {
    let content = match services.editor.content() {
        Ok(content) => content,
        Err(err) => {
            logging::error!("editor widget read failed: {err}");
            services.dialogs.alert("Failed to save markdown file");
            return;
        }
    };
    match services.api.save_markdown(&filename, &content).await {
        Ok(()) => services
            .navigation
            .navigate(&requests::markdown_view_url(&filename)),
        Err(err) => {
            logging::error!("saveMarkdown request failed: {err}");
            services.dialogs.alert("Failed to save markdown file");
        }
    }
}

#[component]
/// The markdown page.
///
/// The `filename` and `edit` query parameters select the document and the
/// initial mode; the editing widget is mounted lazily the first time edit
/// mode becomes active and re-mounted after a cancel.
pub fn MarkdownPage(
    /// Server-provided raw markdown and rendered HTML.
    payload: MarkdownPayload,
    /// Host services (HTTP, dialogs, navigation, editor widget).
    services: PageServices,
) -> impl IntoView {
    let query = services.navigation.query_string();
    let filename = match requests::filename_from_query(&query) {
        Ok(filename) => filename,
        Err(err) => {
            return view! {
                <div class="markdown-shell">
                    <p class="markdown-error">{format!("Cannot display markdown page: {err}")}</p>
                </div>
            }
            .into_view();
        }
    };

    let editing = create_rw_signal(requests::edit_mode_from_query(&query));
    let widget_mounted = store_value(false);
    let file = store_value(filename.clone());
    let raw_markdown = store_value(payload.raw_markdown);
    let rendered_html = store_value(payload.rendered_html);
    let services = store_value(services);

    // Mount the widget once the edit-mode host element exists.
    create_effect(move |_| {
        if !editing.get() || widget_mounted.get_value() {
            return;
        }
        let services = services.get_value();
        match services.editor.mount(EDITOR_HOST_ID, &raw_markdown.get_value()) {
            Ok(()) => widget_mounted.set_value(true),
            Err(err) => logging::error!("editor widget mount failed: {err}"),
        }
    });

    let on_edit = move |_| editing.set(true);

    let on_cancel = move |_| {
        editing.set(false);
        widget_mounted.set_value(false);
    };

    let on_save = move |_| {
        spawn_local(save_document(services.get_value(), file.get_value()));
    };

    view! {
        <div class="markdown-shell">
            <header class="markdown-header">
                <span class="markdown-title">{filename}</span>
                <div class="markdown-controls" role="toolbar" aria-label="Document actions">
                    <Show
                        when=move || editing.get()
                        fallback=move || {
                            view! {
                                <button type="button" on:click=on_edit>"Edit"</button>
                            }
                        }
                    >
                        <button type="button" on:click=on_save>"Save"</button>
                        <button type="button" on:click=on_cancel>"Cancel"</button>
                    </Show>
                </div>
            </header>

            <Show
                when=move || editing.get()
                fallback=move || {
                    view! {
                        <article class="markdown-view" inner_html=rendered_html.get_value()></article>
                    }
                }
            >
                <div id=EDITOR_HOST_ID class="markdown-editor-host"></div>
            </Show>
        </div>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use fileman_host::{
        EditorWidgetService, MemoryDialogService, MemoryEditorWidget, MemoryFileManagerApi,
        MemoryNavigationService, NavigationRecord, RecordedCall,
    };
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    struct Harness {
        services: PageServices,
        api: MemoryFileManagerApi,
        dialogs: MemoryDialogService,
        navigation: MemoryNavigationService,
        editor: MemoryEditorWidget,
    }

    fn harness() -> Harness {
        let api = MemoryFileManagerApi::default();
        let dialogs = MemoryDialogService::default();
        let navigation = MemoryNavigationService::default();
        let editor = MemoryEditorWidget::default();
        let services = PageServices {
            api: Rc::new(api.clone()),
            dialogs: Rc::new(dialogs.clone()),
            navigation: Rc::new(navigation.clone()),
            editor: Rc::new(editor.clone()),
        };
        Harness {
            services,
            api,
            dialogs,
            navigation,
            editor,
        }
    }

    #[test]
    fn save_posts_widget_content_and_returns_to_view_mode() {
        let h = harness();
        h.editor.mount(EDITOR_HOST_ID, "# draft").expect("mount");
        h.editor.set_content("# final");

        block_on(save_document(
            h.services.clone(),
            "docs/notes.md".to_string(),
        ));

        assert_eq!(
            h.api.recorded(),
            vec![RecordedCall::Save {
                filename: "docs/notes.md".to_string(),
                content: "# final".to_string(),
            }]
        );
        assert_eq!(
            h.navigation.visited(),
            vec![NavigationRecord::Navigate(
                "/markdown?filename=docs%2Fnotes.md&edit=false".to_string()
            )]
        );
        assert_eq!(h.dialogs.alerts(), Vec::<String>::new());
    }

    #[test]
    fn save_with_unmounted_widget_alerts_without_posting() {
        let h = harness();
        assert!(!h.editor.is_mounted());

        block_on(save_document(
            h.services.clone(),
            "docs/notes.md".to_string(),
        ));

        assert_eq!(h.api.recorded(), Vec::new());
        assert_eq!(h.navigation.visited(), Vec::new());
        assert_eq!(
            h.dialogs.alerts(),
            vec!["Failed to save markdown file".to_string()]
        );
    }

    #[test]
    fn save_failure_alerts_and_stays_in_edit_mode() {
        let h = harness();
        h.editor.mount(EDITOR_HOST_ID, "# draft").expect("mount");
        h.api.fail_requests();

        block_on(save_document(
            h.services.clone(),
            "docs/notes.md".to_string(),
        ));

        assert_eq!(h.navigation.visited(), Vec::new());
        assert_eq!(
            h.dialogs.alerts(),
            vec!["Failed to save markdown file".to_string()]
        );
    }
}
