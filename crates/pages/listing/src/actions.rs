//! Dialog-driven action flows behind the toolbar and menu handlers.
//!
//! Plain async functions over [`PageServices`] so the cancel, failure, and
//! success paths run natively; the components wrap them in `spawn_local`.

use fileman_core::requests::{self, FormRequest};
use fileman_host::PageServices;
use leptos::logging;

pub(crate) enum SubmitOutcome {
    Reload,
    Navigate(String),
}

/// Sends one form request; success reloads or navigates, failure alerts with
/// the operation's fixed message. The menu (if any) is already hidden by the
/// time this runs.
pub(crate) async fn submit(
    services: PageServices,
    request: FormRequest,
    failure_alert: &'static str,
    outcome: SubmitOutcome,
) {
    match services.api.send_form(&request).await {
        Ok(()) => match outcome {
            SubmitOutcome::Reload => services.navigation.reload(),
            SubmitOutcome::Navigate(url) => services.navigation.navigate(&url),
        },
        Err(err) => {
            logging::error!("{} request failed: {err}", request.endpoint());
            services.dialogs.alert(failure_alert);
        }
    }
}

/// Prompts for a subdirectory name and creates it; cancel and blank input
/// are silent no-ops.
pub(crate) async fn create_subdirectory(services: PageServices, current_dir: String) {
    let Some(name) = services.dialogs.prompt("Enter subdirectory name:") else {
        return;
    };
    let name = name.trim().to_string();
    if name.is_empty() {
        return;
    }
    submit(
        services,
        requests::create_subdirectory(&current_dir, &name),
        "Failed to create subdirectory",
        SubmitOutcome::Reload,
    )
    .await;
}

/// Prompts for a markdown file name, creates the file, and opens it in the
/// editor page.
pub(crate) async fn create_markdown(services: PageServices, current_dir: String) {
    let Some(raw) = services
        .dialogs
        .prompt("Enter markdown file name (without .md extension):")
    else {
        return;
    };
    if raw.trim().is_empty() {
        return;
    }
    let file_name = requests::markdown_file_name(&raw);
    submit(
        services,
        requests::create_markdown(&current_dir, &file_name),
        "Failed to create markdown file",
        SubmitOutcome::Navigate(requests::markdown_editor_url(&current_dir, &file_name)),
    )
    .await;
}

/// Prompts for the new name and renames `name`; cancel and blank input are
/// silent no-ops.
pub(crate) async fn rename_entry(services: PageServices, current_dir: String, name: String) {
    let Some(new_name) = services
        .dialogs
        .prompt(&format!("Enter new name for {name}:"))
    else {
        return;
    };
    let new_name = new_name.trim().to_string();
    if new_name.is_empty() {
        return;
    }
    submit(
        services,
        requests::rename_entry(&current_dir, &name, &new_name),
        "Failed to rename entry",
        SubmitOutcome::Reload,
    )
    .await;
}

/// Asks for confirmation and deletes `name`; cancel is a silent no-op.
pub(crate) async fn delete_entry(services: PageServices, current_dir: String, name: String) {
    if !services.dialogs.confirm(&format!("Delete {name}?")) {
        return;
    }
    submit(
        services,
        requests::delete_entry(&current_dir, &name),
        "Failed to delete entry",
        SubmitOutcome::Reload,
    )
    .await;
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use fileman_host::{
        MemoryDialogService, MemoryFileManagerApi, MemoryNavigationService, NavigationRecord,
        NoopEditorWidget, RecordedCall,
    };
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    struct Harness {
        services: PageServices,
        api: MemoryFileManagerApi,
        dialogs: MemoryDialogService,
        navigation: MemoryNavigationService,
    }

    fn harness() -> Harness {
        let api = MemoryFileManagerApi::default();
        let dialogs = MemoryDialogService::default();
        let navigation = MemoryNavigationService::default();
        let services = PageServices {
            api: Rc::new(api.clone()),
            dialogs: Rc::new(dialogs.clone()),
            navigation: Rc::new(navigation.clone()),
            editor: Rc::new(NoopEditorWidget),
        };
        Harness {
            services,
            api,
            dialogs,
            navigation,
        }
    }

    #[test]
    fn confirmed_delete_posts_wire_body_then_reloads() {
        let h = harness();
        h.dialogs.answer_confirm(true);

        block_on(delete_entry(
            h.services.clone(),
            "docs".to_string(),
            "foo.txt".to_string(),
        ));

        assert_eq!(
            h.api.recorded(),
            vec![RecordedCall::Form {
                endpoint: "/deleteEntry",
                body: "path=docs&name=foo.txt".to_string(),
            }]
        );
        assert_eq!(h.navigation.visited(), vec![NavigationRecord::Reload]);
        assert_eq!(h.dialogs.alerts(), Vec::<String>::new());
    }

    #[test]
    fn canceled_delete_sends_nothing() {
        let h = harness();
        // MemoryDialogService answers confirm with false by default.
        block_on(delete_entry(
            h.services.clone(),
            "docs".to_string(),
            "foo.txt".to_string(),
        ));

        assert_eq!(h.api.recorded(), Vec::new());
        assert_eq!(h.navigation.visited(), Vec::new());
        assert_eq!(h.dialogs.alerts(), Vec::<String>::new());
    }

    #[test]
    fn rename_failure_alerts_and_stays_on_page() {
        let h = harness();
        h.dialogs.answer_prompt(Some("new.md"));
        h.api.fail_requests();

        block_on(rename_entry(
            h.services.clone(),
            "docs".to_string(),
            "old.md".to_string(),
        ));

        assert_eq!(
            h.api.recorded(),
            vec![RecordedCall::Form {
                endpoint: "/renameEntry",
                body: "path=docs&oldName=old.md&newName=new.md".to_string(),
            }]
        );
        assert_eq!(h.navigation.visited(), Vec::new());
        assert_eq!(h.dialogs.alerts(), vec!["Failed to rename entry".to_string()]);
    }

    #[test]
    fn new_markdown_opens_the_created_file() {
        let h = harness();
        h.dialogs.answer_prompt(Some("notes"));

        block_on(create_markdown(h.services.clone(), "docs".to_string()));

        assert_eq!(
            h.api.recorded(),
            vec![RecordedCall::Form {
                endpoint: "/createMarkdown",
                body: "path=docs&name=notes.md".to_string(),
            }]
        );
        assert_eq!(
            h.navigation.visited(),
            vec![NavigationRecord::Navigate(
                "/markdown?filename=docs%2Fnotes.md".to_string()
            )]
        );
    }

    #[test]
    fn new_subdirectory_trims_and_reloads() {
        let h = harness();
        h.dialogs.answer_prompt(Some("  meeting notes "));

        block_on(create_subdirectory(h.services.clone(), "docs".to_string()));

        assert_eq!(
            h.api.recorded(),
            vec![RecordedCall::Form {
                endpoint: "/createSubdirectory",
                body: "path=docs&name=meeting+notes".to_string(),
            }]
        );
        assert_eq!(h.navigation.visited(), vec![NavigationRecord::Reload]);
    }

    #[test]
    fn blank_subdirectory_name_is_a_silent_no_op() {
        let h = harness();
        h.dialogs.answer_prompt(Some("   "));

        block_on(create_subdirectory(h.services.clone(), "docs".to_string()));

        assert_eq!(h.api.recorded(), Vec::new());
        assert_eq!(h.navigation.visited(), Vec::new());
        assert_eq!(h.dialogs.alerts(), Vec::<String>::new());
    }
}
