//! Directory-listing page: entry rows, hover-triggered action menus, and
//! uploads via file picker, drag-and-drop, and clipboard paste.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod actions;
mod controller;
mod uploads;

pub use controller::HoverMenuController;

use fileman_core::{
    hover::MenuPosition,
    model::{Entry, EntryKind, ListingPayload},
    requests,
};
use fileman_host::PageServices;
use leptos::*;
use wasm_bindgen::JsCast;

fn entry_href(current_dir: &str, entry: &Entry) -> Option<String> {
    match entry.kind {
        EntryKind::Directory => Some(requests::listing_url(&requests::child_path(
            current_dir,
            &entry.name,
        ))),
        EntryKind::File if entry.is_markdown() => {
            Some(requests::markdown_editor_url(current_dir, &entry.name))
        }
        EntryKind::File => None,
    }
}

#[component]
/// The directory-listing page.
///
/// Owns the page's [`HoverMenuController`] plus the upload wiring; every
/// mutating action goes through the service bundle and ends in a reload,
/// a navigation, or an alert.
pub fn ListingPage(
    /// Server-provided listing data.
    payload: ListingPayload,
    /// Host services (HTTP, dialogs, navigation).
    services: PageServices,
) -> impl IntoView {
    let controller = HoverMenuController::new();
    controller.install_dismiss_listeners();

    let current_dir = store_value(payload.current_dir);
    let entries = store_value(payload.entries);
    let drag_active = create_rw_signal(false);
    let file_input = create_node_ref::<html::Input>();

    let paste_listener = window_event_listener(ev::paste, {
        let services = services.clone();
        move |ev| {
            let Some(data) = ev.unchecked_ref::<web_sys::ClipboardEvent>().clipboard_data() else {
                return;
            };
            let pasted = uploads::pasted_image_files(&data);
            if pasted.is_empty() {
                return;
            }
            ev.prevent_default();
            uploads::upload_files(&services, &current_dir.get_value(), pasted);
        }
    });
    on_cleanup(move || paste_listener.remove());

    let on_new_subdirectory = {
        let services = services.clone();
        move |_| {
            spawn_local(actions::create_subdirectory(
                services.clone(),
                current_dir.get_value(),
            ));
        }
    };

    let on_new_markdown = {
        let services = services.clone();
        move |_| {
            spawn_local(actions::create_markdown(
                services.clone(),
                current_dir.get_value(),
            ));
        }
    };

    let on_pick_upload = move |_| {
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    let on_picked = {
        let services = services.clone();
        move |ev: web_sys::Event| {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let files = uploads::files_from_list(input.files());
            input.set_value("");
            uploads::upload_files(
                &services,
                &current_dir.get_value(),
                files.into_iter().map(|file| (file, None)).collect(),
            );
        }
    };

    let on_drop = {
        let services = services.clone();
        move |ev: web_sys::DragEvent| {
            ev.prevent_default();
            drag_active.set(false);
            let files = ev
                .data_transfer()
                .map(|data| uploads::files_from_list(data.files()))
                .unwrap_or_default();
            uploads::upload_files(
                &services,
                &current_dir.get_value(),
                files.into_iter().map(|file| (file, None)).collect(),
            );
        }
    };

    let services = store_value(services);
    view! {
        <div class="listing-shell">
            <div class="listing-toolbar" role="toolbar" aria-label="Listing actions">
                <button type="button" on:click=on_new_subdirectory>"New Subdirectory"</button>
                <button type="button" on:click=on_new_markdown>"New Markdown"</button>
                <button type="button" on:click=on_pick_upload>"Upload"</button>
                <input
                    type="file"
                    multiple=true
                    style="display:none;"
                    node_ref=file_input
                    on:change=on_picked
                    aria-hidden="true"
                />
            </div>

            <section
                class="listing-pane"
                class=("drop-target", move || drag_active.get())
                on:dragenter=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    drag_active.set(true);
                }
                on:dragover=move |ev: web_sys::DragEvent| ev.prevent_default()
                on:dragleave=move |_| drag_active.set(false)
                on:drop=on_drop
            >
                <header class="listing-header">
                    <span class="listing-path">{move || current_dir.get_value()}</span>
                </header>

                <Show
                    when=move || !entries.get_value().is_empty()
                    fallback=|| view! { <p class="listing-empty">"This directory is empty."</p> }
                >
                    <ul class="listing-entries">
                        <For
                            each=move || entries.get_value()
                            key=|entry| entry.name.clone()
                            let:entry
                        >
                            <EntryRow
                                entry=entry
                                current_dir=current_dir.get_value()
                                controller=controller
                                services=services.get_value()
                            />
                        </For>
                    </ul>
                </Show>
            </section>
        </div>
    }
}

#[component]
fn EntryRow(
    entry: Entry,
    current_dir: String,
    controller: HoverMenuController,
    services: PageServices,
) -> impl IntoView {
    let name = store_value(entry.name.clone());
    let dir = store_value(current_dir);
    let services = store_value(services);

    let on_enter = move |ev: web_sys::MouseEvent| {
        let Some(target) = ev
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let rect = target.get_bounding_client_rect();
        controller.hover(
            &name.get_value(),
            MenuPosition::at_pointer(ev.client_x(), ev.client_y(), rect.left(), rect.top()),
        );
    };
    let on_leave = move |_| controller.leave(&name.get_value());

    let menu = Signal::derive(move || {
        controller
            .visible_menu()
            .filter(|(visible, _)| *visible == name.get_value())
            .map(|(_, position)| position)
    });

    let link_class = match entry.kind {
        EntryKind::Directory => "entry-link entry-dir",
        EntryKind::File => "entry-link entry-file",
    };
    let label = entry.name.clone();
    let href = entry_href(&dir.get_value(), &entry);

    view! {
        <li class="listing-entry">
            {match href {
                Some(href) => view! {
                    <a
                        class=link_class
                        href=href
                        data-entry=name.get_value()
                        on:mouseenter=on_enter
                        on:mouseleave=on_leave
                    >
                        {label}
                    </a>
                }
                    .into_view(),
                None => view! {
                    <span
                        class=link_class
                        data-entry=name.get_value()
                        on:mouseenter=on_enter
                        on:mouseleave=on_leave
                    >
                        {label}
                    </span>
                }
                    .into_view(),
            }}

            <Show when=move || menu.get().is_some() fallback=|| ()>
                {move || {
                    menu.get()
                        .map(|position| {
                            view! {
                                <EntryActionMenu
                                    entry_name=name.get_value()
                                    current_dir=dir.get_value()
                                    position=position
                                    controller=controller
                                    services=services.get_value()
                                />
                            }
                        })
                }}
            </Show>
        </li>
    }
}

#[component]
fn EntryActionMenu(
    entry_name: String,
    current_dir: String,
    position: MenuPosition,
    controller: HoverMenuController,
    services: PageServices,
) -> impl IntoView {
    let name = store_value(entry_name);
    let dir = store_value(current_dir);
    let services = store_value(services);
    let menu_style = format!("left:{}px;top:{}px;", position.x, position.y);

    let on_rename = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        controller.notify_action();
        spawn_local(actions::rename_entry(
            services.get_value(),
            dir.get_value(),
            name.get_value(),
        ));
    };

    let on_delete = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        controller.notify_action();
        spawn_local(actions::delete_entry(
            services.get_value(),
            dir.get_value(),
            name.get_value(),
        ));
    };

    view! {
        <div
            class="entry-action-menu"
            role="menu"
            aria-label=format!("Actions for {}", name.get_value())
            style=menu_style
            on:click:undelegated=move |ev| ev.stop_propagation()
        >
            <button
                type="button"
                role="menuitem"
                class="entry-action-item"
                on:click:undelegated=on_rename
            >
                "Rename"
            </button>
            <button
                type="button"
                role="menuitem"
                class="entry-action-item danger"
                on:click:undelegated=on_delete
            >
                "Delete"
            </button>
        </div>
    }
}
