//! File collection and upload dispatch for picker, drag-and-drop, and paste.

use fileman_core::requests::pasted_image_name;
use fileman_host::{PageServices, UploadPayload};
use leptos::{logging, spawn_local};
use wasm_bindgen_futures::JsFuture;

/// A browser file queued for upload, with an optional name override (used
/// for pasted images).
pub(crate) type QueuedFile = (web_sys::File, Option<String>);

pub(crate) fn files_from_list(list: Option<web_sys::FileList>) -> Vec<web_sys::File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|index| list.item(index)).collect()
}

/// Image files carried by a paste event, each renamed to
/// `pasted_image_<epoch-ms>.png`.
pub(crate) fn pasted_image_files(data: &web_sys::DataTransfer) -> Vec<QueuedFile> {
    let items = data.items();
    let mut files = Vec::new();
    for index in 0..items.length() {
        let Some(item) = items.get(index) else {
            continue;
        };
        if item.kind() != "file" || !item.type_().starts_with("image/") {
            continue;
        }
        if let Ok(Some(file)) = item.get_as_file() {
            let name = pasted_image_name(js_sys::Date::now() as u64 + u64::from(index));
            files.push((file, Some(name)));
        }
    }
    files
}

/// Uploads the queued files one by one; reloads on success, alerts once on
/// the first failure.
pub(crate) fn upload_files(services: &PageServices, current_dir: &str, files: Vec<QueuedFile>) {
    if files.is_empty() {
        return;
    }
    let services = services.clone();
    let current_dir = current_dir.to_string();
    spawn_local(async move {
        for (file, name_override) in files {
            let payload = match payload_from_file(&file, name_override).await {
                Ok(payload) => payload,
                Err(err) => {
                    logging::error!("upload read failed: {err}");
                    services.dialogs.alert("Failed to upload file");
                    return;
                }
            };
            if let Err(err) = services.api.upload_file(&current_dir, &payload).await {
                logging::error!("upload of `{}` failed: {err}", payload.file_name);
                services.dialogs.alert("Failed to upload file");
                return;
            }
        }
        services.navigation.reload();
    });
}

async fn payload_from_file(
    file: &web_sys::File,
    name_override: Option<String>,
) -> Result<UploadPayload, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| format!("reading `{}` failed: {err:?}", file.name()))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
    Ok(UploadPayload {
        file_name: name_override.unwrap_or_else(|| file.name()),
        content_type: file.type_(),
        bytes,
    })
}
