//! Fetch-backed [`FileManagerApi`] adapter.

use fileman_core::requests::{save_markdown_url, FormRequest};
use fileman_host::{ApiFuture, FileManagerApi, UploadPayload};

#[derive(Debug, Clone, Copy, Default)]
/// Browser file-manager HTTP client backed by `window.fetch`.
pub struct WebFileManagerApi;

impl FileManagerApi for WebFileManagerApi {
    fn send_form<'a>(&'a self, request: &'a FormRequest) -> ApiFuture<'a, Result<(), String>> {
        Box::pin(async move { imp::post_form(request.endpoint(), request.encoded_body()).await })
    }

    fn upload_file<'a>(
        &'a self,
        path: &'a str,
        payload: &'a UploadPayload,
    ) -> ApiFuture<'a, Result<(), String>> {
        Box::pin(async move { imp::post_multipart("/uploadFile", path, payload).await })
    }

    fn save_markdown<'a>(
        &'a self,
        filename: &'a str,
        content: &'a str,
    ) -> ApiFuture<'a, Result<(), String>> {
        Box::pin(async move { imp::post_text(&save_markdown_url(filename), content).await })
    }
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use fileman_host::UploadPayload;
    use js_sys::{Array, Uint8Array};
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, Response};

    fn describe(err: JsValue) -> String {
        format!("{err:?}")
    }

    async fn dispatch(url: &str, content_type: Option<&str>, body: &JsValue) -> Result<(), String> {
        let window = web_sys::window().ok_or_else(|| "no window in this context".to_string())?;

        let init = RequestInit::new();
        init.set_method("POST");
        init.set_body(body);
        let request = Request::new_with_str_and_init(url, &init).map_err(describe)?;
        if let Some(content_type) = content_type {
            request
                .headers()
                .set("Content-Type", content_type)
                .map_err(describe)?;
        }

        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(describe)?;
        let response: Response = response
            .dyn_into()
            .map_err(|_| "fetch resolved to a non-Response value".to_string())?;

        if response.ok() {
            Ok(())
        } else {
            Err(format!(
                "`{url}` responded with status {}",
                response.status()
            ))
        }
    }

    pub(super) async fn post_form(url: &str, body: String) -> Result<(), String> {
        dispatch(
            url,
            Some("application/x-www-form-urlencoded"),
            &JsValue::from_str(&body),
        )
        .await
    }

    pub(super) async fn post_text(url: &str, body: &str) -> Result<(), String> {
        dispatch(url, Some("text/plain"), &JsValue::from_str(body)).await
    }

    // Content-Type is left unset so the browser writes the multipart
    // boundary itself.
    pub(super) async fn post_multipart(
        url: &str,
        path: &str,
        payload: &UploadPayload,
    ) -> Result<(), String> {
        let parts = Array::new();
        parts.push(&Uint8Array::from(payload.bytes.as_slice()));
        let options = BlobPropertyBag::new();
        if !payload.content_type.is_empty() {
            options.set_type(&payload.content_type);
        }
        let blob =
            Blob::new_with_u8_array_sequence_and_options(parts.as_ref(), &options).map_err(describe)?;

        let form = FormData::new().map_err(describe)?;
        form.append_with_blob_and_filename("file", &blob, &payload.file_name)
            .map_err(describe)?;
        form.append_with_str("path", path).map_err(describe)?;

        dispatch(url, None, form.as_ref()).await
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use fileman_host::UploadPayload;

    const UNAVAILABLE: &str = "file-manager HTTP is only available in the browser";

    pub(super) async fn post_form(_url: &str, _body: String) -> Result<(), String> {
        Err(UNAVAILABLE.to_string())
    }

    pub(super) async fn post_text(_url: &str, _body: &str) -> Result<(), String> {
        Err(UNAVAILABLE.to_string())
    }

    pub(super) async fn post_multipart(
        _url: &str,
        _path: &str,
        _payload: &UploadPayload,
    ) -> Result<(), String> {
        Err(UNAVAILABLE.to_string())
    }
}
