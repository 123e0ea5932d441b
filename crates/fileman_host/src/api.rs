//! File-manager HTTP service contract.

use std::{cell::Cell, cell::RefCell, future::Future, pin::Pin, rc::Rc};

use fileman_core::requests::FormRequest;

/// Object-safe boxed future used by [`FileManagerApi`].
pub type ApiFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// A file to upload: name, MIME type, and raw bytes. Kept as bytes so the
/// contract stays expressible off-wasm; the browser adapter rewraps them in
/// a `Blob` for the multipart body.
pub struct UploadPayload {
    /// File name sent in the multipart `file` part.
    pub file_name: String,
    /// MIME type of the payload (empty when the browser reports none).
    pub content_type: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

/// HTTP client for the file-manager service endpoints.
///
/// Success means a 2xx response; any other outcome is an `Err` with a
/// human-readable description. Callers decide between reload, navigation,
/// and alert.
pub trait FileManagerApi {
    /// POSTs a form-encoded request built by `fileman_core::requests`.
    fn send_form<'a>(&'a self, request: &'a FormRequest) -> ApiFuture<'a, Result<(), String>>;

    /// POSTs one file as `multipart/form-data` (`file` + `path` parts) to
    /// `/uploadFile`.
    fn upload_file<'a>(
        &'a self,
        path: &'a str,
        payload: &'a UploadPayload,
    ) -> ApiFuture<'a, Result<(), String>>;

    /// POSTs raw markdown text to `/saveMarkdown?filename=<filename>`.
    fn save_markdown<'a>(
        &'a self,
        filename: &'a str,
        content: &'a str,
    ) -> ApiFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op API for unsupported targets; every call succeeds without effect.
pub struct NoopFileManagerApi;

impl FileManagerApi for NoopFileManagerApi {
    fn send_form<'a>(&'a self, _request: &'a FormRequest) -> ApiFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn upload_file<'a>(
        &'a self,
        _path: &'a str,
        _payload: &'a UploadPayload,
    ) -> ApiFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn save_markdown<'a>(
        &'a self,
        _filename: &'a str,
        _content: &'a str,
    ) -> ApiFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One call observed by [`MemoryFileManagerApi`].
pub enum RecordedCall {
    /// A form-encoded POST.
    Form {
        /// Endpoint path.
        endpoint: &'static str,
        /// Encoded request body.
        body: String,
    },
    /// A multipart upload.
    Upload {
        /// Target directory.
        path: String,
        /// Uploaded file name.
        file_name: String,
        /// Payload size in bytes.
        byte_len: usize,
    },
    /// A raw-text markdown save.
    Save {
        /// Saved file path.
        filename: String,
        /// Document content.
        content: String,
    },
}

#[derive(Debug, Clone, Default)]
/// In-memory recording API used by native tests. Calls succeed unless
/// [`MemoryFileManagerApi::fail_requests`] was set.
pub struct MemoryFileManagerApi {
    calls: Rc<RefCell<Vec<RecordedCall>>>,
    fail: Rc<Cell<bool>>,
}

impl MemoryFileManagerApi {
    /// Makes every subsequent call fail with a fixed error string.
    pub fn fail_requests(&self) {
        self.fail.set(true);
    }

    /// Snapshot of the calls observed so far, in dispatch order.
    pub fn recorded(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }

    fn outcome(&self, call: RecordedCall) -> Result<(), String> {
        self.calls.borrow_mut().push(call);
        if self.fail.get() {
            Err("memory api configured to fail".to_string())
        } else {
            Ok(())
        }
    }
}

impl FileManagerApi for MemoryFileManagerApi {
    fn send_form<'a>(&'a self, request: &'a FormRequest) -> ApiFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.outcome(RecordedCall::Form {
                endpoint: request.endpoint(),
                body: request.encoded_body(),
            })
        })
    }

    fn upload_file<'a>(
        &'a self,
        path: &'a str,
        payload: &'a UploadPayload,
    ) -> ApiFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.outcome(RecordedCall::Upload {
                path: path.to_string(),
                file_name: payload.file_name.clone(),
                byte_len: payload.bytes.len(),
            })
        })
    }

    fn save_markdown<'a>(
        &'a self,
        filename: &'a str,
        content: &'a str,
    ) -> ApiFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.outcome(RecordedCall::Save {
                filename: filename.to_string(),
                content: content.to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use fileman_core::requests::delete_entry;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_api_records_form_calls_in_order() {
        let api = MemoryFileManagerApi::default();
        let request = delete_entry("docs", "foo.txt");

        block_on(api.send_form(&request)).expect("send form");
        block_on(api.save_markdown("docs/a.md", "# hi")).expect("save");

        assert_eq!(
            api.recorded(),
            vec![
                RecordedCall::Form {
                    endpoint: "/deleteEntry",
                    body: "path=docs&name=foo.txt".to_string(),
                },
                RecordedCall::Save {
                    filename: "docs/a.md".to_string(),
                    content: "# hi".to_string(),
                },
            ]
        );
    }

    #[test]
    fn memory_api_failure_mode_still_records() {
        let api = MemoryFileManagerApi::default();
        api.fail_requests();

        let payload = UploadPayload {
            file_name: "pasted_image_1.png".to_string(),
            content_type: "image/png".to_string(),
            bytes: vec![0u8; 16],
        };
        let result = block_on(api.upload_file("docs", &payload));

        assert!(result.is_err());
        assert_eq!(
            api.recorded(),
            vec![RecordedCall::Upload {
                path: "docs".to_string(),
                file_name: "pasted_image_1.png".to_string(),
                byte_len: 16,
            }]
        );
    }
}
