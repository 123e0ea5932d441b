//! JS-interop binding to the page-hosted markdown editing widget.
//!
//! The page template loads the third-party widget and exposes it as the
//! global `markdownEditor` object with `mount(hostId, markdown)` and
//! `value()` methods. The widget's internals are out of scope; this adapter
//! only crosses that boundary.

use fileman_host::EditorWidgetService;

#[derive(Debug, Clone, Copy, Default)]
/// Adapter for the global `markdownEditor` widget object.
pub struct WebEditorWidget;

impl EditorWidgetService for WebEditorWidget {
    fn mount(&self, host_dom_id: &str, initial_markdown: &str) -> Result<(), String> {
        imp::invoke(
            "mount",
            &[host_dom_id.to_string(), initial_markdown.to_string()],
        )
        .map(|_| ())
    }

    fn content(&self) -> Result<String, String> {
        let value = imp::invoke("value", &[])?;
        imp::into_string(value)
    }
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use js_sys::{Array, Function, Object, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    const WIDGET_GLOBAL: &str = "markdownEditor";

    fn widget() -> Result<Object, String> {
        let window = web_sys::window().ok_or_else(|| "no window in this context".to_string())?;
        let value = Reflect::get(&window, &JsValue::from_str(WIDGET_GLOBAL))
            .map_err(|err| format!("widget lookup failed: {err:?}"))?;
        value
            .dyn_into::<Object>()
            .map_err(|_| format!("global `{WIDGET_GLOBAL}` widget is not loaded"))
    }

    pub(super) fn invoke(method: &str, args: &[String]) -> Result<JsValue, String> {
        let widget = widget()?;
        let function = Reflect::get(&widget, &JsValue::from_str(method))
            .map_err(|err| format!("widget `{method}` lookup failed: {err:?}"))?
            .dyn_into::<Function>()
            .map_err(|_| format!("widget `{method}` is not callable"))?;

        let forwarded = Array::new();
        for arg in args {
            forwarded.push(&JsValue::from_str(arg));
        }
        function
            .apply(&widget, &forwarded)
            .map_err(|err| format!("widget `{method}` call failed: {err:?}"))
    }

    pub(super) fn into_string(value: JsValue) -> Result<String, String> {
        value
            .as_string()
            .ok_or_else(|| "widget `value` returned a non-string document".to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    pub(super) fn invoke(_method: &str, _args: &[String]) -> Result<String, String> {
        Err("editor widget is only available in the browser".to_string())
    }

    pub(super) fn into_string(value: String) -> Result<String, String> {
        Ok(value)
    }
}
