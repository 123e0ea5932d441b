//! `window.location`-backed navigation adapter.

use fileman_host::NavigationService;

#[derive(Debug, Clone, Copy, Default)]
/// Browser navigation adapter.
pub struct WebNavigationService;

impl NavigationService for WebNavigationService {
    fn reload(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        }
    }

    fn navigate(&self, url: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(url);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = url;
    }

    fn query_string(&self) -> String {
        #[cfg(target_arch = "wasm32")]
        {
            return web_sys::window()
                .and_then(|window| window.location().search().ok())
                .unwrap_or_default();
        }
        #[cfg(not(target_arch = "wasm32"))]
        String::new()
    }
}
