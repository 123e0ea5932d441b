//! Browser wiring for the hover-menu reducer.
//!
//! The controller owns the two pieces of per-page mutable state the menus
//! need: the reducer state signal and the single pending reveal timeout. UI
//! events are translated into reducer actions; the effect intents coming
//! back drive the native timer handle.

use std::time::Duration;

use fileman_core::hover::{reduce_hover, HoverAction, HoverEffect, HoverState, MenuPosition};
use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use wasm_bindgen::JsCast;

#[derive(Clone, Copy)]
/// Hover-menu controller for one listing page session.
pub struct HoverMenuController {
    state: RwSignal<HoverState>,
    reveal_timer: StoredValue<Option<TimeoutHandle>>,
}

impl HoverMenuController {
    /// Creates an idle controller. Call inside a reactive owner so the
    /// signal and timer slot are cleaned up with the page.
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(HoverState::default()),
            reveal_timer: store_value(None),
        }
    }

    /// Attaches the document-level dismissal listeners (outside click and
    /// Escape); both are detached again on owner cleanup.
    ///
    /// A click counts as outside unless its target sits inside an action
    /// menu or the visible menu's own entry link (matched through the
    /// link's `data-entry` attribute); clicks inside menus additionally
    /// stop their own propagation before reaching the window.
    pub fn install_dismiss_listeners(self) {
        let click_listener = window_event_listener(ev::click, move |ev| {
            let mut in_menu = false;
            let mut clicked_entry = None;
            if let Some(target) = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            {
                in_menu = matches!(target.closest(".entry-action-menu"), Ok(Some(_)));
                if let Ok(Some(link)) = target.closest(".entry-link") {
                    clicked_entry = link.get_attribute("data-entry");
                }
            }
            let visible = self
                .state
                .with_untracked(|state| state.visible_menu().map(|(entry, _)| entry.to_string()));
            if dismisses(in_menu, clicked_entry.as_deref(), visible.as_deref()) {
                self.apply(HoverAction::OutsideClick);
            }
        });
        on_cleanup(move || click_listener.remove());

        let escape_listener = window_event_listener(ev::keydown, move |ev| {
            if ev.key() == "Escape" {
                self.dismiss();
            }
        });
        on_cleanup(move || escape_listener.remove());
    }

    /// The entry name and position of the currently visible menu, if any.
    /// Reactive: reads the controller state signal.
    pub fn visible_menu(self) -> Option<(String, MenuPosition)> {
        self.state.with(|state| {
            state
                .visible_menu()
                .map(|(entry, position)| (entry.to_string(), position))
        })
    }

    /// Pointer entered `entry`; begins (or restarts) the reveal cycle.
    pub fn hover(self, entry: &str, position: MenuPosition) {
        self.apply(HoverAction::PointerEnter {
            entry: entry.to_string(),
            position,
        });
    }

    /// Pointer left `entry`; cancels its pending reveal.
    pub fn leave(self, entry: &str) {
        self.apply(HoverAction::PointerLeave {
            entry: entry.to_string(),
        });
    }

    /// Hides the visible menu; no-op when nothing is visible.
    pub fn dismiss(self) {
        self.apply(HoverAction::Dismiss);
    }

    /// Called by every menu action handler before it does anything else.
    pub fn notify_action(self) {
        self.apply(HoverAction::ActionInvoked);
    }

    fn apply(self, action: HoverAction) {
        let mut effects = Vec::new();
        self.state
            .update(|state| effects = reduce_hover(state, action));

        for effect in effects {
            match effect {
                HoverEffect::CancelRevealTimer => self.reveal_timer.update_value(|slot| {
                    if let Some(handle) = slot.take() {
                        handle.clear();
                    }
                }),
                HoverEffect::StartRevealTimer { delay_ms } => {
                    let scheduled = set_timeout_with_handle(
                        move || self.apply(HoverAction::RevealTimerFired),
                        Duration::from_millis(u64::from(delay_ms)),
                    );
                    match scheduled {
                        Ok(handle) => self.reveal_timer.set_value(Some(handle)),
                        Err(err) => logging::warn!("reveal timer scheduling failed: {err:?}"),
                    }
                }
            }
        }
    }
}

impl Default for HoverMenuController {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a document-level click counts as outside: anywhere except an
/// action menu or the visible menu's own entry link.
fn dismisses(in_menu: bool, clicked_entry: Option<&str>, visible_entry: Option<&str>) -> bool {
    if in_menu {
        return false;
    }
    match (clicked_entry, visible_entry) {
        (Some(clicked), Some(visible)) => clicked != visible,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::dismisses;

    #[test]
    fn menu_clicks_never_dismiss() {
        assert!(!dismisses(true, None, Some("a.txt")));
    }

    #[test]
    fn visible_entrys_own_link_click_does_not_dismiss() {
        assert!(!dismisses(false, Some("a.txt"), Some("a.txt")));
    }

    #[test]
    fn click_on_another_entry_link_dismisses() {
        assert!(dismisses(false, Some("b.txt"), Some("a.txt")));
    }

    #[test]
    fn background_click_dismisses() {
        assert!(dismisses(false, None, Some("a.txt")));
        assert!(dismisses(false, None, None));
    }
}
