//! Reducer actions, effect intents, and transition logic for the entry hover menu.
//!
//! The controller is a three-phase state machine: no menu and no timer
//! (`Idle`), a reveal timer running for one entry (`Pending`), or exactly one
//! menu shown (`Visible`). Timer scheduling is expressed as [`HoverEffect`]
//! intents so the transition logic stays host-free; the page layer owns the
//! native timeout handle and executes the intents in order.

/// Delay between hovering an entry and its action menu becoming visible.
pub const REVEAL_DELAY_MS: u32 = 2000;

/// Horizontal offset of the menu from the hovered element's left edge.
pub const MENU_POINTER_OFFSET_X: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Menu offsets relative to the hovered entry element, in CSS pixels.
pub struct MenuPosition {
    /// Horizontal offset from the entry element's left edge.
    pub x: i32,
    /// Vertical offset from the entry element's top edge.
    pub y: i32,
}

impl MenuPosition {
    /// Computes the menu position from the pointer coordinates captured at
    /// hover time and the hovered element's bounding box.
    pub fn at_pointer(pointer_x: i32, pointer_y: i32, target_left: f64, target_top: f64) -> Self {
        Self {
            x: pointer_x - target_left.round() as i32 + MENU_POINTER_OFFSET_X,
            y: pointer_y - target_top.round() as i32,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Controller phase; the enum shape makes "at most one menu visible" and
/// "at most one pending timer" structural rather than checked.
pub enum HoverPhase {
    /// No menu visible, no reveal timer pending.
    #[default]
    Idle,
    /// A reveal timer is running for `entry`; nothing is visible yet.
    Pending {
        /// Entry the timer was started for.
        entry: String,
        /// Menu position captured from the pointer at hover time.
        position: MenuPosition,
    },
    /// The action menu for `entry` is shown.
    Visible {
        /// Entry whose menu is shown.
        entry: String,
        /// Menu position the menu was revealed at.
        position: MenuPosition,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Hover-menu controller state, scoped to one page session.
pub struct HoverState {
    /// Current controller phase.
    pub phase: HoverPhase,
}

impl HoverState {
    /// Returns the entry name and position of the currently visible menu.
    pub fn visible_menu(&self) -> Option<(&str, MenuPosition)> {
        match &self.phase {
            HoverPhase::Visible { entry, position } => Some((entry.as_str(), *position)),
            HoverPhase::Idle | HoverPhase::Pending { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Discrete UI events accepted by [`reduce_hover`].
pub enum HoverAction {
    /// Pointer entered an entry element.
    PointerEnter {
        /// Hovered entry name.
        entry: String,
        /// Menu position computed from the pointer event.
        position: MenuPosition,
    },
    /// Pointer left an entry element.
    PointerLeave {
        /// Entry that was left.
        entry: String,
    },
    /// The pending reveal timer fired.
    RevealTimerFired,
    /// A click landed outside every entry link and action menu.
    OutsideClick,
    /// A menu action handler ran; the menu must hide before its request.
    ActionInvoked,
    /// Explicit dismissal request (idempotent).
    Dismiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_hover`], executed in order by the
/// page layer.
pub enum HoverEffect {
    /// Clear the pending native timeout, if any.
    CancelRevealTimer,
    /// Schedule the reveal timeout.
    StartRevealTimer {
        /// Delay before `RevealTimerFired` should be delivered.
        delay_ms: u32,
    },
}

/// Applies one UI event to the controller state.
///
/// Every transition that starts a timer cancels the previous one first, so a
/// timer can never outlive the hover that scheduled it. A stray
/// `RevealTimerFired` outside `Pending` is ignored.
pub fn reduce_hover(state: &mut HoverState, action: HoverAction) -> Vec<HoverEffect> {
    match action {
        HoverAction::PointerEnter { entry, position } => {
            state.phase = HoverPhase::Pending { entry, position };
            vec![
                HoverEffect::CancelRevealTimer,
                HoverEffect::StartRevealTimer {
                    delay_ms: REVEAL_DELAY_MS,
                },
            ]
        }
        HoverAction::PointerLeave { entry } => match &state.phase {
            HoverPhase::Pending { entry: pending, .. } if *pending == entry => {
                state.phase = HoverPhase::Idle;
                vec![HoverEffect::CancelRevealTimer]
            }
            _ => Vec::new(),
        },
        HoverAction::RevealTimerFired => {
            if let HoverPhase::Pending { entry, position } = &state.phase {
                state.phase = HoverPhase::Visible {
                    entry: entry.clone(),
                    position: *position,
                };
            }
            Vec::new()
        }
        HoverAction::OutsideClick | HoverAction::ActionInvoked | HoverAction::Dismiss => {
            if matches!(state.phase, HoverPhase::Visible { .. }) {
                state.phase = HoverPhase::Idle;
            }
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn enter(state: &mut HoverState, entry: &str) -> Vec<HoverEffect> {
        reduce_hover(
            state,
            HoverAction::PointerEnter {
                entry: entry.to_string(),
                position: MenuPosition { x: 14, y: 6 },
            },
        )
    }

    #[test]
    fn hover_schedules_reveal_after_cancel() {
        let mut state = HoverState::default();
        let effects = enter(&mut state, "report.pdf");

        assert_eq!(
            effects,
            vec![
                HoverEffect::CancelRevealTimer,
                HoverEffect::StartRevealTimer { delay_ms: 2000 },
            ]
        );
        assert_eq!(state.visible_menu(), None);
    }

    #[test]
    fn full_delay_hover_shows_menu_at_captured_position() {
        let mut state = HoverState::default();
        let position = MenuPosition::at_pointer(120, 48, 40.0, 30.0);
        reduce_hover(
            &mut state,
            HoverAction::PointerEnter {
                entry: "report.pdf".to_string(),
                position,
            },
        );
        reduce_hover(&mut state, HoverAction::RevealTimerFired);

        assert_eq!(
            state.visible_menu(),
            Some(("report.pdf", MenuPosition { x: 90, y: 18 }))
        );
    }

    #[test]
    fn unhover_cancels_pending_reveal() {
        let mut state = HoverState::default();
        enter(&mut state, "notes.md");
        let effects = reduce_hover(
            &mut state,
            HoverAction::PointerLeave {
                entry: "notes.md".to_string(),
            },
        );

        assert_eq!(effects, vec![HoverEffect::CancelRevealTimer]);
        assert_eq!(state.phase, HoverPhase::Idle);

        // The executor cleared the handle; a stray fire must not reveal.
        reduce_hover(&mut state, HoverAction::RevealTimerFired);
        assert_eq!(state.visible_menu(), None);
    }

    #[test]
    fn leave_for_unrelated_entry_keeps_pending_cycle() {
        let mut state = HoverState::default();
        enter(&mut state, "a.txt");
        let effects = reduce_hover(
            &mut state,
            HoverAction::PointerLeave {
                entry: "b.txt".to_string(),
            },
        );

        assert_eq!(effects, Vec::new());
        assert!(matches!(state.phase, HoverPhase::Pending { .. }));
    }

    #[test]
    fn new_hover_replaces_pending_entry() {
        let mut state = HoverState::default();
        enter(&mut state, "a.txt");
        let effects = enter(&mut state, "b.txt");

        assert_eq!(
            effects,
            vec![
                HoverEffect::CancelRevealTimer,
                HoverEffect::StartRevealTimer { delay_ms: 2000 },
            ]
        );
        reduce_hover(&mut state, HoverAction::RevealTimerFired);
        assert_eq!(
            state.visible_menu().map(|(entry, _)| entry),
            Some("b.txt")
        );
    }

    #[test]
    fn hover_while_visible_hides_menu_and_restarts_cycle() {
        let mut state = HoverState::default();
        enter(&mut state, "a.txt");
        reduce_hover(&mut state, HoverAction::RevealTimerFired);
        assert!(state.visible_menu().is_some());

        enter(&mut state, "b.txt");
        // Hidden immediately; the new entry's menu is not visible yet.
        assert_eq!(state.visible_menu(), None);
        assert!(matches!(state.phase, HoverPhase::Pending { .. }));
    }

    #[test]
    fn at_most_one_menu_visible_across_event_storm() {
        let mut state = HoverState::default();
        for entry in ["a", "b", "c", "a", "c"] {
            enter(&mut state, entry);
            assert!(state.visible_menu().is_none() || matches!(state.phase, HoverPhase::Visible { .. }));
            reduce_hover(&mut state, HoverAction::RevealTimerFired);
            assert_eq!(state.visible_menu().map(|(entry, _)| entry), Some(entry));
        }
    }

    #[test]
    fn outside_click_hides_visible_menu_only() {
        let mut state = HoverState::default();
        enter(&mut state, "a.txt");
        reduce_hover(&mut state, HoverAction::RevealTimerFired);
        reduce_hover(&mut state, HoverAction::OutsideClick);
        assert_eq!(state.phase, HoverPhase::Idle);

        // While a reveal is pending an outside click leaves the cycle alone.
        enter(&mut state, "b.txt");
        reduce_hover(&mut state, HoverAction::OutsideClick);
        assert!(matches!(state.phase, HoverPhase::Pending { .. }));
    }

    #[test]
    fn action_invocation_hides_menu_before_request_dispatch() {
        let mut state = HoverState::default();
        enter(&mut state, "foo.txt");
        reduce_hover(&mut state, HoverAction::RevealTimerFired);

        reduce_hover(&mut state, HoverAction::ActionInvoked);
        assert_eq!(state.visible_menu(), None);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut state = HoverState::default();
        assert_eq!(reduce_hover(&mut state, HoverAction::Dismiss), Vec::new());
        assert_eq!(state.phase, HoverPhase::Idle);

        enter(&mut state, "a.txt");
        reduce_hover(&mut state, HoverAction::RevealTimerFired);
        reduce_hover(&mut state, HoverAction::Dismiss);
        reduce_hover(&mut state, HoverAction::Dismiss);
        assert_eq!(state.phase, HoverPhase::Idle);
    }

    #[test]
    fn stale_timer_fire_in_idle_is_ignored() {
        let mut state = HoverState::default();
        assert_eq!(
            reduce_hover(&mut state, HoverAction::RevealTimerFired),
            Vec::new()
        );
        assert_eq!(state.phase, HoverPhase::Idle);
    }
}
