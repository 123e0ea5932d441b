//! Blocking user-dialog contract (alert / confirm / prompt).

use std::{cell::RefCell, rc::Rc};

/// Host service for the blocking browser dialogs the pages rely on.
///
/// `prompt` returning `None` and `confirm` returning `false` both mean the
/// user canceled; callers treat cancellation as a silent no-op.
pub trait DialogService {
    /// Shows a blocking message.
    fn alert(&self, message: &str);

    /// Asks a yes/no question; `false` on cancel.
    fn confirm(&self, message: &str) -> bool;

    /// Asks for a line of input; `None` on cancel.
    fn prompt(&self, message: &str) -> Option<String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Dialog service for unsupported targets: alerts vanish, every question is
/// answered with a cancel.
pub struct NoopDialogService;

impl DialogService for NoopDialogService {
    fn alert(&self, _message: &str) {}

    fn confirm(&self, _message: &str) -> bool {
        false
    }

    fn prompt(&self, _message: &str) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Default)]
/// Scripted dialog service for native tests: answers are queued up front,
/// alerts are recorded.
pub struct MemoryDialogService {
    confirm_answer: Rc<RefCell<bool>>,
    prompt_answer: Rc<RefCell<Option<String>>>,
    alerts: Rc<RefCell<Vec<String>>>,
}

impl MemoryDialogService {
    /// Sets the answer every `confirm` call returns.
    pub fn answer_confirm(&self, answer: bool) {
        *self.confirm_answer.borrow_mut() = answer;
    }

    /// Sets the answer every `prompt` call returns (`None` = cancel).
    pub fn answer_prompt(&self, answer: Option<&str>) {
        *self.prompt_answer.borrow_mut() = answer.map(str::to_string);
    }

    /// Alert messages shown so far, in order.
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl DialogService for MemoryDialogService {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, _message: &str) -> bool {
        *self.confirm_answer.borrow()
    }

    fn prompt(&self, _message: &str) -> Option<String> {
        self.prompt_answer.borrow().clone()
    }
}
