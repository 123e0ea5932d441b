//! Page navigation contract (reload, href assignment, query access).

use std::{cell::RefCell, rc::Rc};

/// Host service wrapping `window.location`.
pub trait NavigationService {
    /// Reloads the current page.
    fn reload(&self);

    /// Navigates to `url` (same-origin path with query string).
    fn navigate(&self, url: &str);

    /// The current query string, including the leading `?` when non-empty.
    fn query_string(&self) -> String;
}

#[derive(Debug, Clone, Copy, Default)]
/// Navigation service for unsupported targets; navigation is dropped and the
/// query string is empty.
pub struct NoopNavigationService;

impl NavigationService for NoopNavigationService {
    fn reload(&self) {}

    fn navigate(&self, _url: &str) {}

    fn query_string(&self) -> String {
        String::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One navigation observed by [`MemoryNavigationService`].
pub enum NavigationRecord {
    /// `reload()` was requested.
    Reload,
    /// `navigate(url)` was requested.
    Navigate(String),
}

#[derive(Debug, Clone, Default)]
/// Recording navigation service for native tests with a scripted query
/// string.
pub struct MemoryNavigationService {
    query: Rc<RefCell<String>>,
    visited: Rc<RefCell<Vec<NavigationRecord>>>,
}

impl MemoryNavigationService {
    /// Sets the query string subsequent calls report.
    pub fn set_query(&self, query: &str) {
        *self.query.borrow_mut() = query.to_string();
    }

    /// Navigations observed so far, in order.
    pub fn visited(&self) -> Vec<NavigationRecord> {
        self.visited.borrow().clone()
    }
}

impl NavigationService for MemoryNavigationService {
    fn reload(&self) {
        self.visited.borrow_mut().push(NavigationRecord::Reload);
    }

    fn navigate(&self, url: &str) {
        self.visited
            .borrow_mut()
            .push(NavigationRecord::Navigate(url.to_string()));
    }

    fn query_string(&self) -> String {
        self.query.borrow().clone()
    }
}
