//! Per-component failure log.
//!
//! Components never take each other down: a failure is logged, recorded
//! here under the component's name and the rest of the page keeps running.

use std::collections::VecDeque;
use std::fmt;

/// Page component a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Lightbox,
    Portfolio,
    ContactForm,
    /// A spawned task that panicked instead of completing.
    Runtime,
}

impl Component {
    pub fn name(self) -> &'static str {
        match self {
            Component::Lightbox => "lightbox",
            Component::Portfolio => "portfolio",
            Component::ContactForm => "contact-form",
            Component::Runtime => "runtime",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEntry {
    pub component: Component,
    pub message: String,
}

/// Bounded ring of recent component failures. Oldest entries drop first.
#[derive(Debug)]
pub struct ErrorRegistry {
    entries: VecDeque<ErrorEntry>,
    capacity: usize,
}

impl ErrorRegistry {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(64)),
            capacity: capacity.max(1),
        }
    }

    /// Log `message` at warn level and keep it.
    pub fn record(&mut self, component: Component, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(component = component.name(), "{}", message);
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(ErrorEntry { component, message });
    }

    pub fn entries(&self) -> impl Iterator<Item = &ErrorEntry> {
        self.entries.iter()
    }

    pub fn for_component(&self, component: Component) -> impl Iterator<Item = &ErrorEntry> {
        self.entries.iter().filter(move |e| e.component == component)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ErrorRegistry {
    fn default() -> Self {
        Self::new(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_keeps_entries_in_order() {
        let mut registry = ErrorRegistry::new(10);
        registry.record(Component::Lightbox, "image failed");
        registry.record(Component::ContactForm, "submit failed");

        let messages: Vec<&str> = registry.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["image failed", "submit failed"]);
    }

    #[test]
    fn capacity_drops_oldest() {
        let mut registry = ErrorRegistry::new(2);
        registry.record(Component::Runtime, "one");
        registry.record(Component::Runtime, "two");
        registry.record(Component::Runtime, "three");

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.entries().next().map(|e| e.message.as_str()), Some("two"));
    }

    #[test]
    fn for_component_filters() {
        let mut registry = ErrorRegistry::default();
        registry.record(Component::Portfolio, "bad catalog");
        registry.record(Component::Lightbox, "bad image");

        assert_eq!(registry.for_component(Component::Portfolio).count(), 1);
        assert_eq!(registry.for_component(Component::ContactForm).count(), 0);
    }
}
