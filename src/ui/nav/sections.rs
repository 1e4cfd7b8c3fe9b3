/// Page sections in document order.
pub const DEFAULT_SECTIONS: [&str; 7] = [
    "home",
    "about",
    "portfolio",
    "services",
    "blog",
    "faq",
    "contact",
];

/// Keys that move between whole sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKey {
    /// ArrowDown or PageDown.
    Down,
    /// ArrowUp or PageUp.
    Up,
    Home,
    End,
}

/// Tracks which section the visitor is reading and highlights its nav item.
///
/// Keyboard section jumps clamp at both ends, they never wrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTracker {
    sections: Vec<String>,
    active: Option<usize>,
    cursor: usize,
}

impl SectionTracker {
    pub fn new(sections: Vec<String>) -> Self {
        Self {
            sections,
            active: None,
            cursor: 0,
        }
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn active(&self) -> Option<&str> {
        self.active.map(|i| self.sections[i].as_str())
    }

    pub fn is_active(&self, section: &str) -> bool {
        self.active() == Some(section)
    }

    /// A section crossed the highlight threshold. Unknown ids are ignored.
    ///
    /// Returns true when the highlighted nav item changed.
    pub fn on_section_visible(&mut self, section: &str) -> bool {
        let Some(index) = self.sections.iter().position(|s| s == section) else {
            return false;
        };
        self.cursor = index;
        let changed = self.active != Some(index);
        self.active = Some(index);
        changed
    }

    /// Section to scroll to for `key`, unless a form control has focus.
    pub fn on_key(&mut self, key: SectionKey, input_focused: bool) -> Option<&str> {
        if input_focused || self.sections.is_empty() {
            return None;
        }
        let last = self.sections.len() - 1;
        self.cursor = match key {
            SectionKey::Down => (self.cursor + 1).min(last),
            SectionKey::Up => self.cursor.saturating_sub(1),
            SectionKey::Home => 0,
            SectionKey::End => last,
        };
        Some(self.sections[self.cursor].as_str())
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SECTIONS.iter().map(|s| s.to_string()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_section_becomes_active() {
        let mut tracker = SectionTracker::default();
        assert!(tracker.on_section_visible("portfolio"));
        assert!(tracker.is_active("portfolio"));
        assert!(!tracker.is_active("home"));
        assert!(!tracker.on_section_visible("portfolio"));
    }

    #[test]
    fn unknown_section_is_ignored() {
        let mut tracker = SectionTracker::default();
        assert!(!tracker.on_section_visible("pricing"));
        assert_eq!(tracker.active(), None);
    }

    #[test]
    fn keys_clamp_at_both_ends() {
        let mut tracker = SectionTracker::default();
        assert_eq!(tracker.on_key(SectionKey::Up, false), Some("home"));
        assert_eq!(tracker.on_key(SectionKey::End, false), Some("contact"));
        assert_eq!(tracker.on_key(SectionKey::Down, false), Some("contact"));
        assert_eq!(tracker.on_key(SectionKey::Home, false), Some("home"));
        assert_eq!(tracker.on_key(SectionKey::Down, false), Some("about"));
    }

    #[test]
    fn keys_continue_from_visible_section() {
        let mut tracker = SectionTracker::default();
        tracker.on_section_visible("blog");
        assert_eq!(tracker.on_key(SectionKey::Down, false), Some("faq"));
    }

    #[test]
    fn keys_ignored_while_typing() {
        let mut tracker = SectionTracker::default();
        assert_eq!(tracker.on_key(SectionKey::Down, true), None);
    }
}
