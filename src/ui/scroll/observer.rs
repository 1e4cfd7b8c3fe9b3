//! One-shot viewport observer for entrance animations and lazy images.

use std::collections::BTreeMap;

use crate::config::ScrollConfig;

/// Host-assigned identity of an observed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservedKind {
    /// Card, portfolio tile, blog item...: gets the "revealed" animation.
    Reveal,
    /// Image whose real source is only set once it nears the viewport.
    LazyImage { source: String },
}

/// Element box relative to the top of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementRect {
    pub top: f64,
    pub height: f64,
}

impl ElementRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Share of the element inside `[0, root_bottom]`.
    pub fn intersection_ratio(&self, root_bottom: f64) -> f64 {
        let bottom = self.top + self.height;
        if self.height <= 0.0 {
            return if self.top >= 0.0 && self.top <= root_bottom {
                1.0
            } else {
                0.0
            };
        }
        let visible = bottom.min(root_bottom) - self.top.max(0.0);
        (visible / self.height).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealAction {
    Reveal(ElementId),
    LoadImage { element: ElementId, source: String },
}

/// Fires once per element, then forgets it. Animations never replay.
#[derive(Debug, Clone)]
pub struct RevealObserver {
    threshold: f64,
    margin_bottom: f64,
    observed: BTreeMap<ElementId, ObservedKind>,
}

impl RevealObserver {
    pub fn new(threshold: f64, margin_bottom: f64) -> Self {
        Self {
            threshold,
            margin_bottom,
            observed: BTreeMap::new(),
        }
    }

    pub fn from_config(config: &ScrollConfig) -> Self {
        Self::new(config.reveal_threshold, config.reveal_margin_bottom_px)
    }

    pub fn observe(&mut self, element: ElementId, kind: ObservedKind) {
        self.observed.insert(element, kind);
    }

    pub fn is_observed(&self, element: ElementId) -> bool {
        self.observed.contains_key(&element)
    }

    pub fn len(&self) -> usize {
        self.observed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }

    /// Feed one element's current box.
    pub fn on_intersection(
        &mut self,
        element: ElementId,
        rect: ElementRect,
        viewport_height: f64,
    ) -> Option<RevealAction> {
        let kind = self.observed.get(&element)?;
        let triggered = match kind {
            ObservedKind::Reveal => {
                let ratio = rect.intersection_ratio(viewport_height + self.margin_bottom);
                ratio > 0.0 && ratio >= self.threshold
            }
            ObservedKind::LazyImage { .. } => rect.intersection_ratio(viewport_height) > 0.0,
        };
        if !triggered {
            return None;
        }

        match self.observed.remove(&element)? {
            ObservedKind::Reveal => Some(RevealAction::Reveal(element)),
            ObservedKind::LazyImage { source } => Some(RevealAction::LoadImage { element, source }),
        }
    }
}

impl Default for RevealObserver {
    fn default() -> Self {
        Self::from_config(&ScrollConfig::default())
    }
}
