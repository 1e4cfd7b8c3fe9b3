//! Smooth scrolling to sections and back to the top.

use std::time::Duration;

/// Quadratic ease-in-out: `t` elapsed of `d`, from `b` by `c`.
pub fn ease_in_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    if d <= 0.0 {
        return b + c;
    }
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    t -= 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

/// A running scroll animation. Sampled once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothScroll {
    pub start: f64,
    pub target: f64,
    pub duration: Duration,
}

impl SmoothScroll {
    pub fn new(start: f64, target: f64, duration: Duration) -> Self {
        Self {
            start,
            target,
            duration,
        }
    }

    pub fn position_at(&self, elapsed: Duration) -> f64 {
        if self.is_finished(elapsed) {
            return self.target;
        }
        ease_in_out_quad(
            elapsed.as_secs_f64(),
            self.start,
            self.target - self.start,
            self.duration.as_secs_f64(),
        )
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Scroll offset that puts a section just under the fixed header.
pub fn section_target(section_top: f64, header_height: f64) -> f64 {
    (section_top - header_height).max(0.0)
}

/// Section id of an in-page link. A bare `#` links nowhere.
pub fn hash_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some("") | None => None,
        Some(id) => Some(id),
    }
}

/// How far through the page the visitor is, `0.0..=1.0`.
pub fn scroll_progress(y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (y / scrollable).clamp(0.0, 1.0)
}

pub fn scroll_to_top_visible(y: f64, threshold: f64) -> bool {
    y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert!(close(ease_in_out_quad(0.0, 100.0, 400.0, 800.0), 100.0));
        assert!(close(ease_in_out_quad(400.0, 100.0, 400.0, 800.0), 300.0));
        assert!(close(ease_in_out_quad(800.0, 100.0, 400.0, 800.0), 500.0));
    }

    #[test]
    fn animation_lands_on_target() {
        let scroll = SmoothScroll::new(1200.0, 0.0, Duration::from_millis(600));
        assert!(close(scroll.position_at(Duration::ZERO), 1200.0));
        let mid = scroll.position_at(Duration::from_millis(300));
        assert!(close(mid, 600.0));
        assert_eq!(scroll.position_at(Duration::from_millis(700)), 0.0);
        assert!(scroll.is_finished(Duration::from_millis(600)));
    }

    #[test]
    fn section_target_subtracts_header() {
        assert_eq!(section_target(1000.0, 70.0), 930.0);
        assert_eq!(section_target(30.0, 70.0), 0.0);
    }

    #[test]
    fn hash_links() {
        assert_eq!(hash_target("#about"), Some("about"));
        assert_eq!(hash_target("#"), None);
        assert_eq!(hash_target("/blog"), None);
    }

    #[test]
    fn progress_clamps() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(5000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(10.0, 500.0, 1000.0), 0.0);
    }

    #[test]
    fn scroll_to_top_threshold() {
        assert!(!scroll_to_top_visible(500.0, 500.0));
        assert!(scroll_to_top_visible(501.0, 500.0));
    }
}
