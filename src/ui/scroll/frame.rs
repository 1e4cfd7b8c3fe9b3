/// Collapses scroll events into one update per rendered frame.
///
/// `on_scroll` only records the offset; the first one after a frame asks
/// the host for the next animation frame. `on_frame` hands out the latest
/// offset once.
#[derive(Debug, Clone, Default)]
pub struct ScrollCoalescer {
    latest: Option<f64>,
    frame_requested: bool,
}

impl ScrollCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the caller must request an animation frame.
    pub fn on_scroll(&mut self, y: f64) -> bool {
        self.latest = Some(y);
        if self.frame_requested {
            return false;
        }
        self.frame_requested = true;
        true
    }

    pub fn on_frame(&mut self) -> Option<f64> {
        self.frame_requested = false;
        self.latest.take()
    }

    pub fn is_frame_pending(&self) -> bool {
        self.frame_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn many_scrolls_one_frame() {
        let mut coalescer = ScrollCoalescer::new();
        assert!(coalescer.on_scroll(10.0));
        assert!(!coalescer.on_scroll(20.0));
        assert!(!coalescer.on_scroll(35.0));

        assert_eq!(coalescer.on_frame(), Some(35.0));
        assert_eq!(coalescer.on_frame(), None);
    }

    #[test]
    fn next_scroll_after_frame_requests_again() {
        let mut coalescer = ScrollCoalescer::new();
        coalescer.on_scroll(10.0);
        coalescer.on_frame();
        assert!(!coalescer.is_frame_pending());
        assert!(coalescer.on_scroll(12.0));
    }
}
