use crate::config::ScrollConfig;

/// Offsets that drive the header's look.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderPolicy {
    pub scrolled_px: f64,
    pub hide_px: f64,
    pub narrow_viewport_px: f64,
}

impl From<&ScrollConfig> for HeaderPolicy {
    fn from(config: &ScrollConfig) -> Self {
        Self {
            scrolled_px: config.header_scrolled_px,
            hide_px: config.header_hide_px,
            narrow_viewport_px: config.narrow_viewport_px,
        }
    }
}

impl Default for HeaderPolicy {
    fn default() -> Self {
        Self::from(&ScrollConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HeaderState {
    /// Solid background and shadow once the page has moved.
    pub scrolled: bool,
    /// Slid out of view. Only ever set on narrow viewports.
    pub hidden: bool,
    pub last_y: f64,
}

impl HeaderState {
    /// Apply one coalesced scroll offset. Returns true if the look changed.
    pub fn update(&mut self, policy: &HeaderPolicy, y: f64, viewport_width: f64) -> bool {
        let before = (self.scrolled, self.hidden);

        self.scrolled = y > policy.scrolled_px;
        self.hidden = if viewport_width <= policy.narrow_viewport_px {
            y > self.last_y && y > policy.hide_px
        } else {
            false
        };
        self.last_y = y;

        before != (self.scrolled, self.hidden)
    }
}
