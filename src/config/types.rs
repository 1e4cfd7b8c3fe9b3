use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub lightbox: LightboxConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

/// Testimonial carousel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Auto-advance interval in milliseconds (default: 5000).
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

/// Portfolio gallery settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// JSON file with portfolio items. Builtin catalog when unset.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
    /// Delay between entrance animations of newly visible items (default: 100).
    #[serde(default = "default_stagger_step_ms")]
    pub stagger_step_ms: u64,
}

/// Lightbox settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightboxConfig {
    /// Simulated image resolution latency in milliseconds (default: 150).
    #[serde(default = "default_resolve_delay_ms")]
    pub resolve_delay_ms: u64,
}

/// Contact form settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Simulated submission latency in milliseconds (default: 2000).
    #[serde(default = "default_submit_latency_ms")]
    pub submit_latency_ms: u64,
    /// How long a success/error notice stays visible (default: 5000).
    #[serde(default = "default_notice_dismiss_ms")]
    pub notice_dismiss_ms: u64,
}

/// Scroll, header and reveal settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Offset past which the header gets its "scrolled" look (default: 100).
    #[serde(default = "default_header_scrolled_px")]
    pub header_scrolled_px: f64,
    /// Offset past which scrolling down hides the header on narrow screens (default: 200).
    #[serde(default = "default_header_hide_px")]
    pub header_hide_px: f64,
    /// Viewports at most this wide count as narrow (default: 768).
    #[serde(default = "default_narrow_viewport_px")]
    pub narrow_viewport_px: f64,
    /// Intersection ratio that reveals an element (default: 0.1).
    #[serde(default = "default_reveal_threshold")]
    pub reveal_threshold: f64,
    /// Bottom root margin of the reveal observer, negative shrinks (default: -50).
    #[serde(default = "default_reveal_margin_bottom_px")]
    pub reveal_margin_bottom_px: f64,
    /// Offset past which the scroll-to-top button shows (default: 500).
    #[serde(default = "default_scroll_to_top_px")]
    pub scroll_to_top_px: f64,
    /// Header height subtracted from section targets (default: 70).
    #[serde(default = "default_header_offset_px")]
    pub header_offset_px: f64,
    /// Duration of a smooth scroll to a section (default: 800).
    #[serde(default = "default_section_scroll_ms")]
    pub section_scroll_ms: u64,
    /// Duration of a smooth scroll back to the top (default: 600).
    #[serde(default = "default_top_scroll_ms")]
    pub top_scroll_ms: u64,
    /// Length of one rendered frame for the headless runtime (default: 16).
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
}

fn default_interval_ms() -> u64 {
    5000
}

fn default_stagger_step_ms() -> u64 {
    100
}

fn default_resolve_delay_ms() -> u64 {
    150
}

fn default_submit_latency_ms() -> u64 {
    2000
}

fn default_notice_dismiss_ms() -> u64 {
    5000
}

fn default_header_scrolled_px() -> f64 {
    100.0
}

fn default_header_hide_px() -> f64 {
    200.0
}

fn default_narrow_viewport_px() -> f64 {
    768.0
}

fn default_reveal_threshold() -> f64 {
    0.1
}

fn default_reveal_margin_bottom_px() -> f64 {
    -50.0
}

fn default_scroll_to_top_px() -> f64 {
    500.0
}

fn default_header_offset_px() -> f64 {
    70.0
}

fn default_section_scroll_ms() -> u64 {
    800
}

fn default_top_scroll_ms() -> u64 {
    600
}

fn default_frame_ms() -> u64 {
    16
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            stagger_step_ms: default_stagger_step_ms(),
        }
    }
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            resolve_delay_ms: default_resolve_delay_ms(),
        }
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_latency_ms: default_submit_latency_ms(),
            notice_dismiss_ms: default_notice_dismiss_ms(),
        }
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_scrolled_px: default_header_scrolled_px(),
            header_hide_px: default_header_hide_px(),
            narrow_viewport_px: default_narrow_viewport_px(),
            reveal_threshold: default_reveal_threshold(),
            reveal_margin_bottom_px: default_reveal_margin_bottom_px(),
            scroll_to_top_px: default_scroll_to_top_px(),
            header_offset_px: default_header_offset_px(),
            section_scroll_ms: default_section_scroll_ms(),
            top_scroll_ms: default_top_scroll_ms(),
            frame_ms: default_frame_ms(),
        }
    }
}

impl CarouselConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl GalleryConfig {
    pub fn stagger_step(&self) -> Duration {
        Duration::from_millis(self.stagger_step_ms)
    }
}

impl LightboxConfig {
    pub fn resolve_delay(&self) -> Duration {
        Duration::from_millis(self.resolve_delay_ms)
    }
}

impl FormConfig {
    pub fn submit_latency(&self) -> Duration {
        Duration::from_millis(self.submit_latency_ms)
    }

    pub fn notice_dismiss(&self) -> Duration {
        Duration::from_millis(self.notice_dismiss_ms)
    }
}

impl ScrollConfig {
    pub fn section_scroll(&self) -> Duration {
        Duration::from_millis(self.section_scroll_ms)
    }

    pub fn top_scroll(&self) -> Duration {
        Duration::from_millis(self.top_scroll_ms)
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}
