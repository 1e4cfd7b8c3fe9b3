//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;

use studio_site::config::SiteConfig;
use studio_site::gallery::Catalog;
use studio_site::ui::{Page, PageLayout};
use tempfile::TempDir;

/// Write `content` to `config.toml` in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// The full studio page with the builtin catalog and default config.
pub fn studio_page() -> Page {
    let catalog = Catalog::builtin();
    let layout = PageLayout::studio(&catalog, 6);
    Page::new(SiteConfig::default(), layout, Ok(catalog))
}
