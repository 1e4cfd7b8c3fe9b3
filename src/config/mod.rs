//! Site configuration: TOML file, defaults and a shared store.

mod loader;
mod store;
mod types;

pub use loader::ConfigError;
pub use store::ConfigStore;
pub use types::{
    CarouselConfig, FormConfig, GalleryConfig, LightboxConfig, ScrollConfig, SiteConfig,
};
