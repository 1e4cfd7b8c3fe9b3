//! Headless interaction core for a photography studio website.
//!
//! A host feeds `ui::PageEvent`s into a `ui::Page` and applies the
//! `ui::Effect`s it gets back; `ui::PageRuntime` does the waiting on tokio.

pub mod config;
pub mod error;
pub mod gallery;
pub mod logging;
pub mod ui;
