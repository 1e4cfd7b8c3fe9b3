//! Portfolio data: items, categories, reviews and the catalog that holds them.

mod catalog;
mod item;

pub use catalog::{Catalog, CatalogError};
pub use item::{
    Category, GalleryItem, InvalidYearMonth, ItemId, Review, UnknownCategory, YearMonth,
};
