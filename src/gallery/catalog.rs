use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::item::{Category, GalleryItem, ItemId, Review, YearMonth};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate portfolio item id '{0}'")]
    DuplicateId(ItemId),
}

/// Fixed, ordered portfolio data plus the testimonial reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<GalleryItem>,
    reviews: Vec<Review>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate item ids.
    pub fn new(items: Vec<GalleryItem>, reviews: Vec<Review>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(&item.id) {
                return Err(CatalogError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items, reviews })
    }

    /// Read portfolio items from a JSON array; reviews stay the builtin ones.
    pub fn load_from(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        let items: Vec<GalleryItem> =
            serde_json::from_str(&content).map_err(|source| CatalogError::ParseError {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(items, builtin_reviews())
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn get(&self, index: usize) -> Option<&GalleryItem> {
        self.items.get(index)
    }

    pub fn find(&self, id: &ItemId) -> Option<&GalleryItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn categories(&self) -> Vec<Category> {
        self.items.iter().map(|item| item.category).collect()
    }

    /// The studio's own portfolio.
    pub fn builtin() -> Self {
        Self {
            items: builtin_items(),
            reviews: builtin_reviews(),
        }
    }
}

fn item(
    id: &str,
    name: &str,
    description: &str,
    category: Category,
    (year, month): (i32, u32),
    image: &str,
) -> Option<GalleryItem> {
    Some(GalleryItem {
        id: ItemId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        category,
        date: YearMonth::new(year, month)?,
        image: format!(
            "https://images.unsplash.com/{}?ixlib=rb-4.0.3&auto=format&fit=crop&w=600&q=80",
            image
        ),
        gallery_id: id.to_string(),
    })
}

fn builtin_items() -> Vec<GalleryItem> {
    [
        item(
            "morrison-family",
            "The Morrison Family",
            "Spring Family Session",
            Category::Family,
            (2024, 3),
            "photo-1609220136736-443140cffec6",
        ),
        item(
            "parker-family",
            "The Parker Family",
            "Winter Family Portraits",
            Category::Family,
            (2024, 2),
            "photo-1511895426328-dc8714191300",
        ),
        item(
            "baby-olivia",
            "Baby Olivia",
            "Newborn Session at 8 days",
            Category::Newborn,
            (2024, 3),
            "photo-1544367567-0f2fcb009e0b",
        ),
        item(
            "sofia-birthday",
            "Sofia's 3rd Birthday",
            "Princess Theme Celebration",
            Category::Birthday,
            (2024, 3),
            "photo-1530103862676-de8c9debad1d",
        ),
        item(
            "ashley-shower",
            "Ashley's Baby Shower",
            "Boho Chic Theme",
            Category::BabyShower,
            (2024, 3),
            "photo-1576566588028-4147f3842f27",
        ),
        item(
            "rachel-maternity",
            "Rachel's Maternity",
            "Golden Hour Session",
            Category::Maternity,
            (2024, 3),
            "photo-1578662996442-48f60103fc96",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn builtin_reviews() -> Vec<Review> {
    vec![
        Review {
            name: "The Morrison Family".to_string(),
            session_type: "Family Session Client".to_string(),
            text: "Sarah captured our family perfectly! The photos are absolutely beautiful \
                   and we'll treasure them forever."
                .to_string(),
            rating: 5,
        },
        Review {
            name: "Baby Olivia's Parents".to_string(),
            session_type: "Newborn Session Client".to_string(),
            text: "Working with Sarah for our newborn session was amazing. She was so patient \
                   and gentle with our little one."
                .to_string(),
            rating: 5,
        },
        Review {
            name: "Sofia's Family".to_string(),
            session_type: "Birthday Session Client".to_string(),
            text: "Our daughter's birthday photos are incredible! Sarah captured all the joy \
                   and excitement of the day."
                .to_string(),
            rating: 5,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_has_six_items_in_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "morrison-family",
                "parker-family",
                "baby-olivia",
                "sofia-birthday",
                "ashley-shower",
                "rachel-maternity",
            ]
        );
        assert_eq!(catalog.reviews().len(), 3);
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let mut items = Catalog::builtin().items().to_vec();
        items.push(items[0].clone());
        match Catalog::new(items, Vec::new()) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id.as_str(), "morrison-family"),
            other => panic!("expected DuplicateId, got {:?}", other),
        }
    }

    #[test]
    fn load_from_reads_json_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id":"a","name":"A","description":"d","category":"family","date":"2023-11","image":"a.jpg","galleryId":"a"}}]"#
        )
        .unwrap();

        let catalog = Catalog::load_from(file.path()).unwrap();
        assert_eq!(catalog.items().len(), 1);
        assert_eq!(catalog.items()[0].date.display(), "November 2023");
    }

    #[test]
    fn load_from_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            Catalog::load_from(file.path()),
            Err(CatalogError::ParseError { .. })
        ));
    }

    #[test]
    fn find_by_id() {
        let catalog = Catalog::builtin();
        let found = catalog.find(&ItemId::new("baby-olivia")).unwrap();
        assert_eq!(found.category, Category::Newborn);
        assert!(catalog.find(&ItemId::new("missing")).is_none());
    }
}
