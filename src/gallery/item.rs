use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stable identity of a portfolio item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Session category a portfolio item is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Family,
    Newborn,
    Birthday,
    BabyShower,
    Maternity,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Family,
        Category::Newborn,
        Category::Birthday,
        Category::BabyShower,
        Category::Maternity,
    ];

    /// Tag used by filter controls and data attributes.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Family => "family",
            Category::Newborn => "newborn",
            Category::Birthday => "birthday",
            Category::BabyShower => "baby-shower",
            Category::Maternity => "maternity",
        }
    }

    /// Human-readable session type.
    pub fn label(self) -> &'static str {
        match self {
            Category::Family => "Family Session",
            Category::Newborn => "Newborn Session",
            Category::Birthday => "Birthday Session",
            Category::BabyShower => "Baby Shower",
            Category::Maternity => "Maternity Session",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.tag() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Month a session took place, written `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth(NaiveDate);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid session date '{0}', expected YYYY-MM")]
pub struct InvalidYearMonth(pub String);

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(Self)
    }

    /// Display form, e.g. `March 2024`.
    pub fn display(&self) -> String {
        self.0.format("%B %Y").to_string()
    }
}

impl FromStr for YearMonth {
    type Err = InvalidYearMonth;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| InvalidYearMonth(s.to_string()))?;
        if year.len() != 4 || month.len() != 2 {
            return Err(InvalidYearMonth(s.to_string()));
        }
        let year: i32 = year.parse().map_err(|_| InvalidYearMonth(s.to_string()))?;
        let month: u32 = month.parse().map_err(|_| InvalidYearMonth(s.to_string()))?;
        YearMonth::new(year, month).ok_or_else(|| InvalidYearMonth(s.to_string()))
    }
}

impl TryFrom<String> for YearMonth {
    type Error = InvalidYearMonth;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}

/// One portfolio session. Immutable once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub date: YearMonth,
    /// Locator of the cover image.
    pub image: String,
    #[serde(rename = "galleryId")]
    pub gallery_id: String,
}

/// A client review shown as a testimonial slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub name: String,
    #[serde(rename = "type")]
    pub session_type: String,
    pub text: String,
    pub rating: u8,
}

impl Review {
    pub fn stars(&self) -> String {
        "★".repeat(self.rating.min(5) as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_tag() {
        for category in Category::ALL {
            assert_eq!(category.tag().parse::<Category>(), Ok(category));
        }
        assert!("portrait".parse::<Category>().is_err());
    }

    #[test]
    fn year_month_formats_for_display() {
        let date: YearMonth = "2024-03".parse().unwrap();
        assert_eq!(date.display(), "March 2024");
        assert_eq!(date.to_string(), "2024-03");
    }

    #[test]
    fn year_month_rejects_bad_input() {
        assert!("2024-13".parse::<YearMonth>().is_err());
        assert!("2024".parse::<YearMonth>().is_err());
        assert!("24-03".parse::<YearMonth>().is_err());
    }

    #[test]
    fn gallery_item_reads_wire_names() {
        let json = r#"{
            "id": "baby-olivia",
            "name": "Baby Olivia",
            "description": "Newborn Session at 8 days",
            "category": "newborn",
            "date": "2024-03",
            "image": "https://example.com/olivia.jpg",
            "galleryId": "baby-olivia"
        }"#;
        let item: GalleryItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, Category::Newborn);
        assert_eq!(item.gallery_id, "baby-olivia");
        assert_eq!(item.date.display(), "March 2024");
    }

    #[test]
    fn review_stars_capped_at_five() {
        let review = Review {
            name: "A".into(),
            session_type: "B".into(),
            text: "C".into(),
            rating: 9,
        };
        assert_eq!(review.stars().chars().count(), 5);
    }
}
