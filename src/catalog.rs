//! Clothing Catalog
//!
//! Static taxonomy of donation categories and the clothing labels in each.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Category identifier (stable key used in item keys)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryId {
    Tops,
    Bottoms,
    Full,
    Outer,
}

impl CategoryId {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Tops => "tops",
            CategoryId::Bottoms => "bottoms",
            CategoryId::Full => "full",
            CategoryId::Outer => "outer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "tops" => Some(CategoryId::Tops),
            "bottoms" => Some(CategoryId::Bottoms),
            "full" => Some(CategoryId::Full),
            "outer" => Some(CategoryId::Outer),
            _ => None,
        }
    }

    /// Catalog entry for this id
    pub fn category(&self) -> &'static Category {
        // CATALOG is declared in enum order
        &CATALOG[*self as usize]
    }
}

/// One catalog category with its ordered item labels
#[derive(Debug, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub label: &'static str,
    pub items: &'static [&'static str],
}

/// The fixed catalog, in display order
pub const CATALOG: &[Category] = &[
    Category {
        id: CategoryId::Tops,
        label: "Tops",
        items: &["T-shirts", "Shirts", "Sweaters"],
    },
    Category {
        id: CategoryId::Bottoms,
        label: "Bottoms",
        items: &["Jeans", "Trousers", "Shorts"],
    },
    Category {
        id: CategoryId::Full,
        label: "Full",
        items: &["Dresses", "Jumpsuits"],
    },
    Category {
        id: CategoryId::Outer,
        label: "Outerwear",
        items: &["Jackets", "Coats"],
    },
];

/// Composite (category, label) key for one clothing item
///
/// Only constructible for labels present in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemKey {
    category: CategoryId,
    label: &'static str,
}

impl ItemKey {
    /// Look up a key, returning `None` if the label is not in that category
    pub fn new(category: CategoryId, label: &str) -> Option<Self> {
        category
            .category()
            .items
            .iter()
            .copied()
            .find(|item| *item == label)
            .map(|label| Self { category, label })
    }

    pub fn category(&self) -> CategoryId {
        self.category
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category.as_str(), self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseKeyError {
    #[error("item key `{0}` is missing the `category:label` separator")]
    MissingSeparator(String),
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    #[error("unknown item `{label}` in category `{category}`")]
    UnknownItem { category: String, label: String },
}

impl FromStr for ItemKey {
    type Err = ParseKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, label) = s
            .split_once(':')
            .ok_or_else(|| ParseKeyError::MissingSeparator(s.to_string()))?;
        let id = CategoryId::from_str(category)
            .ok_or_else(|| ParseKeyError::UnknownCategory(category.to_string()))?;
        ItemKey::new(id, label).ok_or_else(|| ParseKeyError::UnknownItem {
            category: category.to_string(),
            label: label.to_string(),
        })
    }
}

/// Every item key in catalog order
pub fn all_keys() -> impl Iterator<Item = ItemKey> {
    CATALOG.iter().flat_map(|cat| {
        cat.items.iter().map(move |label| ItemKey {
            category: cat.id,
            label: *label,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        assert_eq!(CATALOG.len(), 4);
        for cat in CATALOG {
            assert!((2..=3).contains(&cat.items.len()), "{} has {} items", cat.label, cat.items.len());
            assert_eq!(cat.id.category().label, cat.label);
        }
        assert_eq!(all_keys().count(), 10);
    }

    #[test]
    fn test_item_key_display_and_parse() {
        let key = ItemKey::new(CategoryId::Tops, "T-shirts").unwrap();
        assert_eq!(key.to_string(), "tops:T-shirts");
        assert_eq!("tops:T-shirts".parse::<ItemKey>(), Ok(key));
    }

    #[test]
    fn test_item_key_rejects_unknown() {
        assert!(ItemKey::new(CategoryId::Tops, "Jeans").is_none());
        assert_eq!(
            "hats:Beanie".parse::<ItemKey>(),
            Err(ParseKeyError::UnknownCategory("hats".to_string()))
        );
        assert!(matches!(
            "outer:Scarves".parse::<ItemKey>(),
            Err(ParseKeyError::UnknownItem { .. })
        ));
        assert!(matches!(
            "tops".parse::<ItemKey>(),
            Err(ParseKeyError::MissingSeparator(_))
        ));
    }
}
