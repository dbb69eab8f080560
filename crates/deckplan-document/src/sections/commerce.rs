//! Product and theme block lists
//!
//! Both are expandable sections: one registry key fans out into one
//! rendered unit per list entry. The fan-out is a property of the list
//! data, not of the section-order registry.

use deckplan_collection::OrderedItem;
use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// One independently-managed product block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductSection {
    /// Block identity
    pub id: ItemId,

    /// Whether the block renders
    pub enabled: bool,

    /// 1-based position among sibling blocks
    pub order: u32,

    /// Block title
    pub title: String,

    /// Presentation of the contained products
    #[serde(rename = "type")]
    pub display: ProductDisplayType,

    /// Curated product references
    pub products: Vec<ProductRef>,

    /// "See more" link target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,

    /// "See more" link label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,
}

impl ProductSection {
    /// New block with a fresh id and editor defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: ItemId::generate("section"),
            enabled: true,
            order: 0,
            title: "New product section".to_string(),
            display: ProductDisplayType::Swipe,
            products: Vec::new(),
            link_url: Some(String::new()),
            link_text: Some("See more".to_string()),
        }
    }
}

impl Default for ProductSection {
    fn default() -> Self {
        Self {
            id: ItemId::default(),
            enabled: true,
            order: 0,
            title: String::new(),
            display: ProductDisplayType::Swipe,
            products: Vec::new(),
            link_url: None,
            link_text: None,
        }
    }
}

impl OrderedItem for ProductSection {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// Presentation of a product block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductDisplayType {
    /// Horizontal swipe strip
    #[serde(rename = "swipe")]
    Swipe,
    /// Two columns, three rows
    #[serde(rename = "grid-2x3")]
    Grid2x3,
    /// Three-column grid
    #[serde(rename = "grid-3")]
    Grid3,
    /// Four-column grid
    #[serde(rename = "grid-4")]
    Grid4,
    /// Exactly three fixed slots
    #[serde(rename = "fixed-3")]
    Fixed3,
    /// Exactly eight fixed slots
    #[serde(rename = "fixed-8")]
    Fixed8,
}

/// Reference to a product by code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
    /// Product code in the commerce catalog
    pub product_code: String,

    /// Cached display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
}

/// One themed product block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeSection {
    /// Block identity
    pub id: ItemId,

    /// Whether the block renders
    pub enabled: bool,

    /// 1-based position among sibling blocks
    pub order: u32,

    /// Block title
    pub title: String,

    /// Block subtitle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Presentation of the matched products
    pub display_type: ThemeDisplayType,

    /// Which catalog dimension selects the products
    pub theme_type: ThemeType,

    /// Value within the selected dimension
    pub theme_value: String,

    /// Maximum number of products shown
    pub limit: u32,

    /// "See all" link label
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_text: Option<String>,

    /// "See all" link target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
}

impl ThemeSection {
    /// New block with a fresh id and editor defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: ItemId::generate("theme"),
            enabled: true,
            order: 0,
            title: "New theme section".to_string(),
            subtitle: Some(String::new()),
            display_type: ThemeDisplayType::Carousel,
            theme_type: ThemeType::Classification,
            theme_value: "popular".to_string(),
            limit: 8,
            link_text: Some("View all".to_string()),
            link_url: Some(String::new()),
        }
    }
}

impl Default for ThemeSection {
    fn default() -> Self {
        Self {
            id: ItemId::default(),
            enabled: true,
            order: 0,
            title: String::new(),
            subtitle: None,
            display_type: ThemeDisplayType::Carousel,
            theme_type: ThemeType::Classification,
            theme_value: String::new(),
            limit: 8,
            link_text: None,
            link_url: None,
        }
    }
}

impl OrderedItem for ThemeSection {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn order(&self) -> u32 {
        self.order
    }

    fn set_order(&mut self, order: u32) {
        self.order = order;
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// Presentation of a theme block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeDisplayType {
    /// Swipeable carousel
    Carousel,
    /// Static grid
    Grid,
}

/// Catalog dimension a theme block filters by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThemeType {
    /// Editorial classification
    Classification,
    /// Operating cruise line
    CruiseLine,
    /// Product category
    Category,
    /// Free-form tag
    Tag,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn product_display_wire_forms() {
        assert_eq!(
            serde_json::to_string(&ProductDisplayType::Grid2x3).unwrap(),
            "\"grid-2x3\""
        );
        let back: ProductDisplayType = serde_json::from_str("\"fixed-8\"").unwrap();
        assert_eq!(back, ProductDisplayType::Fixed8);
    }

    #[test]
    fn theme_type_is_camel_case_on_wire() {
        assert_eq!(
            serde_json::to_string(&ThemeType::CruiseLine).unwrap(),
            "\"cruiseLine\""
        );
    }

    #[test]
    fn product_section_display_uses_type_key() {
        let section = ProductSection::new();
        let value = serde_json::to_value(&section).unwrap();
        assert_eq!(value["type"], json!("swipe"));
        assert!(value["id"].as_str().unwrap().starts_with("section-"));
    }

    #[test]
    fn new_blocks_get_distinct_ids() {
        assert_ne!(ProductSection::new().id, ProductSection::new().id);
        assert_ne!(ThemeSection::new().id, ThemeSection::new().id);
    }

    #[test]
    fn theme_section_decodes_partial_item() {
        let section: ThemeSection = serde_json::from_value(json!({
            "id": "theme-1",
            "title": "Mediterranean summer",
            "themeValue": "mediterranean"
        }))
        .unwrap();

        assert!(section.enabled);
        assert_eq!(section.limit, 8);
        assert_eq!(section.display_type, ThemeDisplayType::Carousel);
    }
}
