//! Menu sections
//!
//! Category grid, header menu, product menu bar and landing-page menu bar.
//! Every item list here follows the ordered-collection contract.

use deckplan_collection::OrderedItem;
use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// Category menu grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryMenuSection {
    /// Whether the menu renders
    pub enabled: bool,

    /// Category entries
    pub categories: Vec<CategoryItem>,
}

impl CategoryMenuSection {
    /// Hard cap on category entries
    pub const MAX_CATEGORIES: usize = 12;
}

/// One category menu entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CategoryItem {
    /// Entry identity
    pub id: ItemId,

    /// Whether the entry renders
    pub enabled: bool,

    /// Emoji or image URL
    pub icon: String,

    /// Menu label
    pub text: String,

    /// Internal page name, e.g. `ActivityPage`
    pub page_name: String,

    /// URL slug, e.g. `/category/activity`
    pub url_slug: String,

    /// 1-based position
    pub order: u32,
}

impl CategoryItem {
    /// New entry with a fresh id and editor defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: ItemId::generate("category"),
            enabled: true,
            icon: "🔗".to_string(),
            text: "New category".to_string(),
            page_name: "NewCategoryPage".to_string(),
            url_slug: "/category/new".to_string(),
            order: 0,
        }
    }
}

impl Default for CategoryItem {
    fn default() -> Self {
        Self {
            id: ItemId::default(),
            enabled: true,
            icon: String::new(),
            text: String::new(),
            page_name: String::new(),
            url_slug: String::new(),
            order: 0,
        }
    }
}

impl OrderedItem for CategoryItem {
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

/// Fixed header menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopMenuSection {
    /// Whether the header renders
    pub enabled: bool,

    /// Logo image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    /// Link behind the logo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_link: Option<String>,

    /// Signed-in greeting
    pub welcome_message: WelcomeMessage,

    /// Header menu items
    pub menu_items: Vec<TopMenuItem>,
}

/// Signed-in greeting shown in the header
///
/// `{name}` in the text is substituted with the visitor's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WelcomeMessage {
    /// Whether the greeting renders
    pub enabled: bool,

    /// Greeting template
    pub text: String,

    /// Color of the substituted name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_color: Option<String>,

    /// Color of the surrounding text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

/// One header menu entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TopMenuItem {
    /// Entry identity
    pub id: ItemId,

    /// Whether the entry renders
    pub enabled: bool,

    /// Menu label
    pub text: String,

    /// URL slug
    pub url_slug: String,

    /// 1-based position
    pub order: u32,

    /// Render as a filled button
    pub is_button: bool,

    /// Button color token when `is_button`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_color: Option<String>,
}

impl TopMenuItem {
    /// New entry with a fresh id and editor defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: ItemId::generate("top-menu"),
            enabled: true,
            text: "New menu".to_string(),
            url_slug: "/".to_string(),
            order: 0,
            is_button: false,
            button_color: Some("blue-600".to_string()),
        }
    }
}

impl Default for TopMenuItem {
    fn default() -> Self {
        Self {
            id: ItemId::default(),
            enabled: true,
            text: String::new(),
            url_slug: String::new(),
            order: 0,
            is_button: false,
            button_color: None,
        }
    }
}

impl OrderedItem for TopMenuItem {
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

/// Product menu bar pinned to an edge of the product pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMenuBarSection {
    /// Whether the bar renders
    pub enabled: bool,

    /// Which edge the bar pins to
    pub position: BarPosition,

    /// Bar menu items
    pub menu_items: Vec<ProductMenuItem>,
}

/// Edge the product menu bar pins to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarPosition {
    /// Bottom of the viewport
    Bottom,
    /// Top of the viewport
    Top,
}

/// One product menu bar entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductMenuItem {
    /// Entry identity
    pub id: ItemId,

    /// Whether the entry renders
    pub enabled: bool,

    /// Menu label
    pub text: String,

    /// Emoji or icon URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// URL slug
    pub url_slug: String,

    /// 1-based position
    pub order: u32,
}

impl ProductMenuItem {
    /// New entry with a fresh id and editor defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: ItemId::generate("product-menu"),
            enabled: true,
            text: "New menu".to_string(),
            icon: Some("🔗".to_string()),
            url_slug: "/".to_string(),
            order: 0,
        }
    }
}

impl Default for ProductMenuItem {
    fn default() -> Self {
        Self {
            id: ItemId::default(),
            enabled: true,
            text: String::new(),
            icon: None,
            url_slug: String::new(),
            order: 0,
        }
    }
}

impl OrderedItem for ProductMenuItem {
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

/// Landing-page menu bar
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingMenuBarSection {
    /// Whether the bar renders
    pub enabled: bool,

    /// Which edge the bar pins to
    pub position: LandingPosition,

    /// Full strip or collapsed button
    pub display_type: LandingDisplay,

    /// Corner for the collapsed button
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_position: Option<ButtonCorner>,

    /// Bar menu items
    pub menu_items: Vec<LandingMenuItem>,
}

/// Edge the landing menu bar pins to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandingPosition {
    /// Top of the viewport
    Top,
    /// Left edge
    Left,
}

/// Landing menu bar presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandingDisplay {
    /// Full menu strip
    Full,
    /// Collapsed behind a button
    Button,
}

/// Corner placement of the collapsed menu button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonCorner {
    /// Upper left
    LeftTop,
    /// Upper right
    RightTop,
}

/// One landing menu bar entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LandingMenuItem {
    /// Entry identity
    pub id: ItemId,

    /// Whether the entry renders
    pub enabled: bool,

    /// Menu label
    pub text: String,

    /// URL slug
    pub url_slug: String,

    /// 1-based position
    pub order: u32,
}

impl LandingMenuItem {
    /// New entry with a fresh id and editor defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: ItemId::generate("landing-menu"),
            enabled: true,
            text: "New menu".to_string(),
            url_slug: "/".to_string(),
            order: 0,
        }
    }
}

impl Default for LandingMenuItem {
    fn default() -> Self {
        Self {
            id: ItemId::default(),
            enabled: true,
            text: String::new(),
            url_slug: String::new(),
            order: 0,
        }
    }
}

impl OrderedItem for LandingMenuItem {
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn category_item_wire_keys() {
        let item = CategoryItem::new();
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["pageName"], json!("NewCategoryPage"));
        assert_eq!(value["urlSlug"], json!("/category/new"));
    }

    #[test]
    fn top_menu_item_decodes_legacy_id() {
        let item: TopMenuItem = serde_json::from_value(json!({
            "id": "1",
            "enabled": true,
            "text": "Community",
            "urlSlug": "/community",
            "order": 1,
            "isButton": true,
            "buttonColor": "red-600"
        }))
        .unwrap();

        assert_eq!(item.id.as_str(), "1");
        assert!(item.is_button);
    }

    #[test]
    fn button_corner_is_kebab_case() {
        assert_eq!(
            serde_json::to_string(&ButtonCorner::RightTop).unwrap(),
            "\"right-top\""
        );
    }

    #[test]
    fn new_item_ids_carry_kind_prefixes() {
        assert!(CategoryItem::new().id.as_str().starts_with("category-"));
        assert!(TopMenuItem::new().id.as_str().starts_with("top-menu-"));
        assert!(ProductMenuItem::new().id.as_str().starts_with("product-menu-"));
        assert!(LandingMenuItem::new().id.as_str().starts_with("landing-menu-"));
    }
}
