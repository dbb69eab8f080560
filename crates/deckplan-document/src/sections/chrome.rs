//! Footer and global style settings

use deckplan_collection::OrderedItem;
use serde::{Deserialize, Serialize};

use crate::id::ItemId;

/// Page footer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FooterSection {
    /// Whether the footer renders
    pub enabled: bool,

    /// Company display name
    pub company_name: String,

    /// Registration lines (address, business numbers, officers)
    pub company_info: String,

    /// Copyright line
    pub copyright: String,

    /// Footer link entries
    pub menu_items: Vec<FooterMenuItem>,

    /// Contact block
    pub contact_info: ContactInfo,
}

/// One footer link entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FooterMenuItem {
    /// Entry identity
    pub id: ItemId,

    /// Whether the entry renders
    pub enabled: bool,

    /// Link label
    pub text: String,

    /// URL slug
    pub url_slug: String,

    /// 1-based position
    pub order: u32,

    /// Emphasized rendering (e.g. the privacy policy link)
    pub is_highlight: bool,
}

impl FooterMenuItem {
    /// New entry with a fresh id and editor defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: ItemId::generate("footer-menu"),
            enabled: true,
            text: "New menu".to_string(),
            url_slug: "/".to_string(),
            order: 0,
            is_highlight: false,
        }
    }
}

impl Default for FooterMenuItem {
    fn default() -> Self {
        Self {
            id: ItemId::default(),
            enabled: true,
            text: String::new(),
            url_slug: String::new(),
            order: 0,
            is_highlight: false,
        }
    }
}

impl OrderedItem for FooterMenuItem {
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

/// Footer contact block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    /// Phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Contact email
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Messenger channel link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kakao_link: Option<String>,

    /// Office hours line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_hours: Option<String>,
}

/// Store-wide style settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalSettings {
    /// Banner image slots
    pub banners: BannerSettings,

    /// Emoji standing in for checkmarks
    pub checkmark_icon: String,

    /// Default button palette
    pub button_colors: ButtonColors,
}

/// Banner image slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerSettings {
    /// Hero banner image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_banner: Option<String>,

    /// Promotion banner image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion_banner: Option<String>,

    /// Category banner image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_banner: Option<String>,
}

/// Default button palette
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonColors {
    /// Primary button background
    pub primary: String,

    /// Primary button text
    pub primary_text: String,

    /// Secondary button background
    pub secondary: String,

    /// Secondary button text
    pub secondary_text: String,
}
