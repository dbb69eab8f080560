//! Single-purpose showcase sections
//!
//! The small blocks that carry a flag and a handful of copy fields:
//! search, callouts, media strips, the plain product list, the promotion
//! banner and the popup overlay.

use serde::{Deserialize, Serialize};

/// Cruise product search block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CruiseSearchSection {
    /// Whether the block renders
    pub enabled: bool,

    /// Block title
    pub title: String,
}

/// A titled callout with a single link
///
/// Shared shape of the review and community sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalloutSection {
    /// Whether the block renders
    pub enabled: bool,

    /// Block title
    pub title: String,

    /// Block description
    pub description: String,

    /// Link label
    pub link_text: String,

    /// Link target
    pub link_url: String,
}

/// A titled media strip
///
/// Shared shape of the YouTube shorts, videos and live blocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowcaseSection {
    /// Whether the block renders
    pub enabled: bool,

    /// Block title
    pub title: String,

    /// Block description
    pub description: String,
}

/// Plain product list block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListSection {
    /// Whether the block renders
    pub enabled: bool,
}

/// Promotion banner carousel block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromotionBannerSection {
    /// Whether the block renders
    pub enabled: bool,
}

/// Popup overlay shown on page entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupSection {
    /// Whether the popup shows
    pub enabled: bool,

    /// Popup body kind
    #[serde(rename = "type")]
    pub kind: PopupKind,

    /// Image URL for image popups
    pub image_url: String,

    /// Title for text popups
    pub title: String,

    /// Body for text popups
    pub content: String,

    /// Click-through link
    pub link: String,

    /// Show the close control
    pub show_close_button: bool,
}

/// Popup body kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PopupKind {
    /// Full-bleed image
    Image,
    /// Title and body copy
    Text,
}
