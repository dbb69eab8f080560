//! Hero section
//!
//! The landing banner. Structural: always present, never disabled, its key
//! only ever leaves the section-order registry.

use serde::{Deserialize, Serialize};

/// Hero banner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    /// Background video URL
    pub video_url: String,

    /// Logo image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    /// Headline
    pub title: String,

    /// Sub-headline; may contain newlines
    pub subtitle: String,

    /// Call-to-action buttons, edited wholesale
    pub buttons: Vec<HeroButton>,
}

/// A hero call-to-action button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroButton {
    /// Button label
    pub text: String,

    /// Target link
    pub link: String,

    /// Background color override (hex or palette token)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    /// Text color override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}
