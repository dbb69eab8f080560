//! Social-buttons and video-banner sections

use serde::{Deserialize, Serialize};

/// Social contact buttons block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialButtonsSection {
    /// Whether the block renders
    pub enabled: bool,

    /// Button arrangement
    pub layout: SocialLayout,

    /// Buttons, edited wholesale
    pub buttons: Vec<SocialButton>,
}

/// Arrangement of the social buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialLayout {
    /// Side by side
    Horizontal,
    /// Stacked
    Vertical,
}

/// One social contact button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialButton {
    /// Whether the button renders
    pub enabled: bool,

    /// Channel kind
    #[serde(rename = "type")]
    pub kind: SocialButtonKind,

    /// Button label
    pub text: String,

    /// Target link
    pub link: String,

    /// Button size
    pub size: ButtonSize,

    /// Icon (emoji or image URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Background color override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,

    /// Text color override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
}

/// Social channel kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialButtonKind {
    /// KakaoTalk consultation channel
    Kakao,
    /// YouTube channel
    Youtube,
    /// Free-form link
    Custom,
}

/// Social button size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    /// Prominent
    Large,
    /// Default
    Medium,
    /// Compact
    Small,
}

/// Full-width video banner block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoBannerSection {
    /// Whether the block renders
    pub enabled: bool,

    /// Banner video URL
    pub video_url: String,

    /// Overlay title
    pub title: String,

    /// Click-through link
    pub link: String,
}
