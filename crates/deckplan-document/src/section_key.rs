//! Section keys
//!
//! Provides [`SectionKey`], the tagged union of block types the
//! section-order registry can hold. A key, not a position, is the true
//! identity of a section: every occurrence of a key in the registry refers
//! to the same underlying section data.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::document::DocumentField;

/// Block type selectable in the section-order registry
///
/// Wire form is the kebab-case key string. The same key may appear several
/// times in the registry; all occurrences share the section data named by
/// [`SectionKey::field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKey {
    /// Fixed header menu
    TopMenu,
    /// Hero banner (structural, always present)
    Hero,
    /// Social contact buttons
    SocialButtons,
    /// Combined social/video block; shares the social-buttons section data
    SocialVideo,
    /// Full-width video banner
    VideoBanner,
    /// Company statistics cards
    CompanyStats,
    /// Category menu grid
    CategoryMenu,
    /// Cruise product search block
    CruiseSearch,
    /// Customer review callout
    ReviewSection,
    /// Product section blocks (fans out into one unit per list entry)
    ProductSections,
    /// Themed product blocks (fans out into one unit per list entry)
    ThemeSections,
    /// YouTube Shorts strip
    YoutubeShorts,
    /// YouTube video strip
    YoutubeVideos,
    /// YouTube live embed
    YoutubeLive,
    /// Plain product list
    ProductList,
    /// Promotion banner carousel
    PromotionBanner,
    /// Community callout
    CommunitySection,
    /// Product menu bar
    ProductMenuBar,
    /// Landing-page menu bar
    LandingPageMenuBar,
    /// Page footer
    Footer,
    /// Popup overlay
    Popup,
}

impl SectionKey {
    /// Every key, in the default presentation order of the block picker
    pub const ALL: [SectionKey; 21] = [
        SectionKey::Hero,
        SectionKey::SocialButtons,
        SectionKey::VideoBanner,
        SectionKey::CompanyStats,
        SectionKey::SocialVideo,
        SectionKey::CruiseSearch,
        SectionKey::ReviewSection,
        SectionKey::CommunitySection,
        SectionKey::YoutubeShorts,
        SectionKey::YoutubeVideos,
        SectionKey::YoutubeLive,
        SectionKey::ProductList,
        SectionKey::ProductSections,
        SectionKey::ThemeSections,
        SectionKey::CategoryMenu,
        SectionKey::TopMenu,
        SectionKey::Footer,
        SectionKey::ProductMenuBar,
        SectionKey::LandingPageMenuBar,
        SectionKey::PromotionBanner,
        SectionKey::Popup,
    ];

    /// Wire key string (kebab-case)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopMenu => "top-menu",
            Self::Hero => "hero",
            Self::SocialButtons => "social-buttons",
            Self::SocialVideo => "social-video",
            Self::VideoBanner => "video-banner",
            Self::CompanyStats => "company-stats",
            Self::CategoryMenu => "category-menu",
            Self::CruiseSearch => "cruise-search",
            Self::ReviewSection => "review-section",
            Self::ProductSections => "product-sections",
            Self::ThemeSections => "theme-sections",
            Self::YoutubeShorts => "youtube-shorts",
            Self::YoutubeVideos => "youtube-videos",
            Self::YoutubeLive => "youtube-live",
            Self::ProductList => "product-list",
            Self::PromotionBanner => "promotion-banner",
            Self::CommunitySection => "community-section",
            Self::ProductMenuBar => "product-menu-bar",
            Self::LandingPageMenuBar => "landing-page-menu-bar",
            Self::Footer => "footer",
            Self::Popup => "popup",
        }
    }

    /// The document field owning this key's section data
    ///
    /// `SocialVideo` aliases the social-buttons data; it has no field of
    /// its own.
    #[must_use]
    pub const fn field(self) -> DocumentField {
        match self {
            Self::TopMenu => DocumentField::TopMenu,
            Self::Hero => DocumentField::Hero,
            Self::SocialButtons | Self::SocialVideo => DocumentField::SocialButtons,
            Self::VideoBanner => DocumentField::VideoBanner,
            Self::CompanyStats => DocumentField::CompanyStats,
            Self::CategoryMenu => DocumentField::CategoryMenu,
            Self::CruiseSearch => DocumentField::CruiseSearch,
            Self::ReviewSection => DocumentField::ReviewSection,
            Self::ProductSections => DocumentField::ProductSections,
            Self::ThemeSections => DocumentField::ThemeSections,
            Self::YoutubeShorts => DocumentField::YoutubeShorts,
            Self::YoutubeVideos => DocumentField::YoutubeVideos,
            Self::YoutubeLive => DocumentField::YoutubeLive,
            Self::ProductList => DocumentField::ProductList,
            Self::PromotionBanner => DocumentField::PromotionBanner,
            Self::CommunitySection => DocumentField::CommunitySection,
            Self::ProductMenuBar => DocumentField::ProductMenuBar,
            Self::LandingPageMenuBar => DocumentField::LandingPageMenuBar,
            Self::Footer => DocumentField::Footer,
            Self::Popup => DocumentField::Popup,
        }
    }

    /// Whether the section carries an `enabled` flag that removing the last
    /// registry occurrence should clear
    ///
    /// Hero is structural and the block-list sections have per-item flags
    /// instead; those only ever leave the registry.
    #[must_use]
    pub const fn supports_disable(self) -> bool {
        !matches!(self, Self::Hero | Self::ProductSections | Self::ThemeSections)
    }
}

impl Display for SectionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = UnknownSectionKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSectionKey(s.to_string()))
    }
}

/// Error for a key string outside the [`SectionKey`] union
#[derive(Debug, thiserror::Error)]
#[error("unknown section key: {0}")]
pub struct UnknownSectionKey(pub String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_wire_roundtrip() {
        for key in SectionKey::ALL {
            let parsed: SectionKey = key.as_str().parse().unwrap();
            assert_eq!(parsed, key);
        }
    }

    #[test]
    fn key_serde_matches_as_str() {
        for key in SectionKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));

            let back: SectionKey = serde_json::from_str(&json).unwrap();
            assert_eq!(back, key);
        }
    }

    #[test]
    fn key_from_str_unknown() {
        let result: Result<SectionKey, _> = "mystery-block".parse();
        assert!(result.is_err());
    }

    #[test]
    fn social_video_aliases_social_buttons() {
        assert_eq!(SectionKey::SocialVideo.field(), DocumentField::SocialButtons);
    }

    #[test]
    fn structural_keys_do_not_disable() {
        assert!(!SectionKey::Hero.supports_disable());
        assert!(!SectionKey::ProductSections.supports_disable());
        assert!(!SectionKey::ThemeSections.supports_disable());
        assert!(SectionKey::Footer.supports_disable());
        assert!(SectionKey::Popup.supports_disable());
    }

    #[test]
    fn all_keys_are_distinct() {
        for (i, a) in SectionKey::ALL.iter().enumerate() {
            for b in &SectionKey::ALL[i + 1..] {
                assert_ne!(a.as_str(), b.as_str());
            }
        }
    }
}
