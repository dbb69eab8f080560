//! Document root
//!
//! Provides [`PageConfig`], the full page-configuration tree persisted and
//! loaded as one unit, and [`DocumentField`], the tagged union of its
//! top-level fields.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::section_key::SectionKey;
use crate::sections::{
    CalloutSection, CategoryMenuSection, CompanyStatsSection, CruiseSearchSection, FooterSection,
    GlobalSettings, HeroSection, LandingMenuBarSection, PopupSection, ProductListSection,
    ProductMenuBarSection, ProductSection, PromotionBannerSection, ShowcaseSection,
    SocialButtonsSection, ThemeSection, TopMenuSection, VideoBannerSection,
};

/// The full page-configuration document
///
/// A fixed set of named sections plus the section-order registry. Created
/// once as the Default Schema, mutated in place for the duration of an
/// editing session, persisted wholesale on explicit save; superseded by the
/// next load.
///
/// Wire form: one JSON object whose top-level keys are exactly the section
/// names plus `sectionOrder`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageConfig {
    /// Hero banner (structural)
    pub hero: HeroSection,
    /// Social contact buttons
    pub social_buttons: SocialButtonsSection,
    /// Full-width video banner
    pub video_banner: VideoBannerSection,
    /// Company statistics cards
    pub company_stats: CompanyStatsSection,
    /// Cruise product search
    pub cruise_search: CruiseSearchSection,
    /// Customer review callout
    pub review_section: CalloutSection,
    /// Community callout
    pub community_section: CalloutSection,
    /// YouTube Shorts strip
    pub youtube_shorts: ShowcaseSection,
    /// YouTube video strip
    pub youtube_videos: ShowcaseSection,
    /// YouTube live embed
    pub youtube_live: ShowcaseSection,
    /// Plain product list
    pub product_list: ProductListSection,
    /// Product blocks (one rendered unit per entry)
    pub product_sections: Vec<ProductSection>,
    /// Theme blocks (one rendered unit per entry)
    pub theme_sections: Vec<ThemeSection>,
    /// Category menu grid
    pub category_menu: CategoryMenuSection,
    /// Fixed header menu
    pub top_menu: TopMenuSection,
    /// Page footer
    pub footer: FooterSection,
    /// Store-wide style settings (structural)
    pub global_settings: GlobalSettings,
    /// Product menu bar
    pub product_menu_bar: ProductMenuBarSection,
    /// Landing-page menu bar
    pub landing_page_menu_bar: LandingMenuBarSection,
    /// Promotion banner carousel
    pub promotion_banner: PromotionBannerSection,
    /// Section-order registry: rendering order and presence, not data
    pub section_order: Vec<SectionKey>,
    /// Popup overlay
    pub popup: PopupSection,
}

impl PageConfig {
    /// Whether the section behind `key` currently renders
    ///
    /// Structural sections (hero, the block lists) are always present and
    /// report `true`; their visibility is governed by the registry alone.
    #[must_use]
    pub fn is_enabled(&self, key: SectionKey) -> bool {
        match self.enabled_flag(key) {
            Some(enabled) => enabled,
            None => true,
        }
    }

    /// The `enabled` flag behind `key`, if the section carries one
    #[must_use]
    pub fn enabled_flag(&self, key: SectionKey) -> Option<bool> {
        match key {
            SectionKey::Hero | SectionKey::ProductSections | SectionKey::ThemeSections => None,
            SectionKey::TopMenu => Some(self.top_menu.enabled),
            SectionKey::SocialButtons | SectionKey::SocialVideo => Some(self.social_buttons.enabled),
            SectionKey::VideoBanner => Some(self.video_banner.enabled),
            SectionKey::CompanyStats => Some(self.company_stats.enabled),
            SectionKey::CategoryMenu => Some(self.category_menu.enabled),
            SectionKey::CruiseSearch => Some(self.cruise_search.enabled),
            SectionKey::ReviewSection => Some(self.review_section.enabled),
            SectionKey::YoutubeShorts => Some(self.youtube_shorts.enabled),
            SectionKey::YoutubeVideos => Some(self.youtube_videos.enabled),
            SectionKey::YoutubeLive => Some(self.youtube_live.enabled),
            SectionKey::ProductList => Some(self.product_list.enabled),
            SectionKey::PromotionBanner => Some(self.promotion_banner.enabled),
            SectionKey::CommunitySection => Some(self.community_section.enabled),
            SectionKey::ProductMenuBar => Some(self.product_menu_bar.enabled),
            SectionKey::LandingPageMenuBar => Some(self.landing_page_menu_bar.enabled),
            SectionKey::Footer => Some(self.footer.enabled),
            SectionKey::Popup => Some(self.popup.enabled),
        }
    }

    /// Mutable access to the `enabled` flag behind `key`
    ///
    /// `None` for structural sections. Both occurrences of a repeated key
    /// resolve here to the same flag: a key, not a position, is the true
    /// section identity.
    pub fn enabled_mut(&mut self, key: SectionKey) -> Option<&mut bool> {
        match key {
            SectionKey::Hero | SectionKey::ProductSections | SectionKey::ThemeSections => None,
            SectionKey::TopMenu => Some(&mut self.top_menu.enabled),
            SectionKey::SocialButtons | SectionKey::SocialVideo => {
                Some(&mut self.social_buttons.enabled)
            }
            SectionKey::VideoBanner => Some(&mut self.video_banner.enabled),
            SectionKey::CompanyStats => Some(&mut self.company_stats.enabled),
            SectionKey::CategoryMenu => Some(&mut self.category_menu.enabled),
            SectionKey::CruiseSearch => Some(&mut self.cruise_search.enabled),
            SectionKey::ReviewSection => Some(&mut self.review_section.enabled),
            SectionKey::YoutubeShorts => Some(&mut self.youtube_shorts.enabled),
            SectionKey::YoutubeVideos => Some(&mut self.youtube_videos.enabled),
            SectionKey::YoutubeLive => Some(&mut self.youtube_live.enabled),
            SectionKey::ProductList => Some(&mut self.product_list.enabled),
            SectionKey::PromotionBanner => Some(&mut self.promotion_banner.enabled),
            SectionKey::CommunitySection => Some(&mut self.community_section.enabled),
            SectionKey::ProductMenuBar => Some(&mut self.product_menu_bar.enabled),
            SectionKey::LandingPageMenuBar => Some(&mut self.landing_page_menu_bar.enabled),
            SectionKey::Footer => Some(&mut self.footer.enabled),
            SectionKey::Popup => Some(&mut self.popup.enabled),
        }
    }

    /// Serialize one top-level field to a JSON tree
    ///
    /// # Errors
    /// Returns error if serialization fails (practically unreachable for
    /// these shapes)
    pub fn field_value(&self, field: DocumentField) -> Result<JsonValue, serde_json::Error> {
        match field {
            DocumentField::Hero => serde_json::to_value(&self.hero),
            DocumentField::SocialButtons => serde_json::to_value(&self.social_buttons),
            DocumentField::VideoBanner => serde_json::to_value(&self.video_banner),
            DocumentField::CompanyStats => serde_json::to_value(&self.company_stats),
            DocumentField::CruiseSearch => serde_json::to_value(&self.cruise_search),
            DocumentField::ReviewSection => serde_json::to_value(&self.review_section),
            DocumentField::CommunitySection => serde_json::to_value(&self.community_section),
            DocumentField::YoutubeShorts => serde_json::to_value(&self.youtube_shorts),
            DocumentField::YoutubeVideos => serde_json::to_value(&self.youtube_videos),
            DocumentField::YoutubeLive => serde_json::to_value(&self.youtube_live),
            DocumentField::ProductList => serde_json::to_value(&self.product_list),
            DocumentField::ProductSections => serde_json::to_value(&self.product_sections),
            DocumentField::ThemeSections => serde_json::to_value(&self.theme_sections),
            DocumentField::CategoryMenu => serde_json::to_value(&self.category_menu),
            DocumentField::TopMenu => serde_json::to_value(&self.top_menu),
            DocumentField::Footer => serde_json::to_value(&self.footer),
            DocumentField::GlobalSettings => serde_json::to_value(&self.global_settings),
            DocumentField::ProductMenuBar => serde_json::to_value(&self.product_menu_bar),
            DocumentField::LandingPageMenuBar => serde_json::to_value(&self.landing_page_menu_bar),
            DocumentField::PromotionBanner => serde_json::to_value(&self.promotion_banner),
            DocumentField::SectionOrder => serde_json::to_value(&self.section_order),
            DocumentField::Popup => serde_json::to_value(&self.popup),
        }
    }

    /// Replace one top-level field from a JSON tree
    ///
    /// The tree must decode into the field's shape; on decode failure the
    /// document is unchanged.
    ///
    /// # Errors
    /// Returns the decode error for a tree that does not match the field
    pub fn set_field_value(
        &mut self,
        field: DocumentField,
        value: JsonValue,
    ) -> Result<(), serde_json::Error> {
        match field {
            DocumentField::Hero => self.hero = serde_json::from_value(value)?,
            DocumentField::SocialButtons => self.social_buttons = serde_json::from_value(value)?,
            DocumentField::VideoBanner => self.video_banner = serde_json::from_value(value)?,
            DocumentField::CompanyStats => self.company_stats = serde_json::from_value(value)?,
            DocumentField::CruiseSearch => self.cruise_search = serde_json::from_value(value)?,
            DocumentField::ReviewSection => self.review_section = serde_json::from_value(value)?,
            DocumentField::CommunitySection => {
                self.community_section = serde_json::from_value(value)?;
            }
            DocumentField::YoutubeShorts => self.youtube_shorts = serde_json::from_value(value)?,
            DocumentField::YoutubeVideos => self.youtube_videos = serde_json::from_value(value)?,
            DocumentField::YoutubeLive => self.youtube_live = serde_json::from_value(value)?,
            DocumentField::ProductList => self.product_list = serde_json::from_value(value)?,
            DocumentField::ProductSections => {
                self.product_sections = serde_json::from_value(value)?;
            }
            DocumentField::ThemeSections => self.theme_sections = serde_json::from_value(value)?,
            DocumentField::CategoryMenu => self.category_menu = serde_json::from_value(value)?,
            DocumentField::TopMenu => self.top_menu = serde_json::from_value(value)?,
            DocumentField::Footer => self.footer = serde_json::from_value(value)?,
            DocumentField::GlobalSettings => self.global_settings = serde_json::from_value(value)?,
            DocumentField::ProductMenuBar => {
                self.product_menu_bar = serde_json::from_value(value)?;
            }
            DocumentField::LandingPageMenuBar => {
                self.landing_page_menu_bar = serde_json::from_value(value)?;
            }
            DocumentField::PromotionBanner => {
                self.promotion_banner = serde_json::from_value(value)?;
            }
            DocumentField::SectionOrder => self.section_order = serde_json::from_value(value)?,
            DocumentField::Popup => self.popup = serde_json::from_value(value)?,
        }
        Ok(())
    }
}

/// Top-level field of the document
///
/// One variant per section plus the section-order registry. Replaces the
/// original implementation's string-keyed field switch with an exhaustively
/// checked union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentField {
    /// `hero`
    Hero,
    /// `socialButtons`
    SocialButtons,
    /// `videoBanner`
    VideoBanner,
    /// `companyStats`
    CompanyStats,
    /// `cruiseSearch`
    CruiseSearch,
    /// `reviewSection`
    ReviewSection,
    /// `communitySection`
    CommunitySection,
    /// `youtubeShorts`
    YoutubeShorts,
    /// `youtubeVideos`
    YoutubeVideos,
    /// `youtubeLive`
    YoutubeLive,
    /// `productList`
    ProductList,
    /// `productSections`
    ProductSections,
    /// `themeSections`
    ThemeSections,
    /// `categoryMenu`
    CategoryMenu,
    /// `topMenu`
    TopMenu,
    /// `footer`
    Footer,
    /// `globalSettings`
    GlobalSettings,
    /// `productMenuBar`
    ProductMenuBar,
    /// `landingPageMenuBar`
    LandingPageMenuBar,
    /// `promotionBanner`
    PromotionBanner,
    /// `sectionOrder`
    SectionOrder,
    /// `popup`
    Popup,
}

impl DocumentField {
    /// Every top-level field, in document order
    pub const ALL: [DocumentField; 22] = [
        DocumentField::Hero,
        DocumentField::SocialButtons,
        DocumentField::VideoBanner,
        DocumentField::CompanyStats,
        DocumentField::CruiseSearch,
        DocumentField::ReviewSection,
        DocumentField::CommunitySection,
        DocumentField::YoutubeShorts,
        DocumentField::YoutubeVideos,
        DocumentField::YoutubeLive,
        DocumentField::ProductList,
        DocumentField::ProductSections,
        DocumentField::ThemeSections,
        DocumentField::CategoryMenu,
        DocumentField::TopMenu,
        DocumentField::Footer,
        DocumentField::GlobalSettings,
        DocumentField::ProductMenuBar,
        DocumentField::LandingPageMenuBar,
        DocumentField::PromotionBanner,
        DocumentField::SectionOrder,
        DocumentField::Popup,
    ];

    /// Wire/field name (camelCase)
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::SocialButtons => "socialButtons",
            Self::VideoBanner => "videoBanner",
            Self::CompanyStats => "companyStats",
            Self::CruiseSearch => "cruiseSearch",
            Self::ReviewSection => "reviewSection",
            Self::CommunitySection => "communitySection",
            Self::YoutubeShorts => "youtubeShorts",
            Self::YoutubeVideos => "youtubeVideos",
            Self::YoutubeLive => "youtubeLive",
            Self::ProductList => "productList",
            Self::ProductSections => "productSections",
            Self::ThemeSections => "themeSections",
            Self::CategoryMenu => "categoryMenu",
            Self::TopMenu => "topMenu",
            Self::Footer => "footer",
            Self::GlobalSettings => "globalSettings",
            Self::ProductMenuBar => "productMenuBar",
            Self::LandingPageMenuBar => "landingPageMenuBar",
            Self::PromotionBanner => "promotionBanner",
            Self::SectionOrder => "sectionOrder",
            Self::Popup => "popup",
        }
    }

    /// Resolve a field name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_schema;
    use serde_json::json;

    #[test]
    fn field_name_roundtrip() {
        for field in DocumentField::ALL {
            assert_eq!(DocumentField::from_name(field.name()), Some(field));
        }
        assert_eq!(DocumentField::from_name("nope"), None);
    }

    #[test]
    fn wire_keys_match_document_fields_exactly() {
        let value = serde_json::to_value(default_schema()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), DocumentField::ALL.len());
        for field in DocumentField::ALL {
            assert!(object.contains_key(field.name()), "missing {}", field.name());
        }
    }

    #[test]
    fn field_value_set_field_value_roundtrip() {
        let mut doc = default_schema().clone();
        for field in DocumentField::ALL {
            let value = doc.field_value(field).unwrap();
            doc.set_field_value(field, value).unwrap();
        }
        assert_eq!(&doc, default_schema());
    }

    #[test]
    fn set_field_value_rejects_wrong_shape() {
        let mut doc = default_schema().clone();
        let before = doc.clone();
        let result = doc.set_field_value(DocumentField::Footer, json!([1, 2, 3]));
        assert!(result.is_err());
        assert_eq!(doc, before);
    }

    #[test]
    fn enabled_flag_none_only_for_structural_sections() {
        let doc = default_schema().clone();
        for key in SectionKey::ALL {
            let flag = doc.enabled_flag(key);
            assert_eq!(flag.is_none(), !key.supports_disable(), "key {key}");
        }
    }

    #[test]
    fn repeated_key_occurrences_share_one_flag() {
        let mut doc = default_schema().clone();
        doc.section_order = vec![SectionKey::Footer, SectionKey::Hero, SectionKey::Footer];

        *doc.enabled_mut(SectionKey::Footer).unwrap() = false;

        // Both registry occurrences read the same section data.
        for key in &doc.section_order {
            if *key == SectionKey::Footer {
                assert!(!doc.is_enabled(*key));
            }
        }
    }

    #[test]
    fn social_video_toggles_social_buttons() {
        let mut doc = default_schema().clone();
        *doc.enabled_mut(SectionKey::SocialVideo).unwrap() = false;
        assert!(!doc.social_buttons.enabled);
        assert!(!doc.is_enabled(SectionKey::SocialButtons));
    }
}
