//! The Default Schema
//!
//! A single, structurally complete configuration document covering every
//! section type with concrete defaults. It is the merge target of the
//! reconciler and the fallback for any field absent from persisted data:
//! any field reachable from a persisted document must have a corresponding
//! default path here.

use once_cell::sync::Lazy;

use crate::document::PageConfig;
use crate::id::ItemId;
use crate::section_key::SectionKey;
use crate::sections::{
    BannerSettings, BarPosition, ButtonColors, ButtonSize, CalloutSection, CardColor,
    CategoryItem, CategoryMenuSection, CompanyStatsSection, ContactInfo, CruiseSearchSection,
    FooterMenuItem, FooterSection, GlobalSettings, HeroButton, HeroSection, LandingDisplay,
    LandingMenuBarSection, LandingMenuItem, LandingPosition, PopupKind, PopupSection,
    ProductListSection, ProductMenuBarSection, ProductMenuItem, PromotionBannerSection,
    ShowcaseSection, SocialButton, SocialButtonKind, SocialButtonsSection, SocialLayout, StatCard,
    CounterCard, TopMenuItem, TopMenuSection, VideoBannerSection, WelcomeMessage,
};

static DEFAULT_SCHEMA: Lazy<PageConfig> = Lazy::new(build_default_schema);

/// The complete Default Schema document
#[must_use]
pub fn default_schema() -> &'static PageConfig {
    &DEFAULT_SCHEMA
}

impl Default for PageConfig {
    fn default() -> Self {
        build_default_schema()
    }
}

fn hero_button(text: &str, link: &str) -> HeroButton {
    HeroButton {
        text: text.to_string(),
        link: link.to_string(),
        background_color: Some("#ffffff".to_string()),
        text_color: Some("#1e40af".to_string()),
    }
}

#[allow(clippy::too_many_lines)]
fn build_default_schema() -> PageConfig {
    PageConfig {
        hero: HeroSection {
            video_url: "/videos/hero-video.mp4".to_string(),
            logo_url: Some("/images/cruise-logo.png".to_string()),
            title: "Cruisedot AI Genie".to_string(),
            subtitle: "From planning to sailing,\na special cruise voyage with AI at your side"
                .to_string(),
            buttons: vec![
                hero_button("Start now", "/login"),
                hero_button("Join the live broadcast", "#live-broadcast"),
                hero_button("Browse products", "#products"),
            ],
        },
        social_buttons: SocialButtonsSection {
            enabled: true,
            layout: SocialLayout::Horizontal,
            buttons: vec![
                SocialButton {
                    enabled: true,
                    kind: SocialButtonKind::Kakao,
                    text: "KakaoTalk consultation".to_string(),
                    link: String::new(),
                    size: ButtonSize::Medium,
                    icon: None,
                    background_color: Some("#FEE500".to_string()),
                    text_color: Some("#000000".to_string()),
                },
                SocialButton {
                    enabled: true,
                    kind: SocialButtonKind::Youtube,
                    text: "Subscribe on YouTube".to_string(),
                    link: "https://www.youtube.com/@cruisedot".to_string(),
                    size: ButtonSize::Medium,
                    icon: None,
                    background_color: Some("#FF0000".to_string()),
                    text_color: Some("#FFFFFF".to_string()),
                },
            ],
        },
        video_banner: VideoBannerSection {
            enabled: true,
            video_url: "/videos/cruise-showcase-video.mp4".to_string(),
            title: "Every moment of cruise travel".to_string(),
            link: "/products".to_string(),
        },
        company_stats: CompanyStatsSection {
            enabled: true,
            title: "Cruisedot's experience and trust".to_string(),
            subtitle: "Years of expertise delivering the best service to our customers"
                .to_string(),
            satisfaction_score: 4.8,
            top_row_cards: vec![
                StatCard {
                    icon: "👨‍💼".to_string(),
                    value: "67 voyages".to_string(),
                    description: "cruise trips taken by our consultation managers".to_string(),
                },
                StatCard {
                    icon: "✈️".to_string(),
                    value: "11+ years".to_string(),
                    description: "leading escorted cruise packages".to_string(),
                },
                StatCard {
                    icon: "🚢".to_string(),
                    value: "11+ years".to_string(),
                    description: "specializing in cruises from Korea".to_string(),
                },
                StatCard {
                    icon: "🏢".to_string(),
                    value: "8+ years".to_string(),
                    description: "operating as a licensed travel agency".to_string(),
                },
            ],
            bottom_row_cards: vec![
                CounterCard {
                    icon: "📊".to_string(),
                    value: "102".to_string(),
                    description: "members planning a cruise from this page".to_string(),
                    bg_color: CardColor::Blue,
                    auto_increment: true,
                    increment_interval: Some(3),
                    increment_amount: Some(3),
                },
                CounterCard {
                    icon: "💬".to_string(),
                    value: "13212".to_string(),
                    description: "cruise inquiries answered".to_string(),
                    bg_color: CardColor::Yellow,
                    auto_increment: true,
                    increment_interval: Some(5),
                    increment_amount: Some(9),
                },
                CounterCard {
                    icon: "🎉".to_string(),
                    value: "3217".to_string(),
                    description: "travelers sent off happy".to_string(),
                    bg_color: CardColor::Green,
                    auto_increment: false,
                    increment_interval: None,
                    increment_amount: None,
                },
            ],
        },
        cruise_search: CruiseSearchSection {
            enabled: true,
            title: "Search cruise products".to_string(),
        },
        review_section: CalloutSection {
            enabled: true,
            title: "⭐ Cruise reviews".to_string(),
            description: "Real reviews from travelers fresh off the ship".to_string(),
            link_text: "See more reviews →".to_string(),
            link_url: "/community".to_string(),
        },
        community_section: CalloutSection {
            enabled: true,
            title: "💬 The Cruisedot community".to_string(),
            description: "Share tips and plans with fellow cruise travelers".to_string(),
            link_text: "Browse the community".to_string(),
            link_url: "/community".to_string(),
        },
        youtube_shorts: ShowcaseSection {
            enabled: true,
            title: "🎬 Cruisedot Genie TV — Shorts".to_string(),
            description: "Every moment of cruise travel, in Shorts".to_string(),
        },
        youtube_videos: ShowcaseSection {
            enabled: true,
            title: "📺 Cruisedot Genie TV — Videos".to_string(),
            description: "Special cruise stories in full length".to_string(),
        },
        youtube_live: ShowcaseSection {
            enabled: true,
            title: "📡 Live broadcast".to_string(),
            description: "Right now, live with the Cruisedot Genie".to_string(),
        },
        product_list: ProductListSection { enabled: true },
        product_sections: Vec::new(),
        theme_sections: Vec::new(),
        category_menu: CategoryMenuSection {
            enabled: true,
            categories: vec![
                CategoryItem {
                    id: ItemId::from_raw("1"),
                    enabled: true,
                    icon: "🎯".to_string(),
                    text: "Activities".to_string(),
                    page_name: "ActivityPage".to_string(),
                    url_slug: "/category/activity".to_string(),
                    order: 1,
                },
                CategoryItem {
                    id: ItemId::from_raw("2"),
                    enabled: true,
                    icon: "📚".to_string(),
                    text: "Classes".to_string(),
                    page_name: "ClassPage".to_string(),
                    url_slug: "/category/class".to_string(),
                    order: 2,
                },
                CategoryItem {
                    id: ItemId::from_raw("3"),
                    enabled: true,
                    icon: "🎫".to_string(),
                    text: "Tickets".to_string(),
                    page_name: "TicketPage".to_string(),
                    url_slug: "/category/ticket".to_string(),
                    order: 3,
                },
            ],
        },
        top_menu: TopMenuSection {
            enabled: true,
            logo_url: Some("/images/cruise-logo.png".to_string()),
            logo_link: Some("/".to_string()),
            welcome_message: WelcomeMessage {
                enabled: true,
                text: "Welcome, {name}!".to_string(),
                name_color: Some("#3b82f6".to_string()),
                text_color: Some("#1f2937".to_string()),
            },
            menu_items: vec![
                TopMenuItem {
                    id: ItemId::from_raw("1"),
                    enabled: true,
                    text: "Community".to_string(),
                    url_slug: "/community".to_string(),
                    order: 1,
                    is_button: true,
                    button_color: Some("red-600".to_string()),
                },
                TopMenuItem {
                    id: ItemId::from_raw("2"),
                    enabled: true,
                    text: "My info".to_string(),
                    url_slug: "/community/my-info".to_string(),
                    order: 2,
                    is_button: true,
                    button_color: Some("blue-600".to_string()),
                },
                TopMenuItem {
                    id: ItemId::from_raw("3"),
                    enabled: true,
                    text: "Sign in".to_string(),
                    url_slug: "/community/login".to_string(),
                    order: 3,
                    is_button: true,
                    button_color: Some("blue-600".to_string()),
                },
                TopMenuItem {
                    id: ItemId::from_raw("4"),
                    enabled: true,
                    text: "Sign up".to_string(),
                    url_slug: "/signup".to_string(),
                    order: 4,
                    is_button: false,
                    button_color: None,
                },
            ],
        },
        footer: FooterSection {
            enabled: true,
            company_name: "Cruisedot".to_string(),
            company_info: "Company: Cruisedot | Registration no. 714-57-00419 | \
                           Mail-order business no. 2025-0320 | Tourism business no. 2025-000004"
                .to_string(),
            copyright: "Copyright © Cruisedot. All Rights Reserved.".to_string(),
            menu_items: vec![
                FooterMenuItem {
                    id: ItemId::from_raw("1"),
                    enabled: true,
                    text: "Notices".to_string(),
                    url_slug: "/support/notice".to_string(),
                    order: 1,
                    is_highlight: false,
                },
                FooterMenuItem {
                    id: ItemId::from_raw("2"),
                    enabled: true,
                    text: "Terms of service".to_string(),
                    url_slug: "/terms/0".to_string(),
                    order: 2,
                    is_highlight: false,
                },
                FooterMenuItem {
                    id: ItemId::from_raw("3"),
                    enabled: true,
                    text: "Privacy policy".to_string(),
                    url_slug: "/terms/1".to_string(),
                    order: 3,
                    is_highlight: true,
                },
                FooterMenuItem {
                    id: ItemId::from_raw("4"),
                    enabled: true,
                    text: "Travel insurance".to_string(),
                    url_slug: "/insurance".to_string(),
                    order: 4,
                    is_highlight: false,
                },
            ],
            contact_info: ContactInfo {
                phone: Some("010-0000-0000".to_string()),
                email: Some("hello@cruisedot.example".to_string()),
                kakao_link: Some("https://pf.kakao.com/cruisedot".to_string()),
                business_hours: Some("9am – 5pm (closed on holidays)".to_string()),
            },
        },
        global_settings: GlobalSettings {
            banners: BannerSettings {
                hero_banner: Some(String::new()),
                promotion_banner: Some(String::new()),
                category_banner: Some(String::new()),
            },
            checkmark_icon: "✓".to_string(),
            button_colors: ButtonColors {
                primary: "#1e40af".to_string(),
                primary_text: "#ffffff".to_string(),
                secondary: "#6b7280".to_string(),
                secondary_text: "#ffffff".to_string(),
            },
        },
        product_menu_bar: ProductMenuBarSection {
            enabled: true,
            position: BarPosition::Bottom,
            menu_items: vec![
                ProductMenuItem {
                    id: ItemId::from_raw("1"),
                    enabled: true,
                    text: "Home".to_string(),
                    icon: Some("🏠".to_string()),
                    url_slug: "/".to_string(),
                    order: 1,
                },
                ProductMenuItem {
                    id: ItemId::from_raw("2"),
                    enabled: true,
                    text: "Products".to_string(),
                    icon: Some("🛳️".to_string()),
                    url_slug: "/products".to_string(),
                    order: 2,
                },
                ProductMenuItem {
                    id: ItemId::from_raw("3"),
                    enabled: true,
                    text: "Community".to_string(),
                    icon: Some("💬".to_string()),
                    url_slug: "/community".to_string(),
                    order: 3,
                },
                ProductMenuItem {
                    id: ItemId::from_raw("4"),
                    enabled: true,
                    text: "My info".to_string(),
                    icon: Some("👤".to_string()),
                    url_slug: "/community/my-info".to_string(),
                    order: 4,
                },
            ],
        },
        landing_page_menu_bar: LandingMenuBarSection {
            enabled: false,
            position: LandingPosition::Top,
            display_type: LandingDisplay::Full,
            button_position: Some(crate::sections::ButtonCorner::RightTop),
            menu_items: vec![
                LandingMenuItem {
                    id: ItemId::from_raw("1"),
                    enabled: true,
                    text: "Home".to_string(),
                    url_slug: "/".to_string(),
                    order: 1,
                },
                LandingMenuItem {
                    id: ItemId::from_raw("2"),
                    enabled: true,
                    text: "Products".to_string(),
                    url_slug: "/products".to_string(),
                    order: 2,
                },
                LandingMenuItem {
                    id: ItemId::from_raw("3"),
                    enabled: true,
                    text: "Community".to_string(),
                    url_slug: "/community".to_string(),
                    order: 3,
                },
            ],
        },
        promotion_banner: PromotionBannerSection { enabled: true },
        section_order: vec![
            SectionKey::TopMenu,
            SectionKey::Hero,
            SectionKey::SocialButtons,
            SectionKey::VideoBanner,
            SectionKey::CompanyStats,
            SectionKey::CategoryMenu,
            SectionKey::CruiseSearch,
            SectionKey::ReviewSection,
            SectionKey::ProductSections,
            SectionKey::ThemeSections,
            SectionKey::YoutubeShorts,
            SectionKey::YoutubeVideos,
            SectionKey::YoutubeLive,
            SectionKey::ProductList,
            SectionKey::PromotionBanner,
            SectionKey::CommunitySection,
            SectionKey::ProductMenuBar,
            SectionKey::LandingPageMenuBar,
            SectionKey::Footer,
        ],
        popup: PopupSection {
            enabled: false,
            kind: PopupKind::Image,
            image_url: String::new(),
            title: String::new(),
            content: String::new(),
            link: String::new(),
            show_close_button: true,
        },
    }
}
