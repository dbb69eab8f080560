//! Concrete section shapes
//!
//! One typed struct per section of the page-configuration document.

mod chrome;
mod commerce;
mod hero;
mod menus;
mod showcase;
mod social;
mod stats;

pub use chrome::{BannerSettings, ButtonColors, ContactInfo, FooterMenuItem, FooterSection, GlobalSettings};
pub use commerce::{
    ProductDisplayType, ProductRef, ProductSection, ThemeDisplayType, ThemeSection, ThemeType,
};
pub use hero::{HeroButton, HeroSection};
pub use menus::{
    BarPosition, ButtonCorner, CategoryItem, CategoryMenuSection, LandingDisplay, LandingMenuBarSection,
    LandingMenuItem, LandingPosition, ProductMenuBarSection, ProductMenuItem, TopMenuItem,
    TopMenuSection, WelcomeMessage,
};
pub use showcase::{
    CalloutSection, CruiseSearchSection, PopupKind, PopupSection, ProductListSection,
    PromotionBannerSection, ShowcaseSection,
};
pub use social::{
    ButtonSize, SocialButton, SocialButtonKind, SocialButtonsSection, SocialLayout,
    VideoBannerSection,
};
pub use stats::{CardColor, CompanyStatsSection, CounterCard, StatCard};
