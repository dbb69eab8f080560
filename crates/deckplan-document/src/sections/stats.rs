//! Company-statistics section

use serde::{Deserialize, Serialize};

/// Company statistics cards block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyStatsSection {
    /// Whether the block renders
    pub enabled: bool,

    /// Block title
    pub title: String,

    /// Block subtitle
    pub subtitle: String,

    /// Displayed satisfaction score, e.g. 4.8
    pub satisfaction_score: f64,

    /// Static top-row cards
    pub top_row_cards: Vec<StatCard>,

    /// Bottom-row cards; may tick upward live
    pub bottom_row_cards: Vec<CounterCard>,
}

/// A static statistic card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    /// Emoji or image URL
    pub icon: String,

    /// Headline figure
    pub value: String,

    /// Caption under the figure
    pub description: String,
}

/// A counting statistic card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterCard {
    /// Emoji or image URL
    pub icon: String,

    /// Headline figure
    pub value: String,

    /// Caption under the figure
    pub description: String,

    /// Card background tint
    pub bg_color: CardColor,

    /// Tick the figure upward while displayed
    #[serde(default)]
    pub auto_increment: bool,

    /// Seconds between ticks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub increment_interval: Option<u32>,

    /// Amount added per tick
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub increment_amount: Option<u32>,
}

/// Background tint of a counter card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    /// Blue tint
    Blue,
    /// Yellow tint
    Yellow,
    /// Green tint
    Green,
}
