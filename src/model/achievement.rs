use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementId {
    CookieBeginner,
    CookieEnthusiast,
    MasterBaker,
    QuickClicker,
    InvestmentMaster,
    UpgradeCollector,
    UltimateTycoon,
    RapidTapper,
}

impl AchievementId {
    pub const ALL: [AchievementId; 8] = [
        Self::CookieBeginner,
        Self::CookieEnthusiast,
        Self::MasterBaker,
        Self::QuickClicker,
        Self::InvestmentMaster,
        Self::UpgradeCollector,
        Self::UltimateTycoon,
        Self::RapidTapper,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::CookieBeginner => "Cookie Beginner",
            Self::CookieEnthusiast => "Cookie Enthusiast",
            Self::MasterBaker => "Master Baker",
            Self::QuickClicker => "Quick Clicker",
            Self::InvestmentMaster => "Investment Master",
            Self::UpgradeCollector => "Upgrade Collector",
            Self::UltimateTycoon => "Ultimate Tycoon",
            Self::RapidTapper => "Rapid Tapper",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::CookieBeginner => "Earn 100 cookies.",
            Self::CookieEnthusiast => "Earn 10,000 cookies.",
            Self::MasterBaker => "Earn 1,000,000 cookies.",
            Self::QuickClicker => "Reach 100 cookies per second.",
            Self::InvestmentMaster => "Own 10 of every item type.",
            Self::UpgradeCollector => "Purchase all available upgrades.",
            Self::UltimateTycoon => "Earn 10 billion cookies.",
            Self::RapidTapper => "Tap the cookie 100 times in under 10 seconds.",
        }
    }
}
