mod achievements;
mod clock;
mod engine;
mod pricing;
mod state;
mod tap_window;
mod wallet;

pub use achievements::{AchievementContext, AchievementEvaluator};
pub use clock::{Clock, ClockEvent, FiredEvent};
pub use engine::{EconomyEngine, TimedReversal};
pub use pricing::PricingModel;
pub use state::GameState;
pub use tap_window::TapWindow;
pub use wallet::Wallet;
