//! runway-engine: balance projection, crunch detection, runway, and recommended actions.

pub mod actions;
pub mod balance;
pub mod forecast;
pub mod links;
pub mod series;

pub use actions::{generate_actions, ActionPriority, CashFlowAction};
pub use balance::{crunch_date, effective_balance, future_pending};
pub use forecast::{calculate_forecast, ForecastResult, Runway};
pub use links::{action_link, crunch_alert_link};
pub use series::{project_balance_series, BalancePoint};
