//! Reusable UI components.

mod card;
mod error_banner;
mod form;
mod info_field;
mod password_input;
mod spinner;
mod stat_card;
mod trend_chart;

pub use card::Card;
pub use error_banner::ErrorBanner;
pub use form::{bind_input, on_enter};
pub use info_field::InfoField;
pub use password_input::PasswordInput;
pub use spinner::Spinner;
pub use stat_card::StatCard;
pub use trend_chart::TrendChart;
