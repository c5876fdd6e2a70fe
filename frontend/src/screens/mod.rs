mod analytics;
mod dashboard;
mod deposit;
mod onboarding;
mod send;
mod swap;

pub use analytics::AnalyticsPanel;
pub use dashboard::DashboardScreen;
pub use deposit::DepositScreen;
pub use onboarding::OnboardingScreen;
pub use send::SendScreen;
pub use swap::SwapScreen;
