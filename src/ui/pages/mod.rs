pub mod dashboard;
pub mod listings;
pub mod settings;

pub use dashboard::DashboardPage;
pub use listings::ListingsPage;
pub use settings::SettingsPage;
