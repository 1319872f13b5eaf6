mod assistant;
mod dashboard;
mod error;
mod landing;
mod login;
mod register;
mod scanner;
mod settings;
mod transactions;

pub use assistant::AssistantPage;
pub use dashboard::DashboardPage;
pub use error::ErrorPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use scanner::ScannerPage;
pub use settings::SettingsPage;
pub use transactions::TransactionsPage;
