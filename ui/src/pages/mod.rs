pub mod admin_dashboard;
pub mod not_found;

pub use admin_dashboard::{AdminDashboard, AdminDashboardPage};
pub use not_found::NotFoundPage;
