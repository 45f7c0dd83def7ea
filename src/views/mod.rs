pub mod app;
pub mod shared;
pub mod login;
pub mod change_password;
pub mod dashboard;
pub mod employees;
pub mod contracts;

pub use app::render_app;
pub use login::render_login;
pub use change_password::render_change_password;
pub use dashboard::render_dashboard;
pub use employees::render_employees;
pub use contracts::render_contracts;
