pub mod api_client;
pub mod error;
pub mod record_api;

pub use api_client::ApiClient;
pub use error::ApiError;
pub use record_api::{AuthApi, EmployeeSearchApi, RecordApi};
