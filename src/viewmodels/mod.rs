pub mod record_list;
pub mod auth_viewmodel;
pub mod employee_search;

#[cfg(test)]
pub(crate) mod testing;

pub use record_list::{RecordListController, RemoveOutcome, SubmitError, SubmitOutcome};
pub use auth_viewmodel::{AuthError, AuthViewModel};
pub use employee_search::EmployeeSearch;
