// Utils compartidos

pub mod constants;
pub mod dates;
pub mod storage;
pub mod browser;

pub use constants::*;
pub use storage::LocalTokenStore;
