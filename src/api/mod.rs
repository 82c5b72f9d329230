pub mod error;
pub mod models;

pub use error::{PlayerError, StoreError};
pub use models::*;
