pub mod role;

pub use crate::domain::ValidationError;
pub use role::Role;
