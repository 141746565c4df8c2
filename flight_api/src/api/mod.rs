mod error;
mod handlers;
pub mod mapping;
mod router;

pub use error::{ErrorMessage, LookupError};
pub use router::router;
