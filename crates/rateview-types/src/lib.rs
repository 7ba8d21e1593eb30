pub mod domain;
pub mod error;
pub mod outcome;
pub mod update;

pub use domain::*;
pub use error::{FailureReason, FormatFailure};
pub use outcome::Outcome;
pub use update::{Update, UpdateCause};
