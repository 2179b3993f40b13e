pub mod config;
pub mod constraints;
pub mod score;
pub mod validate;

pub use config::{PatternGroup, ValidateError, ValidatorConfig};
pub use constraints::{Constraints, Style};
pub use validate::{ValidationOutcome, Validator};
