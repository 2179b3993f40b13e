pub mod breaks;
pub mod config;
pub mod detect;
pub mod segment;

pub use breaks::{BreakKind, ExpectationBreak};
pub use config::{ClassifierConfig, ClassifyError, MarkerRule};
pub use detect::{BreakClassifier, ContentKind};
