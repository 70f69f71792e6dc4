pub mod engine;
pub mod outcome;

pub use engine::{categorize, categorize_strict};
pub use outcome::Categorization;
