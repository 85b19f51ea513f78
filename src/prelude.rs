//! Prelude module - common imports for Outcome-based code
//!
//! Import this module to get all common types and traits:
//! ```rust
//! use railway::prelude::*;
//! ```

// Re-export functional utilities
pub use itertools::Itertools;
pub use tap::{Pipe, Tap};

// Re-export error types
pub use railway_core::{Error, Fallible, Raised, Throwable};

// Re-export the algebra and its extension traits
pub use railway_core::{
    Failure, IntoOutcome, OptionExt, Outcome, OutcomeExt, Success,
};
