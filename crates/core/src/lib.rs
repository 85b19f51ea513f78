//! Core Outcome type for Railway-Oriented Programming.
//!
//! [`Outcome`] is a closed two-track sum: a value on the success track or an
//! error on the failure track. Combinators move values along a track, switch
//! tracks, or leave the railway entirely through `fold` and the `get_or_*`
//! family.
//!
//! ```
//! use railway_core::{Failure, Outcome, Success};
//!
//! fn parse(input: &str) -> Outcome<i32, String> {
//!     input.parse::<i32>().map_err(|e| e.to_string()).into()
//! }
//!
//! let total = parse("20")
//!     .zip(parse("22"))
//!     .map(|(a, b)| a + b)
//!     .on_failure(|e| eprintln!("bad input: {e}"));
//!
//! assert_eq!(total, Success(42));
//! assert!(matches!(parse("x"), Failure(_)));
//! ```

mod convert;
pub mod error;
pub mod ext;
mod outcome;
mod throwable;

pub use error::{Error, Fallible};
pub use ext::{IntoOutcome, OptionExt, OutcomeExt};
pub use outcome::Outcome;
pub use outcome::Outcome::{Failure, Success};
pub use throwable::{Raised, Throwable};
