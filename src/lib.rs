#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

//! # Railway
//!
//! A closed Success/Failure [`Outcome`] type with a small combinator algebra
//! for Railway-Oriented Programming.
//!
//! This library re-exports the workspace crates for convenience. Most callers
//! only need the prelude:
//!
//! ```
//! use railway::prelude::*;
//!
//! let n = Outcome::<i32, &str>::success(5)
//!     .flat_map(|x| if x > 0 { Success(x) } else { Failure("neg") })
//!     .fold(|x| x, |_| -1);
//! assert_eq!(n, 5);
//! ```

pub use railway_core;
pub use railway_core::{Error, Failure, Fallible, Outcome, Raised, Success, Throwable};

pub mod prelude;
