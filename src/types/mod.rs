//! The value types that travel along a rail.
//!
//! - [`Outcome`]: the tagged success/failure result every stage produces
//! - [`Fault`]: a caught panic on the failure track (requires `std`)
//! - [`NotAnOutcome`]: the misuse fault for untyped input (requires `std`)
//! - [`Rail`] / [`StageError`]: a stage-labelled pipeline and its annotated failure
//!
//! # Examples
//!
//! ```
//! use railway_ops::{Outcome, Rail};
//!
//! let out = Rail::start(2)
//!     .lift("square", |x: i32| x * x)
//!     .then("check", |x| if x > 3 { Outcome::success(x) } else { Outcome::failure("too small") })
//!     .into_outcome();
//!
//! assert_eq!(out, Outcome::Success(4));
//! ```

#[cfg(feature = "std")]
pub mod fault;
pub mod iter;
pub mod outcome;
pub mod rail;

#[cfg(feature = "std")]
pub use fault::*;
pub use outcome::*;
pub use rail::*;
