//! Railway-oriented pipeline combinators.
//!
//! A pipeline is a chain of stages. Each stage returns an [`Outcome`]: on
//! `Success` the value moves on to the next stage, on `Failure` every
//! remaining stage is skipped and the error arrives at the end of the chain
//! unchanged.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `railway_ops::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining with `>>`
//!
//! ```
//! use railway_ops::{stage, Outcome};
//!
//! fn inc(x: i32) -> Outcome<i32, &'static str> {
//!     Outcome::success(x + 1)
//! }
//!
//! fn reject_big(x: i32) -> Outcome<i32, &'static str> {
//!     if x > 2 { Outcome::failure("too big") } else { Outcome::success(x) }
//! }
//!
//! assert_eq!(Outcome::success(1) >> inc >> reject_big, Outcome::Success(2));
//! assert_eq!(Outcome::success(1) >> inc >> inc >> reject_big >> inc, Outcome::Failure("too big"));
//!
//! let described = Outcome::success(1) >> inc >> stage::lift(|x: i32| format!("got {x}"));
//! assert_eq!(described, Outcome::Success("got 2".to_string()));
//! ```
//!
//! ## Catching panics at the boundary
//!
//! Requires the `std` feature, which is on by default.
//!
//! ```
//! # #[cfg(feature = "std")]
//! # {
//! use railway_ops::{stage, Fault, Outcome};
//!
//! let out = Outcome::<i32, Fault>::success(1)
//!     >> stage::try_lift(|x: i32| -> i32 { if x == 1 { panic!("boom") } else { x } })
//!     >> stage::lift(|x: i32| x + 1);
//!
//! assert_eq!(out.unwrap_failure().message(), Some("boom"));
//! # }
//! ```
//!
//! ## Labelled rails
//!
//! ```
//! use railway_ops::{Outcome, Rail};
//!
//! let out = Rail::start(3)
//!     .lift("double", |x: i32| x * 2)
//!     .tee_or_fail("limit", |x| if *x > 5 { Err("over limit") } else { Ok(()) })
//!     .lift("never runs", |x| x + 1)
//!     .finish();
//!
//! let err = out.unwrap_failure();
//! assert_eq!(err.stage(), Some("limit"));
//! assert_eq!(err.completed(), ["double"]);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Outcome, Result and Option
pub mod convert;
/// Rail-building macros
pub mod macros;
/// Value-first combinators
pub mod ops;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Stage constructors for `>>` chains
pub mod stage;
/// Normalization and veto traits
pub mod traits;
/// Outcome, faults and the labelled Rail
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use traits::*;
#[cfg(feature = "std")]
pub use types::{Fault, NotAnOutcome};
pub use types::{Outcome, Rail, StageError, StageLedger};
