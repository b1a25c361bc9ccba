//! Traits at the seams between stages and the rail.
//!
//! - [`IntoOutcome`]: normalization of already-tagged values onto the rail
//! - [`Verdict`]: how an observer's return value vetoes (or not) a rail
//! - [`ResultExt`] / [`OptionExt`]: bridges from std types
//!
//! # Examples
//!
//! ```
//! use railway_ops::traits::{IntoOutcome, Verdict};
//! use railway_ops::Outcome;
//!
//! let from_std: Outcome<i32, &str> = Err("bad").into_outcome();
//! assert_eq!(from_std, Outcome::Failure("bad"));
//!
//! assert_eq!(Verdict::<&str>::into_veto(()), None);
//! ```

pub mod into_outcome;
pub mod result_ext;
pub mod verdict;

pub use into_outcome::IntoOutcome;
pub use result_ext::{OptionExt, ResultExt};
pub use verdict::Verdict;
