//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use railway_ops::prelude::*;
//!
//! fn parse(raw: &str) -> Outcome<u16, String> {
//!     raw.parse::<u16>().map_err(|e| e.to_string()).into_outcome()
//! }
//!
//! let port = pipe!(success!("8080") => parse => stage::tee(|p: &u16| assert!(*p > 0)));
//! assert_eq!(port, Outcome::Success(8080));
//! ```

// Macros
pub use crate::{failure, pipe, success};

// Core types
#[cfg(feature = "std")]
pub use crate::types::Fault;
pub use crate::types::{Outcome, Rail, StageError};

// Traits
pub use crate::traits::{IntoOutcome, OptionExt, ResultExt, Verdict};

// Stage constructors
pub use crate::stage;

#[cfg(feature = "tracing")]
pub use crate::tracing_ext::{traced, TraceExt};
