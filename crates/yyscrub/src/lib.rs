//! Byte-level cleanup passes for Bison/Yacc grammar sources.
//!
//! Two transformations are offered, selected by [`Mode`]:
//!
//! - [`Mode::StripSemantics`] keeps the grammar verbatim but empties every
//!   top-level `{ ... }` action block, preserving its braces and line breaks.
//! - [`Mode::PurifyGrammar`] drops action blocks from the declarations
//!   section, then re-lays-out the rules section after the first `%%` so that
//!   two revisions of a grammar diff cleanly.
//!
//! None of the passes parse the grammar. They only react to a handful of
//! delimiter bytes, and a single quote escapes whatever byte follows it.
//!
//! ```rust
//! use yyscrub::{Mode, ScrubOptions, scrub};
//!
//! let out = scrub(Mode::StripSemantics, b"expr: NUM { $$ = $1; };", ScrubOptions::default())
//!     .unwrap();
//! assert_eq!(out, "expr: NUM {};");
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod macros;

mod error;
mod mode;
mod options;
mod purify;
mod reformat;
mod sink;
mod strip;
mod summary;
mod tracker;

#[cfg(test)]
mod tests;

pub use error::{Malformed, MalformedInput, ScrubError};
pub use mode::{Mode, scrub, scrub_into};
pub use options::ScrubOptions;
pub use purify::{Section, purify_grammar, scan_declarations};
pub use reformat::reformat_rules;
#[cfg(feature = "std")]
pub use sink::IoSink;
pub use sink::Sink;
pub use strip::strip_semantics;
pub use summary::ScanSummary;
pub use tracker::{Brace, BraceTracker};
