//! Brace depth and quote escaping, shared by every pass.
//!
//! A single quote escapes exactly the byte after it. The escape is not
//! matched against a closing quote and has no memory: every `'` arms it,
//! escaped or not. So `'{'` leaves depth untouched, and in `''{` the brace
//! is escaped by the second quote.

use crate::{Malformed, MalformedInput};

/// How a byte affects brace depth once escaping is taken into account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brace {
    /// An unescaped `{`.
    Open,
    /// An unescaped `}`.
    Close,
    /// Anything else, including escaped braces.
    Other,
}

/// Per-scan brace depth and one-byte escape flag.
///
/// Depth is signed: a stray `}` drives it negative and the scan carries on
/// desynchronized unless strict checking is enabled by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BraceTracker {
    depth: isize,
    escaped: bool,
}

impl BraceTracker {
    /// A tracker at depth 0 with no pending escape.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current nesting depth.
    #[must_use]
    pub fn depth(&self) -> isize {
        self.depth
    }

    /// Whether the next byte is escaped by a preceding quote.
    #[must_use]
    pub fn is_escaped(&self) -> bool {
        self.escaped
    }

    /// Classifies `byte` without changing any state.
    #[must_use]
    pub fn classify(&self, byte: u8) -> Brace {
        if self.escaped {
            return Brace::Other;
        }
        match byte {
            b'{' => Brace::Open,
            b'}' => Brace::Close,
            _ => Brace::Other,
        }
    }

    /// Enters a block and returns the new depth.
    pub fn open(&mut self) -> isize {
        self.depth += 1;
        self.depth
    }

    /// Leaves a block and returns the new depth.
    pub fn close(&mut self) -> isize {
        self.depth -= 1;
        self.depth
    }

    /// Updates the escape flag after `byte` has been consumed.
    pub fn settle(&mut self, byte: u8) {
        self.escaped = byte == b'\'';
    }

    /// Fails if a block is still open; `opened_at` is the offset of the
    /// outermost unclosed `{`.
    pub(crate) fn ensure_closed(
        &self,
        source: &[u8],
        opened_at: usize,
    ) -> Result<(), MalformedInput> {
        if self.depth > 0 {
            return Err(MalformedInput::at(
                Malformed::UnclosedBlock { depth: self.depth },
                source,
                opened_at,
            ));
        }
        Ok(())
    }
}
