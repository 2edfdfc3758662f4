//! Strict-mode failures and their source locations.

use thiserror::Error;

/// The kind of structural problem found by a strict scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Malformed {
    /// A `}` with no matching `{`.
    #[error("unbalanced '}}'")]
    UnbalancedClose,
    /// Input ended inside an action block.
    #[error("unclosed action block (depth {depth})")]
    UnclosedBlock {
        /// Depth left open at end of input.
        depth: isize,
    },
    /// Input ended inside a `/* ... */` comment.
    #[error("unterminated comment")]
    UnterminatedComment,
}

/// A strict-mode failure, located in the source buffer.
///
/// `line` and `column` are 1-based; `column` counts bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{kind} at {line}:{column}")]
pub struct MalformedInput {
    /// What went wrong.
    pub kind: Malformed,
    /// Byte offset of the offending `}`, or of the opening `{` or `/*` for
    /// constructs left open at end of input.
    pub offset: usize,
    /// Line of `offset`.
    pub line: usize,
    /// Column of `offset`.
    pub column: usize,
}

impl MalformedInput {
    /// Locates `offset` within `source`.
    pub(crate) fn at(kind: Malformed, source: &[u8], offset: usize) -> Self {
        scan_debug!(%kind, offset, "rejecting malformed input");
        Self::locate(kind, source, offset)
    }

    fn locate(kind: Malformed, source: &[u8], offset: usize) -> Self {
        let before = &source[..offset.min(source.len())];
        let line = 1 + before.iter().filter(|&&b| b == b'\n').count();
        let column = match before.iter().rposition(|&b| b == b'\n') {
            Some(nl) => offset - nl,
            None => offset + 1,
        };
        Self {
            kind,
            offset,
            line,
            column,
        }
    }

    /// Shifts the location of an error found in `source[base..]` so that it
    /// refers to `source` as a whole.
    pub(crate) fn rebase(self, source: &[u8], base: usize) -> Self {
        Self::locate(self.kind, source, base + self.offset)
    }
}

/// Error returned by the scanning passes.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ScrubError<E> {
    /// The output sink rejected a write.
    #[error("sink error: {0}")]
    Sink(E),
    /// Strict checking found a structural problem.
    #[error(transparent)]
    Malformed(#[from] MalformedInput),
}

impl<E> ScrubError<E> {
    /// Re-expresses a located error relative to an enclosing buffer.
    pub(crate) fn rebase(self, source: &[u8], base: usize) -> Self {
        match self {
            ScrubError::Malformed(m) => ScrubError::Malformed(m.rebase(source, base)),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn location_is_one_based() {
        let src = b"ab\ncd}";
        let err = MalformedInput::at(Malformed::UnbalancedClose, src, 5);
        assert_eq!((err.line, err.column), (2, 3));
        assert_eq!(err.to_string(), "unbalanced '}' at 2:3");
    }

    #[test]
    fn first_byte_is_column_one() {
        let err = MalformedInput::at(Malformed::UnterminatedComment, b"/*", 0);
        assert_eq!((err.line, err.column), (1, 1));
    }

    #[test]
    fn rebase_moves_into_enclosing_buffer() {
        let src = b"x\n%%\n}";
        let local = MalformedInput::at(Malformed::UnbalancedClose, &src[4..], 1);
        let global = local.rebase(src, 4);
        assert_eq!(global.offset, 5);
        assert_eq!((global.line, global.column), (3, 1));
    }
}
