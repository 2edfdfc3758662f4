//! Rules-section reformatter.
//!
//! Drops comments and action blocks, then lays rules out one token run per
//! line:
//!
//! ```text
//! expr : expr '+' term { $$ = $1 + $3; }   /* sum */
//!      | term ;
//! ```
//!
//! becomes
//!
//! ```text
//! expr:
//!   expr '+' term
//! | term;
//!
//! ```
//!
//! Separators are only recognized at depth 0 and when not escaped by a
//! preceding quote. Line breaks are dropped. A token byte gets one leading
//! space iff the raw byte before it was a space or tab, so runs of
//! horizontal whitespace collapse and whitespace right after a skipped block
//! or comment vanishes.

use crate::{
    Brace, BraceTracker, Malformed, MalformedInput, ScanSummary, ScrubError, ScrubOptions, Sink,
    sink::Emitter,
};

/// Where the scan currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RuleState {
    Normal,
    InBlock,
    InComment,
}

struct RuleScanner<'src> {
    src: &'src [u8],
    pos: usize,
    braces: BraceTracker,
    in_comment: bool,
    /// Last consumed source byte, skipped ones included.
    prev: u8,
    max_depth: isize,
    block_at: usize,
    comment_at: usize,
}

impl<'src> RuleScanner<'src> {
    fn new(src: &'src [u8]) -> Self {
        Self {
            src,
            pos: 0,
            braces: BraceTracker::new(),
            in_comment: false,
            // The section starts right after `%%`.
            prev: b'%',
            max_depth: 0,
            block_at: 0,
            comment_at: 0,
        }
    }

    fn state(&self) -> RuleState {
        if self.in_comment {
            RuleState::InComment
        } else if self.braces.depth() != 0 {
            RuleState::InBlock
        } else {
            RuleState::Normal
        }
    }

    fn peek_next(&self) -> Option<u8> {
        self.src.get(self.pos + 1).copied()
    }

    fn run<S: Sink + ?Sized>(
        &mut self,
        options: ScrubOptions,
        out: &mut Emitter<'_, S>,
    ) -> Result<(), ScrubError<S::Error>> {
        while let Some(&byte) = self.src.get(self.pos) {
            if self.state() == RuleState::InComment {
                self.skip_comment_byte(byte);
                continue;
            }

            let structural = self.structural(byte, options)? || self.separator(byte, out)?;
            if !structural && self.state() == RuleState::Normal {
                self.token_byte(byte, out)?;
            }

            // A comment opener was consumed as a unit, ending on its `*`.
            self.consume(if self.in_comment { b'*' } else { byte });
            self.pos += 1;
        }

        if options.strict {
            if self.in_comment {
                return Err(MalformedInput::at(
                    Malformed::UnterminatedComment,
                    self.src,
                    self.comment_at,
                )
                .into());
            }
            self.braces.ensure_closed(self.src, self.block_at)?;
        }
        Ok(())
    }

    fn consume(&mut self, byte: u8) {
        self.braces.settle(byte);
        self.prev = byte;
    }

    fn skip_comment_byte(&mut self, byte: u8) {
        if byte == b'*' && self.peek_next() == Some(b'/') {
            self.in_comment = false;
            self.consume(b'/');
            self.pos += 2;
        } else {
            self.consume(byte);
            self.pos += 1;
        }
    }

    /// Braces and comment openers. Returns whether `byte` was consumed.
    fn structural(&mut self, byte: u8, options: ScrubOptions) -> Result<bool, MalformedInput> {
        match self.braces.classify(byte) {
            Brace::Open => {
                let depth = self.braces.open();
                if depth == 1 {
                    self.block_at = self.pos;
                }
                self.max_depth = self.max_depth.max(depth);
            }
            Brace::Close => {
                if self.braces.close() < 0 && options.strict {
                    return Err(MalformedInput::at(
                        Malformed::UnbalancedClose,
                        self.src,
                        self.pos,
                    ));
                }
            }
            Brace::Other
                if byte == b'/' && !self.braces.is_escaped() && self.peek_next() == Some(b'*') =>
            {
                self.in_comment = true;
                self.comment_at = self.pos;
                self.pos += 1;
            }
            Brace::Other => return Ok(false),
        }
        Ok(true)
    }

    /// Rule separators at depth 0. Returns whether `byte` was consumed.
    fn separator<S: Sink + ?Sized>(
        &mut self,
        byte: u8,
        out: &mut Emitter<'_, S>,
    ) -> Result<bool, ScrubError<S::Error>> {
        if self.state() != RuleState::Normal || self.braces.is_escaped() {
            return Ok(false);
        }
        match byte {
            b';' => out.put(b";\n\n")?,
            b':' => out.put(b":\n ")?,
            b'|' => out.put(b"\n|")?,
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn token_byte<S: Sink + ?Sized>(
        &self,
        byte: u8,
        out: &mut Emitter<'_, S>,
    ) -> Result<(), ScrubError<S::Error>> {
        if matches!(byte, b' ' | b'\t' | b'\n' | b'\r') {
            return Ok(());
        }
        if matches!(self.prev, b' ' | b'\t') {
            out.byte(b' ')?;
        }
        out.byte(byte)
    }
}

/// Reformats a rules section: everything after the first `%%`.
///
/// The scan runs to the end of `rules`. Offsets in returned errors are
/// relative to `rules`.
///
/// # Errors
///
/// Returns [`ScrubError::Sink`] if `sink` fails. With
/// [`ScrubOptions::strict`], unbalanced braces and unterminated comments are
/// reported as [`ScrubError::Malformed`].
pub fn reformat_rules<S: Sink + ?Sized>(
    rules: &[u8],
    options: ScrubOptions,
    sink: &mut S,
) -> Result<ScanSummary, ScrubError<S::Error>> {
    let mut out = Emitter::new(sink);
    let mut scanner = RuleScanner::new(rules);
    scanner.run(options, &mut out)?;

    let summary = ScanSummary {
        bytes_in: rules.len(),
        bytes_out: out.written(),
        max_depth: scanner.max_depth,
        final_depth: scanner.braces.depth(),
        rules_offset: None,
    };
    scan_debug!(?summary, "reformatted rules section");
    Ok(summary)
}
