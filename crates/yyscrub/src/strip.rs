//! Semantic-block stripper.
//!
//! Outside action blocks the source is copied verbatim. Inside a block only
//! line breaks survive, so line numbers of the stripped grammar still match
//! the original. The outermost `{` and `}` of each block are kept; nested
//! braces are dropped with the rest of the body.

use crate::{
    Brace, BraceTracker, Malformed, MalformedInput, ScanSummary, ScrubError, ScrubOptions, Sink,
    sink::Emitter,
};

/// Removes the bodies of all top-level `{ ... }` blocks in `source`.
///
/// # Errors
///
/// Returns [`ScrubError::Sink`] if `sink` fails, and
/// [`ScrubError::Malformed`] for unbalanced braces when
/// [`ScrubOptions::strict`] is set.
pub fn strip_semantics<S: Sink + ?Sized>(
    source: &[u8],
    options: ScrubOptions,
    sink: &mut S,
) -> Result<ScanSummary, ScrubError<S::Error>> {
    let mut out = Emitter::new(sink);
    let mut braces = BraceTracker::new();
    let mut max_depth = 0;
    let mut opened_at = 0;

    for (pos, &byte) in source.iter().enumerate() {
        if byte == b'\r' || byte == b'\n' {
            out.byte(byte)?;
        } else {
            match braces.classify(byte) {
                Brace::Open => {
                    let depth = braces.open();
                    max_depth = max_depth.max(depth);
                    if depth == 1 {
                        opened_at = pos;
                        out.byte(byte)?;
                    }
                }
                Brace::Close => {
                    let depth = braces.close();
                    if depth == 0 {
                        out.byte(byte)?;
                    } else if depth < 0 && options.strict {
                        return Err(
                            MalformedInput::at(Malformed::UnbalancedClose, source, pos).into()
                        );
                    }
                }
                Brace::Other => {
                    if braces.depth() == 0 {
                        out.byte(byte)?;
                    }
                }
            }
        }
        braces.settle(byte);
    }

    if options.strict {
        braces.ensure_closed(source, opened_at)?;
    }

    let summary = ScanSummary {
        bytes_in: source.len(),
        bytes_out: out.written(),
        max_depth,
        final_depth: braces.depth(),
        rules_offset: None,
    };
    scan_debug!(?summary, "stripped semantic blocks");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use bstr::ByteSlice;
    use rstest::rstest;

    use super::*;

    fn strip(src: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        strip_semantics(src, ScrubOptions::default(), &mut out).unwrap();
        out
    }

    #[rstest]
    #[case::plain(b"a : b ;", b"a : b ;")]
    #[case::block_emptied(b"A { x ; \n y ; } B", b"A {\n} B")]
    #[case::nested_braces_dropped(b"x { a { b } c } y", b"x {} y")]
    #[case::crlf_kept(b"{\r\n}", b"{\r\n}")]
    #[case::two_blocks(b"{a}{b}", b"{}{}")]
    #[case::quoted_open_brace(b"'{' {x}", b"'{' {}")]
    #[case::quoted_close_brace_in_block(b"{ '}' x } y", b"{} y")]
    #[case::stray_close_desyncs(b"a } b { c } d", b"a  c ")]
    fn strips(#[case] src: &[u8], #[case] expected: &[u8]) {
        assert_eq!(strip(src).as_bstr(), expected.as_bstr());
    }

    #[test]
    fn summary_counts_depth() {
        let mut out = Vec::<u8>::new();
        let summary =
            strip_semantics(b"{ { } } {", ScrubOptions::default(), &mut out).unwrap();
        assert_eq!(summary.max_depth, 2);
        assert_eq!(summary.final_depth, 1);
        assert_eq!(summary.bytes_in, 9);
        assert_eq!(summary.bytes_out, out.len());
    }

    #[test]
    fn strict_rejects_stray_close() {
        let options = ScrubOptions {
            strict: true,
            ..Default::default()
        };
        let err = strip_semantics(b"a\n}", options, &mut Vec::<u8>::new()).unwrap_err();
        let ScrubError::Malformed(m) = &err else {
            panic!("expected malformed, got {err:?}");
        };
        assert_eq!(m.kind, Malformed::UnbalancedClose);
        assert_eq!((m.line, m.column), (2, 1));
    }

    #[test]
    fn strict_reports_where_unclosed_block_opened() {
        let options = ScrubOptions {
            strict: true,
            ..Default::default()
        };
        let err = strip_semantics(b"ok {} { {", options, &mut Vec::<u8>::new()).unwrap_err();
        assert_eq!(
            err,
            ScrubError::Malformed(MalformedInput {
                kind: Malformed::UnclosedBlock { depth: 2 },
                offset: 6,
                line: 1,
                column: 7,
            })
        );
    }
}
