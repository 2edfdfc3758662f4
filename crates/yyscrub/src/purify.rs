//! Grammar purifier.
//!
//! The declarations section loses its action blocks, delimiters included.
//! Once the first `%%` is seen the scan stops, writes a blank line, and the
//! remainder of the buffer is handed to [`reformat_rules`].

use crate::{
    Brace, BraceTracker, Malformed, MalformedInput, ScanSummary, ScrubError, ScrubOptions, Sink,
    reformat_rules, sink::Emitter,
};

/// Where a declarations scan stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// A `%%` marker was found; the rules section starts at `start`.
    Rules {
        /// Offset of the first byte after the marker.
        start: usize,
    },
    /// The buffer ended without a marker.
    End,
}

/// Scans the declarations section of `source`, dropping action blocks and
/// their braces, up to and including the first `%%`.
///
/// The marker itself is kept and followed by two newlines. Nothing after it
/// is read.
///
/// # Errors
///
/// Returns [`ScrubError::Sink`] if `sink` fails. With
/// [`ScrubOptions::strict`], a stray `}` or a block still open at the marker
/// or at end of input is reported as [`ScrubError::Malformed`].
pub fn scan_declarations<S: Sink + ?Sized>(
    source: &[u8],
    options: ScrubOptions,
    sink: &mut S,
) -> Result<(Section, ScanSummary), ScrubError<S::Error>> {
    let mut out = Emitter::new(sink);
    let mut braces = BraceTracker::new();
    let mut max_depth = 0;
    let mut opened_at = 0;
    let mut after_percent = false;
    let mut section = Section::End;

    for (pos, &byte) in source.iter().enumerate() {
        let escaped = braces.is_escaped();
        match braces.classify(byte) {
            Brace::Open => {
                let depth = braces.open();
                max_depth = max_depth.max(depth);
                if depth == 1 {
                    opened_at = pos;
                }
            }
            Brace::Close => {
                if braces.close() < 0 && options.strict {
                    return Err(MalformedInput::at(Malformed::UnbalancedClose, source, pos).into());
                }
            }
            Brace::Other => {
                if braces.depth() == 0 {
                    out.byte(byte)?;
                }
            }
        }
        braces.settle(byte);

        let percent = byte == b'%'
            && (!options.marker_requires_top_level || (!escaped && braces.depth() == 0));
        if percent && after_percent {
            out.put(b"\n\n")?;
            section = Section::Rules { start: pos + 1 };
            break;
        }
        after_percent = percent;
    }

    if options.strict {
        braces.ensure_closed(source, opened_at)?;
    }

    let (bytes_in, rules_offset) = match section {
        Section::Rules { start } => (start, Some(start)),
        Section::End => (source.len(), None),
    };
    let summary = ScanSummary {
        bytes_in,
        bytes_out: out.written(),
        max_depth,
        final_depth: braces.depth(),
        rules_offset,
    };
    scan_debug!(?section, ?summary, "scanned declarations");
    Ok((section, summary))
}

/// Purifies a whole grammar: declarations scan, then the rules reformatter
/// on everything after the first `%%`.
///
/// Without a marker the output is the declarations scan of the whole file.
///
/// # Errors
///
/// See [`scan_declarations`] and [`reformat_rules`]. Error locations refer
/// to `source`.
pub fn purify_grammar<S: Sink + ?Sized>(
    source: &[u8],
    options: ScrubOptions,
    sink: &mut S,
) -> Result<ScanSummary, ScrubError<S::Error>> {
    let (section, declarations) = scan_declarations(source, options, sink)?;
    let Section::Rules { start } = section else {
        return Ok(declarations);
    };

    let rules = reformat_rules(&source[start..], options, sink)
        .map_err(|err| err.rebase(source, start))?;
    Ok(declarations.chain(rules))
}
