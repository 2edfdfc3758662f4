use bstr::BString;

use crate::{
    MalformedInput, ScanSummary, ScrubError, ScrubOptions, Sink, purify_grammar, strip_semantics,
};

/// Which transformation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Mode {
    /// Empty every action block, keeping its braces and line breaks.
    StripSemantics,
    /// Drop declarations-section blocks and reformat the rules section.
    PurifyGrammar,
}

impl Mode {
    /// Parses the command-line flag: `-c` strips, `-p` purifies.
    #[must_use]
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "-c" => Some(Mode::StripSemantics),
            "-p" => Some(Mode::PurifyGrammar),
            _ => None,
        }
    }

    /// The command-line flag selecting this mode.
    #[must_use]
    pub fn flag(self) -> &'static str {
        match self {
            Mode::StripSemantics => "-c",
            Mode::PurifyGrammar => "-p",
        }
    }
}

/// Runs `mode` over `source`, writing into `sink`.
///
/// # Errors
///
/// Returns [`ScrubError::Sink`] when the sink fails, or
/// [`ScrubError::Malformed`] when [`ScrubOptions::strict`] rejects the input.
pub fn scrub_into<S: Sink + ?Sized>(
    mode: Mode,
    source: &[u8],
    options: ScrubOptions,
    sink: &mut S,
) -> Result<ScanSummary, ScrubError<S::Error>> {
    match mode {
        Mode::StripSemantics => strip_semantics(source, options, sink),
        Mode::PurifyGrammar => purify_grammar(source, options, sink),
    }
}

/// Runs `mode` over `source` and returns the transformed bytes.
///
/// # Errors
///
/// Only fails when [`ScrubOptions::strict`] is set and the input is
/// structurally broken.
pub fn scrub(mode: Mode, source: &[u8], options: ScrubOptions) -> Result<BString, MalformedInput> {
    let mut out = BString::from(alloc::vec::Vec::with_capacity(source.len()));
    match scrub_into(mode, source, options, &mut out) {
        Ok(_) => Ok(out),
        Err(ScrubError::Malformed(err)) => Err(err),
        Err(ScrubError::Sink(never)) => match never {},
    }
}
