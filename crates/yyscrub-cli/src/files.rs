//! File plumbing around the scanning passes.

use std::{
    fs::File,
    io::{BufWriter, Read, Write},
    path::Path,
};

use anyhow::{Context, Result};
use yyscrub::{IoSink, Mode, ScanSummary, ScrubError, ScrubOptions, scrub_into};

/// Reads the whole of `path` into memory.
///
/// The buffer is pre-sized from the file's reported length, but reading
/// continues until end of file, so short reads and files that change size
/// underneath us still yield exactly what was on disk.
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    let mut file =
        File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let reported = file
        .metadata()
        .ok()
        .and_then(|meta| usize::try_from(meta.len()).ok())
        .unwrap_or(0);

    let mut source = Vec::with_capacity(reported);
    file.read_to_end(&mut source)
        .with_context(|| format!("cannot read {}", path.display()))?;
    if source.len() != reported {
        tracing::warn!(
            path = %path.display(),
            reported,
            read = source.len(),
            "file size changed while reading"
        );
    }
    Ok(source)
}

/// Runs `mode` over `source` and writes the result to `path`, creating or
/// truncating it.
pub fn write_scrubbed(
    path: &Path,
    mode: Mode,
    source: &[u8],
    options: ScrubOptions,
) -> Result<ScanSummary> {
    let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
    let mut sink = IoSink::new(BufWriter::new(file));

    let summary = match scrub_into(mode, source, options, &mut sink) {
        Ok(summary) => summary,
        Err(ScrubError::Sink(err)) => {
            return Err(err).with_context(|| format!("cannot write {}", path.display()));
        }
        Err(ScrubError::Malformed(err)) => return Err(err.into()),
    };
    sink.into_inner()
        .flush()
        .with_context(|| format!("cannot write {}", path.display()))?;
    Ok(summary)
}
