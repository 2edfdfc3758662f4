#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use yyscrub::{Mode, ScrubError, ScrubOptions, scrub_into};

const HEADER: usize = 3; // one byte per `Flags` field

thread_local! {
    static RNG: RefCell<SmallRng> = RefCell::new(SmallRng::from_os_rng());
}

/// Byte sequences the passes react to, weighted towards the tricky ones.
static TOKEN_TABLE: &[&[u8]] = &[
    b"{", b"}", b"{ $$ = $1; }", b"'", b"'{'", b"'}'", b"''", b"/*", b"*/", b"/* c */",
    b"%%", b"%", b"%{", b"%}", b";", b":", b"|", b" ", b"\t", b"\n", b"\r\n", b"expr", b"NUM",
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Append grammar-ish tokens to `buf`, never exceeding `limit`. Returns the
/// number of bytes written.
fn append_tokens(buf: &mut [u8], limit: usize) -> usize {
    with_rng(|rng| {
        let mut written = 0;
        for _ in 0..rng.random_range(1..=16) {
            let t = TOKEN_TABLE[rng.random_range(0..TOKEN_TABLE.len())];
            if written + t.len() > limit {
                break;
            }
            buf[written..written + t.len()].copy_from_slice(t);
            written += t.len();
        }
        written
    })
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if max_size <= HEADER {
        return fuzzer_mutate(data, size, max_size);
    }
    if size < HEADER || seed % 4 == 0 {
        data[..HEADER].copy_from_slice(&with_rng(|rng| rng.next_u32().to_le_bytes())[..HEADER]);
        let mut len = HEADER;
        while len < size.max(HEADER + 1) && len < max_size {
            let written = append_tokens(&mut data[len..], max_size - len);
            if written == 0 {
                break;
            }
            len += written;
        }
        len
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug, Arbitrary)]
struct Flags {
    purify: bool,
    strict: bool,
    marker_requires_top_level: bool,
}

fn scrub(data: &[u8]) {
    let mut input = Unstructured::new(data);
    let Ok(flags) = Flags::arbitrary(&mut input) else {
        return;
    };
    let source = input.take_rest();
    let mode = if flags.purify {
        Mode::PurifyGrammar
    } else {
        Mode::StripSemantics
    };
    let options = ScrubOptions {
        strict: flags.strict,
        marker_requires_top_level: flags.marker_requires_top_level,
    };

    let mut out = Vec::new();
    match scrub_into(mode, source, options, &mut out) {
        Ok(summary) => {
            assert_eq!(summary.bytes_out, out.len());
            assert_eq!(summary.bytes_in, source.len());
            if mode == Mode::StripSemantics {
                let breaks = |b: &[u8]| b.iter().filter(|&&c| c == b'\n' || c == b'\r').count();
                assert_eq!(breaks(&out), breaks(source));
            }
        }
        Err(ScrubError::Malformed(err)) => {
            assert!(options.strict, "lenient scan failed: {err}");
            assert!(err.offset < source.len());
        }
        Err(ScrubError::Sink(never)) => match never {},
    }
}

fuzz_target!(|data: &[u8]| scrub(data));
