//! Documented non-validating behavior that callers may rely on.

use alloc::vec::Vec;

use bstr::ByteSlice;

use crate::{Mode, ScrubOptions, scrub, scrub_into};

fn run(mode: Mode, src: &[u8]) -> Vec<u8> {
    scrub(mode, src, ScrubOptions::default()).unwrap().into()
}

#[test]
fn quoted_brace_leaves_depth_balanced() {
    let mut out = Vec::<u8>::new();
    let summary = scrub_into(
        Mode::StripSemantics,
        b"c : '{' { if (x) { y(); } } ;\n",
        ScrubOptions::default(),
        &mut out,
    )
    .unwrap();
    assert_eq!(summary.final_depth, 0);
    assert_eq!(out.as_bstr(), b"c : '{' {} ;\n".as_bstr());
}

#[test]
fn quote_escapes_the_next_byte_even_without_closing_quote() {
    // The second quote is not a closing quote; it escapes the brace.
    assert_eq!(run(Mode::StripSemantics, b"'a'{x").as_bstr(), b"'a'{x".as_bstr());
    // The escaped second quote arms the escape again, so the brace is
    // content and the `}` is a stray close.
    assert_eq!(run(Mode::StripSemantics, b"''{x}").as_bstr(), b"''{x".as_bstr());
    assert_eq!(run(Mode::StripSemantics, b"'\\''{x}").as_bstr(), b"'\\''{x".as_bstr());
}

#[test]
fn stray_close_silently_desynchronizes() {
    let out = run(Mode::StripSemantics, b"a } b\n{ c }\nd");
    assert_eq!(out.as_bstr(), b"a \n c \n".as_bstr());
}

#[test]
fn unterminated_comment_swallows_the_rest() {
    let out = run(Mode::PurifyGrammar, b"%%\na : b ; /* oops\nc : d ;");
    assert_eq!(out.as_bstr(), b"%%\n\na:\n  b;\n\n".as_bstr());
}

#[test]
fn second_marker_is_ordinary_rules_text() {
    let out = run(Mode::PurifyGrammar, b"%%\nr : s ;\n%%\nint main() { return 0; }\n");
    assert_eq!(out.as_bstr(), b"%%\n\nr:\n  s;\n\n%%int main()".as_bstr());
}

#[test]
fn empty_input_is_empty_output() {
    for mode in [Mode::StripSemantics, Mode::PurifyGrammar] {
        assert!(run(mode, b"").is_empty());
    }
}
