use quickcheck::QuickCheck;

use super::{arbitrary::Grammar, quickcheck_tests};
use crate::{Mode, ScrubOptions, scrub};

/// Property: without a `%%` marker the purifier never reaches the rules
/// reformatter; it only drops action blocks, braces included.
#[test]
fn purify_without_marker_only_drops_blocks() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(grammar: Grammar) -> bool {
        let out = scrub(Mode::PurifyGrammar, &grammar.source, ScrubOptions::default());
        out.is_ok_and(|out| out == grammar.without_blocks)
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Grammar) -> bool);
}

/// Property: no byte of a block body survives into the declarations output.
#[test]
fn purify_removes_marked_block_bodies() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(grammar: Grammar) -> bool {
        let mut source = grammar.source.clone();
        source.extend_from_slice(b"{ @@ }");
        let Ok(out) = scrub(Mode::PurifyGrammar, &source, ScrubOptions::default()) else {
            return false;
        };
        !out.contains(&b'@') && !out.contains(&b'{') && !out.contains(&b'}')
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Grammar) -> bool);
}
