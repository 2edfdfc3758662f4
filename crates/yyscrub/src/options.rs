/// Configuration options for the scanning passes.
///
/// The defaults reproduce the classic non-validating behavior: malformed
/// grammars are processed silently, and a `%%` anywhere in the declarations
/// section ends it.
///
/// # Examples
///
/// ```rust
/// use yyscrub::{Mode, ScrubOptions, scrub};
///
/// let options = ScrubOptions {
///     strict: true,
///     ..Default::default()
/// };
/// assert!(scrub(Mode::StripSemantics, b"a } b", options).is_err());
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrubOptions {
    /// Whether to reject structurally broken input.
    ///
    /// When `true`, a `}` that drives brace depth negative fails the scan
    /// immediately, and an action block or comment still open at end of input
    /// fails it once the buffer is exhausted. Output produced before the
    /// failure has already reached the sink.
    ///
    /// # Default
    ///
    /// `false`
    pub strict: bool,

    /// Whether the `%%` section marker only counts outside action blocks.
    ///
    /// By default the declarations scan ends at the first `%%`, even one
    /// inside a `{ ... }` block or right after a quote. When `true`, the
    /// marker is honored only at depth 0 with neither `%` escaped.
    ///
    /// # Examples
    ///
    /// ```text
    /// %{ int pct = 100 %% 7; %}
    /// %%
    /// ```
    ///
    /// # Default
    ///
    /// `false`
    pub marker_requires_top_level: bool,
}
