use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser};
use tracing::level_filters::LevelFilter;
use yyscrub::{Mode, ScrubOptions};

/// Strip semantic actions from a Bison/Yacc grammar, or purify it for diffing.
#[derive(Debug, Parser)]
#[command(name = "yyscrub", version, arg_required_else_help = true)]
#[command(group(ArgGroup::new("mode").required(true).args(["strip", "purify"])))]
pub struct Cli {
    /// Empty every action block, keeping its braces and line breaks
    #[arg(short = 'c')]
    pub strip: bool,

    /// Drop action blocks and comments and normalize the rules layout
    #[arg(short = 'p')]
    pub purify: bool,

    /// Grammar file to read
    pub input: PathBuf,

    /// File to write; created or truncated
    pub output: PathBuf,

    /// Fail on unbalanced braces or unterminated comments
    #[arg(long)]
    pub strict: bool,

    /// Only honor a `%%` marker outside action blocks and quotes
    #[arg(long = "marker-top-level")]
    pub marker_top_level: bool,

    /// Log more; repeat for debug and trace output
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log errors only
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn mode(&self) -> Mode {
        if self.strip {
            Mode::StripSemantics
        } else {
            Mode::PurifyGrammar
        }
    }

    pub fn options(&self) -> ScrubOptions {
        ScrubOptions {
            strict: self.strict,
            marker_requires_top_level: self.marker_top_level,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::ERROR;
        }
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("yyscrub").chain(args.iter().copied()))
    }

    #[test]
    fn flag_selects_mode() {
        let cli = parse(&["-c", "in.y", "out.y"]).unwrap();
        assert_eq!(cli.mode(), Mode::StripSemantics);
        let cli = parse(&["-p", "in.y", "out.y"]).unwrap();
        assert_eq!(cli.mode(), Mode::PurifyGrammar);
        assert_eq!(cli.options(), ScrubOptions::default());
    }

    #[test]
    fn mode_flag_is_required_and_exclusive() {
        assert_eq!(
            parse(&["in.y", "out.y"]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse(&["-c", "-p", "in.y", "out.y"]).unwrap_err().kind(),
            ErrorKind::ArgumentConflict
        );
    }

    #[test]
    fn unknown_flag_and_wrong_arity_are_rejected() {
        assert_eq!(
            parse(&["-x", "in.y", "out.y"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert_eq!(
            parse(&["-c", "in.y"]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse(&["-c", "in.y", "out.y", "extra"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
    }

    #[test]
    fn verbosity_maps_to_levels() {
        let cli = parse(&["-p", "-vv", "--strict", "a", "b"]).unwrap();
        assert_eq!(cli.log_level(), LevelFilter::DEBUG);
        assert!(cli.options().strict);
        let cli = parse(&["-p", "-q", "a", "b"]).unwrap();
        assert_eq!(cli.log_level(), LevelFilter::ERROR);
    }
}
