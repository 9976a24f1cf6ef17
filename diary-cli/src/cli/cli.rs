use clap::Parser;
use std::path::PathBuf;

use crate::render::ColorMode;

/// diary — a personal diary kept as one text file per day
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Directory holding the diary entries. Overrides `entries_dir` from the config file.
    #[arg(long, env = "DIARY_DIR", value_name = "PATH")]
    pub dir: Option<PathBuf>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum)]
    pub color: Option<ColorMode>,
}
impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_valid() {
        let cli = Cli::try_parse_from(["diary"]).unwrap();
        assert!(cli.color.is_none());
    }

    #[test]
    fn accepts_dir_and_color() {
        let cli = Cli::try_parse_from(["diary", "--dir", "/tmp/d", "--color", "never"]).unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/d")));
        assert_eq!(cli.color, Some(ColorMode::Never));
    }

    #[test]
    fn rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["diary", "today"]).is_err());
    }
}
