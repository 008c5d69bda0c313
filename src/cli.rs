use std::path::PathBuf;

use clap::Parser;

/// Command line of the editor.
#[derive(Debug, Parser)]
#[command(name = "gapp-text-editor", version, about = "A simple text editor built with Rust and FLTK")]
pub struct Cli {
    /// Text file to open at startup
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Start with the line-number gutter hidden
    #[arg(long)]
    pub no_line_numbers: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["gapp-text-editor"]).unwrap();
        assert!(cli.file.is_none());
        assert!(!cli.no_line_numbers);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_file_and_flags() {
        let cli = Cli::try_parse_from(["gapp-text-editor", "-vv", "--no-line-numbers", "notes.txt"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("notes.txt")));
        assert!(cli.no_line_numbers);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_rejects_second_file() {
        assert!(Cli::try_parse_from(["gapp-text-editor", "a.txt", "b.txt"]).is_err());
    }
}
