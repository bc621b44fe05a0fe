// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// The options are deliberately kept as plain strings where we want our own
// error messages (URL, format, output path); they are validated in main.rs
// before any request is made.
// =============================================================================

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "index-intruder",
    version,
    about = "Lists every file and directory behind a web server's \"Index of\" pages",
    long_about = "index-intruder starts at one directory-listing page, follows every subdirectory \
                  link it finds, and prints the full set of file and directory URLs. \
                  Pages that do not look like the first listing page are skipped."
)]
pub struct Cli {
    /// URL of the "Index of" page to start from (e.g. http://example.com/pub/)
    #[arg(short, long)]
    pub url: String,

    /// Output format: text (default) or json
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Strip the URL from the results, leaving only the path
    #[arg(short, long = "strip-url")]
    pub strip_url: bool,

    /// Write (overwrite) the results to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Per-request timeout in seconds (default: no timeout)
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Log every fetched and skipped page to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["index-intruder", "-u", "http://x.test/a/"]).unwrap();
        assert_eq!(cli.url, "http://x.test/a/");
        assert_eq!(cli.format, "text");
        assert!(!cli.strip_url);
        assert_eq!(cli.output, None);
        assert_eq!(cli.timeout, None);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "index-intruder",
            "--url",
            "http://x.test/a",
            "-f",
            "json",
            "--strip-url",
            "-o",
            "out.json",
            "-t",
            "30",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.format, "json");
        assert!(cli.strip_url);
        assert_eq!(cli.output.as_deref(), Some("out.json"));
        assert_eq!(cli.timeout, Some(30));
        assert!(cli.verbose);
    }

    #[test]
    fn test_url_is_required() {
        assert!(Cli::try_parse_from(["index-intruder"]).is_err());
    }

    #[test]
    fn test_format_is_not_validated_by_clap() {
        // unknown formats are reported by OutputFormat, not clap
        let cli = Cli::try_parse_from(["index-intruder", "-u", "http://x/", "-f", "xml"]).unwrap();
        assert_eq!(cli.format, "xml");
    }
}
