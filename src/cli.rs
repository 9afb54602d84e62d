// src/cli.rs
use clap::Parser;

use crate::category::CategoryFilter;
use crate::output::OutputFlags;
use crate::types::VisibilityFilter;

/// h1-scope: HackerOne scope harvester
///
/// Lists the in-scope assets of every HackerOne program visible to your
/// account, filtered by visibility, activity, bounty eligibility and asset
/// category.
#[derive(Parser, Debug, Clone)]
#[command(name = "h1-scope")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    // ===== Input & Configuration =====
    /// Path to TOML config file
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// HackerOne username (overrides config)
    #[arg(short = 'u', long = "username")]
    pub username: Option<String>,

    /// HackerOne API token (overrides config)
    #[arg(short = 't', long = "token")]
    pub token: Option<String>,

    // ===== Program Filters =====
    /// Only programs offering bounties (bounty-eligible assets only)
    #[arg(short = 'b', long = "bbp-only")]
    pub bbp_only: bool,

    /// Only private programs
    #[arg(short = 'p', long = "private-only")]
    pub private_only: bool,

    /// Only public programs
    #[arg(long = "public-only")]
    pub public_only: bool,

    /// Only programs currently accepting submissions
    #[arg(short = 'a', long = "active-only")]
    pub active_only: bool,

    /// Asset category: url, cidr, mobile, android, apple, other, hardware, code, executable, all
    #[arg(long = "categories", default_value = "all")]
    pub categories: String,

    // ===== Output =====
    /// Fields to print per asset: t (target), d (description), c (category), u (program URL)
    #[arg(short = 'o', long = "output", default_value = "t")]
    pub output_flags: String,

    /// Delimiter between printed fields
    #[arg(short = 'd', long = "delimiter", default_value = " ")]
    pub delimiter: String,

    /// Print one JSON object per program instead of delimited text
    #[arg(short = 'j', long = "json")]
    pub json: bool,

    /// Also print assets listed as out of scope
    #[arg(long = "oos")]
    pub include_oos: bool,

    // ===== Performance =====
    /// Number of programs fetched in parallel (overrides config)
    #[arg(long = "concurrency")]
    pub concurrency: Option<usize>,

    // ===== Display & Logging =====
    /// Disable progress bar
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Verbose logging (set log level to debug)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Quiet logging (set log level to warn)
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl Cli {
    /// Validate flag combinations and return errors for invalid usage
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.private_only && self.public_only {
            anyhow::bail!("Cannot specify both --private-only and --public-only");
        }

        if self.verbose && self.quiet {
            anyhow::bail!("Cannot specify both --verbose and --quiet");
        }

        if self.concurrency == Some(0) {
            anyhow::bail!("--concurrency must be greater than 0");
        }

        if !self.json {
            let flags = OutputFlags::parse(&self.output_flags)?;
            if flags.is_empty() {
                anyhow::bail!("--output needs at least one of t, d, c, u");
            }
        }

        // Reject unknown categories before any request is made
        CategoryFilter::resolve(&self.categories)?;

        Ok(())
    }

    pub fn visibility(&self) -> VisibilityFilter {
        VisibilityFilter {
            private_only: self.private_only,
            public_only: self.public_only,
            active_only: self.active_only,
        }
    }

    /// Check if the progress bar should be shown
    pub fn should_show_progress(&self) -> bool {
        !self.no_progress && !self.json && !self.quiet
    }

    /// Log level override from verbose/quiet flags
    pub fn log_level(&self) -> Option<&str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("warn")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["h1-scope"]);
        assert_eq!(cli.config, None);
        assert_eq!(cli.categories, "all");
        assert_eq!(cli.output_flags, "t");
        assert_eq!(cli.delimiter, " ");
        assert!(!cli.json);
        assert!(cli.validate().is_ok());
        assert_eq!(cli.visibility(), VisibilityFilter::default());
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from([
            "h1-scope", "-c", "h1.toml", "-u", "alice", "-t", "tok", "-b", "-p", "-a", "-o", "tdu",
            "-d", ",",
        ]);
        assert_eq!(cli.config.as_deref(), Some("h1.toml"));
        assert_eq!(cli.username.as_deref(), Some("alice"));
        assert_eq!(cli.token.as_deref(), Some("tok"));
        assert!(cli.bbp_only);
        assert!(cli.validate().is_ok());
        assert_eq!(
            cli.visibility(),
            VisibilityFilter {
                private_only: true,
                public_only: false,
                active_only: true,
            }
        );
        assert_eq!(cli.output_flags, "tdu");
        assert_eq!(cli.delimiter, ",");
    }

    #[test]
    fn test_private_and_public_invalid() {
        let cli = Cli::parse_from(["h1-scope", "--private-only", "--public-only"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_verbose_and_quiet_invalid() {
        let cli = Cli::parse_from(["h1-scope", "--verbose", "--quiet"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_zero_concurrency_invalid() {
        let cli = Cli::parse_from(["h1-scope", "--concurrency", "0"]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_invalid_output_flags() {
        let cli = Cli::parse_from(["h1-scope", "-o", "tz"]);
        assert!(cli.validate().is_err());

        let cli = Cli::parse_from(["h1-scope", "-o", ""]);
        assert!(cli.validate().is_err());
    }

    #[test]
    fn test_output_flags_ignored_for_json() {
        let cli = Cli::parse_from(["h1-scope", "--json", "-o", "zz"]);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_invalid_category() {
        let cli = Cli::parse_from(["h1-scope", "--categories", "websites"]);
        assert!(cli.validate().is_err());

        let cli = Cli::parse_from(["h1-scope", "--categories", "URL"]);
        assert!(cli.validate().is_ok());
    }

    #[test]
    fn test_progress_disabled_for_json() {
        let cli = Cli::parse_from(["h1-scope", "--json"]);
        assert!(!cli.should_show_progress());
    }

    #[test]
    fn test_progress_enabled_by_default() {
        let cli = Cli::parse_from(["h1-scope"]);
        assert!(cli.should_show_progress());
    }

    #[test]
    fn test_log_level() {
        assert_eq!(Cli::parse_from(["h1-scope", "-v"]).log_level(), Some("debug"));
        assert_eq!(Cli::parse_from(["h1-scope", "-q"]).log_level(), Some("warn"));
        assert_eq!(Cli::parse_from(["h1-scope"]).log_level(), None);
    }
}
