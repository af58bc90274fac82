//! Command-line interface.

pub mod output;
pub mod run;

use clap::{ArgAction, Parser};

use crate::core::constants::DEFAULT_PAGE_SIZE;
use crate::core::domain::DuplicatePolicy;
use crate::core::starter::Request;

/// SSM Starter - load AWS SSM parameters into the environment, then start your app.
#[derive(Parser, Debug)]
#[command(
    name = "ssm-starter",
    about = "Read AWS SSM parameters into the environment, then start your app",
    version
)]
pub struct Cli {
    /// The SSM name prefix to load parameters from (repeatable; earlier names win)
    #[arg(long = "ssm-name", value_name = "NAME", required = true, action = ArgAction::Append)]
    pub ssm_names: Vec<String>,

    /// Abort (non-zero exit) if duplicate SSM parameter names are encountered
    #[arg(long, conflicts_with = "overwrite_if_duplicates")]
    pub abort_if_duplicates: bool,

    /// Overwrite with the last value if duplicate SSM parameter names are encountered
    #[arg(long)]
    pub overwrite_if_duplicates: bool,

    /// Parameters requested per page
    #[arg(
        long,
        env = "SSM_STARTER_PAGE_SIZE",
        default_value_t = DEFAULT_PAGE_SIZE,
        value_parser = clap::value_parser!(i32).range(1..=10)
    )]
    pub page_size: i32,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// The command to run after loading SSM parameters (consumes the rest of the line)
    #[arg(
        long,
        value_name = "COMMAND",
        required = true,
        num_args = 1..,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}

impl Cli {
    pub fn policy(&self) -> DuplicatePolicy {
        DuplicatePolicy::from_flags(self.abort_if_duplicates, self.overwrite_if_duplicates)
    }

    /// The load-and-launch request described by the arguments.
    pub fn request(&self) -> Request {
        Request::new(self.ssm_names.clone(), self.command.join(" "))
            .with_policy(self.policy())
            .with_page_size(self.page_size)
    }
}

/// Execute the parsed command line, returning the exit code to use.
pub fn execute(cli: &Cli) -> crate::error::Result<i32> {
    run::execute(&cli.request())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("ssm-starter").chain(args.iter().copied()))
    }

    #[test]
    fn test_parse_minimal() {
        let cli = parse(&["--ssm-name", "/dev/app", "--command", "echo"]).unwrap();
        assert_eq!(cli.ssm_names, vec!["/dev/app"]);
        assert_eq!(cli.policy(), DuplicatePolicy::Skip);
        assert_eq!(cli.request().command, "echo");
        assert_eq!(cli.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_parse_repeated_names_keep_order() {
        let cli = parse(&[
            "--ssm-name",
            "/dev/app",
            "--ssm-name",
            "/dev/global",
            "--command",
            "true",
        ])
        .unwrap();
        assert_eq!(cli.ssm_names, vec!["/dev/app", "/dev/global"]);
    }

    #[test]
    fn test_command_consumes_remainder() {
        let cli = parse(&[
            "--ssm-name",
            "/dev/app",
            "--command",
            "sh",
            "-c",
            "env | grep TEST",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(cli.request().command, "sh -c env | grep TEST --verbose");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_policy_flags() {
        let cli = parse(&[
            "--ssm-name",
            "/a",
            "--abort-if-duplicates",
            "--command",
            "true",
        ])
        .unwrap();
        assert_eq!(cli.policy(), DuplicatePolicy::Abort);

        let cli = parse(&[
            "--ssm-name",
            "/a",
            "--overwrite-if-duplicates",
            "--command",
            "true",
        ])
        .unwrap();
        assert_eq!(cli.policy(), DuplicatePolicy::Overwrite);
    }

    #[test]
    fn test_policy_flags_are_exclusive() {
        assert!(parse(&[
            "--ssm-name",
            "/a",
            "--abort-if-duplicates",
            "--overwrite-if-duplicates",
            "--command",
            "true",
        ])
        .is_err());
    }

    #[test]
    fn test_required_arguments() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["--ssm-name", "/a"]).is_err());
        assert!(parse(&["--command", "echo"]).is_err());
    }

    #[test]
    fn test_page_size_bounds() {
        assert!(parse(&["--ssm-name", "/a", "--page-size", "0", "--command", "x"]).is_err());
        assert!(parse(&["--ssm-name", "/a", "--page-size", "11", "--command", "x"]).is_err());
        let cli = parse(&["--ssm-name", "/a", "--page-size", "5", "--command", "x"]).unwrap();
        assert_eq!(cli.page_size, 5);
    }
}
