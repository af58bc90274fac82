//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an ssm-starter command with a predictable environment.
    ///
    /// Returns a Command configured with:
    /// - `AWS_REGION` set, `AWS_ENV` unset
    /// - Colors disabled
    /// - Current directory set to the test directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("ssm-starter").expect("failed to find ssm-starter binary");
        cmd.env("AWS_REGION", "us-east-1");
        cmd.env_remove("AWS_DEFAULT_REGION");
        cmd.env_remove("AWS_ENV");
        cmd.env_remove("SSM_STARTER_LOG");
        cmd.env_remove("SSM_STARTER_PAGE_SIZE");
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Run with the given `--ssm-name` values and a command that leaves a marker file.
    pub fn start(&self, names: &[&str]) -> Output {
        let mut cmd = self.cmd();
        for name in names {
            cmd.args(["--ssm-name", name]);
        }
        cmd.args(["--command", "touch", MARKER])
            .output()
            .expect("failed to run ssm-starter")
    }
}

/// File created by the command launched from [`Test::start`].
pub const MARKER: &str = "launched";
