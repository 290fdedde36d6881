// crates/split_files/src/config.rs

use std::env;
use std::io;

use write_file_blocks::PathResolver;

use crate::FailurePolicy;

/// Environment variable that turns on fail-fast, like `--fail-fast`.
pub const FAIL_FAST_ENV: &str = "SPLIT_FILES_FAIL_FAST";
/// Environment variable that turns on debug logging, like `--verbose`.
pub const VERBOSE_ENV: &str = "SPLIT_FILES_VERBOSE";

/// Runtime configuration composed from CLI + environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub resolver: PathResolver,
    pub fail_fast: bool,
    pub verbose: bool,
}

impl AppConfig {
    /// Combines the CLI flags with their environment counterparts; either
    /// source can enable an option. Paths resolve against the current
    /// working directory.
    pub fn from_cli_and_env(fail_fast: bool, verbose: bool) -> io::Result<Self> {
        Ok(Self {
            resolver: PathResolver::from_env()?,
            fail_fast: fail_fast || env_flag(FAIL_FAST_ENV),
            verbose: verbose || env_flag(VERBOSE_ENV),
        })
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        if self.fail_fast {
            FailurePolicy::FailFast
        } else {
            FailurePolicy::Continue
        }
    }
}

fn env_flag(name: &str) -> bool {
    flag_enabled(env::var(name).ok().as_deref())
}

/// Any value other than empty, `0` or `false` counts as set.
fn flag_enabled(value: Option<&str>) -> bool {
    match value.map(str::trim) {
        None | Some("") | Some("0") => false,
        Some(v) => !v.eq_ignore_ascii_case("false"),
    }
}
