// crates/write_file_blocks/src/path_resolver.rs

use std::env;
use std::io;
use std::path::PathBuf;

/// Turns the raw path text of a marker line into the file path to write.
///
/// A leading `~` (alone, or followed by a separator) expands to the home
/// directory. Relative results are joined onto `base_dir`; absolute ones are
/// used as is. Paths are not otherwise checked, so `..` components and
/// absolute targets are honored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    base_dir: PathBuf,
    home_dir: Option<PathBuf>,
}

impl PathResolver {
    pub fn new(base_dir: impl Into<PathBuf>, home_dir: Option<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            home_dir,
        }
    }

    /// Resolver rooted at the current working directory, with the home
    /// directory taken from `HOME` (or `USERPROFILE`).
    pub fn from_env() -> io::Result<Self> {
        Ok(Self::new(env::current_dir()?, home_dir_from_env()))
    }

    pub fn resolve(&self, raw: &str) -> PathBuf {
        let expanded = self.expand_tilde(raw);
        if expanded.is_absolute() {
            expanded
        } else {
            self.base_dir.join(expanded)
        }
    }

    fn expand_tilde(&self, raw: &str) -> PathBuf {
        // `~user` forms are left alone.
        if let Some(home) = &self.home_dir {
            if raw == "~" {
                return home.clone();
            }
            if let Some(rest) = strip_home_prefix(raw) {
                return home.join(rest.trim_start_matches(is_separator));
            }
        }
        PathBuf::from(raw)
    }
}

fn strip_home_prefix(raw: &str) -> Option<&str> {
    let rest = raw.strip_prefix('~')?;
    rest.starts_with(is_separator).then_some(rest)
}

fn is_separator(c: char) -> bool {
    c == '/' || (cfg!(windows) && c == '\\')
}

fn home_dir_from_env() -> Option<PathBuf> {
    env::var_os("HOME")
        .or_else(|| env::var_os("USERPROFILE"))
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
