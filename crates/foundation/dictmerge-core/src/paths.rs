//! Platform-dependent dictionary locations
//!
//! Every location is a pure function of an [`Environment`] snapshot and a
//! [`Platform`]. Unset variables read as the empty string and paths are built
//! by plain string formatting, so a missing `HOME` produces a best-effort path
//! (e.g. `/AppData/Roaming`) instead of an error.

use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{info, warn};

/// Operating system family, as far as dictionary locations care
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux and every other Unix-like system
    Other,
}

impl Platform {
    /// Platform this binary was compiled for
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }
}

/// Snapshot of environment variables.
///
/// Captured once at startup so path resolution never reads ambient process
/// state halfway through a run.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: HashMap<String, String>,
}

impl Environment {
    /// Empty environment, every variable unset
    pub fn empty() -> Self {
        Self::default()
    }

    /// Capture the live process environment. Variables that are not valid
    /// UTF-8 are skipped and therefore read as unset.
    pub fn capture() -> Self {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    /// Builder-style setter, mostly for tests
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Value of `name`, or the empty string if it is not set
    pub fn value(&self, name: &str) -> String {
        self.vars.get(name).cloned().unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Resolves home, application data and IDE cache directories
#[derive(Debug, Clone)]
pub struct PathResolver {
    platform: Platform,
    env: Environment,
}

impl PathResolver {
    pub fn new(platform: Platform, env: Environment) -> Self {
        Self { platform, env }
    }

    /// Resolver for the running process
    pub fn from_process() -> Self {
        Self::new(Platform::current(), Environment::capture())
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Login name of the current user (`USERNAME` on Windows, `USER` elsewhere)
    pub fn user_name(&self) -> String {
        match self.platform {
            Platform::Windows => self.env.value("USERNAME"),
            _ => self.env.value("USER"),
        }
    }

    /// Home directory of the current user (`USERPROFILE` on Windows, `HOME` elsewhere)
    pub fn home_dir(&self) -> String {
        match self.platform {
            Platform::Windows => self.env.value("USERPROFILE"),
            _ => self.env.value("HOME"),
        }
    }

    /// Per-user application data root
    pub fn appdata_dir(&self) -> String {
        let home = self.home_dir();
        match self.platform {
            Platform::Windows => format!("{home}/AppData/Roaming"),
            Platform::MacOs => format!("{home}/Library/Application Support"),
            Platform::Other => home,
        }
    }

    /// JetBrains vendor directory inside the application data root.
    ///
    /// Returns `None` (and logs a warning) when the directory does not exist.
    pub fn jetbrains_appdata(&self) -> Option<PathBuf> {
        let dir = PathBuf::from(format!("{}/JetBrains", self.appdata_dir()));
        if !dir.is_dir() {
            warn!("JetBrains AppData directory {} is not found", dir.display());
            return None;
        }
        info!("JetBrains AppData dir: {}", dir.display());
        Some(dir)
    }

    /// Shared plain-text dictionary every run keeps in sync
    pub fn system_dictionary_path(&self) -> PathBuf {
        PathBuf::from(format!("{}/.idea/dictionaries/dictionary.dic", self.home_dir()))
    }

    /// Default lookup root taken from `PROJECTS`
    pub fn projects_dir(&self) -> String {
        self.env.value("PROJECTS")
    }
}
