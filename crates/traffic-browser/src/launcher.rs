use crate::{Error, Result};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

pub const DEFAULT_DEBUGGING_PORT: u16 = 9222;

/// Spawns Chrome as a single-window app pointed at a URL
pub struct ChromeLauncher {
    chrome_path: PathBuf,
    profile_path: PathBuf,
    debugging_port: u16,
}

impl ChromeLauncher {
    pub fn new(chrome_path: PathBuf, profile_path: PathBuf) -> Self {
        Self {
            chrome_path,
            profile_path,
            debugging_port: DEFAULT_DEBUGGING_PORT,
        }
    }

    pub fn with_debugging_port(mut self, port: u16) -> Self {
        self.debugging_port = port;
        self
    }

    /// Start Chrome showing `url`
    pub fn launch(&self, url: &str) -> Result<Child> {
        tracing::debug!(
            "Spawning {} (profile {})",
            self.chrome_path.display(),
            self.profile_path.display()
        );

        Command::new(&self.chrome_path)
            .args(self.build_args(url))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Browser(format!("Failed to launch Chrome: {}", e)))
    }

    /// Chrome command-line arguments
    ///
    /// The URL is handed over as given. App mode drops the tab strip and
    /// address bar so the page fills the window.
    fn build_args(&self, url: &str) -> Vec<String> {
        vec![
            format!("--remote-debugging-port={}", self.debugging_port),
            "--no-first-run".to_string(),
            "--no-default-browser-check".to_string(),
            format!("--user-data-dir={}", self.profile_path.display()),
            format!("--app={}", url),
        ]
    }

    pub fn debugging_port(&self) -> u16 {
        self.debugging_port
    }
}
