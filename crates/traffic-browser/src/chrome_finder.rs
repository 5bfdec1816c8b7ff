use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Executable names searched on `PATH` when no install location matches
const PATH_NAMES: &[&str] = &[
    "google-chrome",
    "google-chrome-stable",
    "chromium",
    "chromium-browser",
    "chrome",
];

/// Locates a Chrome or Chromium binary
pub struct ChromeFinder {
    custom_path: Option<PathBuf>,
}

impl ChromeFinder {
    pub fn new(custom_path: Option<PathBuf>) -> Self {
        Self { custom_path }
    }

    /// Find the browser binary
    ///
    /// An explicit path is authoritative: if it is unusable the search stops
    /// there. Otherwise platform install locations are tried, then `PATH`.
    pub fn find(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.custom_path {
            return validate_executable(path);
        }

        for path in install_locations() {
            if let Ok(found) = validate_executable(&path) {
                tracing::debug!("Found Chrome at install location {}", found.display());
                return Ok(found);
            }
        }

        for name in PATH_NAMES {
            if let Ok(found) = which::which(name) {
                tracing::debug!("Found Chrome on PATH as {}", name);
                return Ok(found);
            }
        }

        let checked = install_locations()
            .iter()
            .map(|p| p.display().to_string())
            .chain(PATH_NAMES.iter().map(|name| format!("{} (PATH)", name)))
            .collect::<Vec<_>>()
            .join(", ");

        Err(Error::NotFound(format!(
            "checked {}. Use --chrome-path to specify location.",
            checked
        )))
    }
}

fn install_locations() -> Vec<PathBuf> {
    #[cfg(target_os = "macos")]
    return vec![
        PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome"),
        PathBuf::from("/Applications/Chromium.app/Contents/MacOS/Chromium"),
    ];

    #[cfg(target_os = "linux")]
    return vec![
        PathBuf::from("/usr/bin/google-chrome"),
        PathBuf::from("/usr/bin/chromium"),
        PathBuf::from("/usr/bin/chromium-browser"),
        PathBuf::from("/snap/bin/chromium"),
    ];

    #[cfg(target_os = "windows")]
    return vec![
        PathBuf::from(r"C:\Program Files\Google\Chrome\Application\chrome.exe"),
        PathBuf::from(r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe"),
    ];

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    return vec![];
}

fn validate_executable(path: &Path) -> Result<PathBuf> {
    if !path.is_file() {
        return Err(Error::NotFound(format!("no file at {}", path.display())));
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = std::fs::metadata(path)?.permissions().mode();
        if mode & 0o111 == 0 {
            return Err(Error::Browser(format!(
                "Chrome binary not executable: {}",
                path.display()
            )));
        }
    }

    Ok(path.to_path_buf())
}
