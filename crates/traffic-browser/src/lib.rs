//! Chrome-backed host window and browser surface for the traffic launcher

mod chrome_finder;
mod devtools;
mod error;
mod launcher;
mod profile;
mod shell;
mod surface;
mod window;

pub use chrome_finder::ChromeFinder;
pub use error::{Error, Result};
pub use launcher::{ChromeLauncher, DEFAULT_DEBUGGING_PORT};
pub use profile::ProfileManager;
pub use shell::{ChromeShell, ShellExit};
pub use surface::ChromeSurface;
pub use window::ChromeWindow;
