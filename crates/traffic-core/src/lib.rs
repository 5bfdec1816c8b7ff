pub mod args;
pub mod config;
pub mod error;
pub mod host;
pub mod launcher;

pub use args::{ArgumentList, LaunchParameters};
pub use config::{DEFAULT_URL, ResolvedConfig};
pub use error::{Error, Result};
pub use host::{BrowserSurface, Collaborator, Host, HostWindow};
pub use launcher::{LaunchState, Launcher};
