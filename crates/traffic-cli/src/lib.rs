use clap::Args;
use std::path::PathBuf;
use traffic_browser::DEFAULT_DEBUGGING_PORT;
use traffic_core::{ArgumentList, LaunchParameters};

pub mod commands;

/// Options for opening the app window
#[derive(Args, Debug, Clone, Default)]
pub struct LaunchArgs {
    /// Page to open [default: http://www.google.com]
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,

    /// Window title (left to the page when omitted)
    #[arg(long, value_name = "TITLE")]
    pub title: Option<String>,

    /// Path to the Chrome or Chromium binary
    #[arg(long, value_name = "PATH", env = "TRAFFIC_CHROME_PATH")]
    pub chrome_path: Option<PathBuf>,

    /// Named persistent profile, stored under ~/.traffic/profiles
    #[arg(long, value_name = "NAME")]
    pub profile: Option<String>,

    /// Use a temporary profile (the default; overrides --profile)
    #[arg(long)]
    pub temp: bool,

    /// Chrome remote debugging port
    #[arg(long, value_name = "PORT", env = "TRAFFIC_DEBUG_PORT", default_value_t = DEFAULT_DEBUGGING_PORT)]
    pub port: u16,

    /// Return as soon as the window is up instead of waiting for it to close
    #[arg(long)]
    pub no_wait: bool,
}

impl ArgumentList for LaunchArgs {
    fn flag_value(&self, name: &str) -> Option<&str> {
        if name.eq_ignore_ascii_case(LaunchParameters::URL_FLAG) {
            self.url.as_deref()
        } else if name.eq_ignore_ascii_case(LaunchParameters::TITLE_FLAG) {
            self.title.as_deref()
        } else {
            None
        }
    }
}
