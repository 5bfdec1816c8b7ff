use crate::{ChromeLauncher, Error};
use std::process::{Child, ExitStatus};
use traffic_core::BrowserSurface;

/// Browser surface backed by a Chrome process
///
/// The first `load` spawns Chrome. Later loads while it is still alive only
/// record the URL; the shell navigates the running page to it.
pub struct ChromeSurface {
    launcher: ChromeLauncher,
    process: Option<Child>,
    launched_url: Option<String>,
    requested_url: Option<String>,
    pending_navigation: bool,
    launch_error: Option<Error>,
}

impl ChromeSurface {
    pub fn new(launcher: ChromeLauncher) -> Self {
        Self {
            launcher,
            process: None,
            launched_url: None,
            requested_url: None,
            pending_navigation: false,
            launch_error: None,
        }
    }

    /// URL of the most recent `load`
    pub fn requested_url(&self) -> Option<&str> {
        self.requested_url.as_deref()
    }

    /// URL Chrome was started with, which its app page shows first
    pub fn launched_url(&self) -> Option<&str> {
        self.launched_url.as_deref()
    }

    pub fn debugging_port(&self) -> u16 {
        self.launcher.debugging_port()
    }

    /// Exit status of the spawned Chrome, if it has already quit
    ///
    /// Chrome quits right away when another instance owns the profile or the
    /// debugging port, so a spawned process is not proof of a window.
    pub fn exit_status(&mut self) -> Option<ExitStatus> {
        let process = self.process.as_mut()?;
        match process.try_wait() {
            Ok(status) => status,
            Err(e) => {
                tracing::warn!("Could not query Chrome (pid {}): {}", process.id(), e);
                None
            }
        }
    }

    pub fn is_running(&mut self) -> bool {
        self.process.is_some() && self.exit_status().is_none()
    }

    pub(crate) fn take_process(&mut self) -> Option<Child> {
        self.process.take()
    }

    pub(crate) fn take_launch_error(&mut self) -> Option<Error> {
        self.launch_error.take()
    }

    /// URL the running page still has to be navigated to, if any
    pub(crate) fn take_pending_navigation(&mut self) -> Option<String> {
        if std::mem::take(&mut self.pending_navigation) {
            self.requested_url.clone()
        } else {
            None
        }
    }

    #[cfg(test)]
    pub(crate) fn attach_process(&mut self, child: Child, url: &str) {
        self.process = Some(child);
        self.launched_url = Some(url.to_string());
        self.requested_url = Some(url.to_string());
    }
}

impl BrowserSurface for ChromeSurface {
    fn load(&mut self, url: &str, referrer: Option<&str>, post_data: Option<&[u8]>) {
        if referrer.is_some() || post_data.is_some() {
            tracing::warn!("Chrome surface ignores referrer and post data for {}", url);
        }

        self.requested_url = Some(url.to_string());

        if self.is_running() {
            tracing::debug!("Chrome already running, queueing navigation to {}", url);
            self.pending_navigation = true;
            return;
        }

        match self.launcher.launch(url) {
            Ok(child) => {
                tracing::info!("Chrome started (pid {})", child.id());
                self.process = Some(child);
                self.launched_url = Some(url.to_string());
                self.pending_navigation = false;
            }
            Err(e) => {
                tracing::error!("{}", e);
                self.launch_error = Some(e);
            }
        }
    }
}
