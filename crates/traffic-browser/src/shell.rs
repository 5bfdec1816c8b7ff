use crate::devtools::{self, DevToolsSession};
use crate::{ChromeLauncher, ChromeSurface, ChromeWindow, Result};
use traffic_core::{BrowserSurface, Host, HostWindow};

/// How the browser session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellExit {
    /// Chrome exited by itself, with its exit code if it had one
    Closed(Option<i32>),
    /// Ctrl+C was pressed and Chrome was stopped
    Interrupted,
    /// No browser process was running
    NotRunning,
}

/// Updates `present` pushes into the running app page
#[derive(Debug, Clone, PartialEq, Eq)]
struct PageSync {
    /// Identifies our page among everything on the DevTools endpoint
    launched_url: String,
    navigate_to: Option<String>,
    title_script: Option<String>,
}

/// App shell made of one Chrome app window and its page
pub struct ChromeShell {
    window: ChromeWindow,
    surface: ChromeSurface,
}

impl ChromeShell {
    pub fn new(launcher: ChromeLauncher) -> Self {
        Self {
            window: ChromeWindow::new(),
            surface: ChromeSurface::new(launcher),
        }
    }

    pub fn title(&self) -> &str {
        self.window.title()
    }

    pub fn surface(&self) -> &ChromeSurface {
        &self.surface
    }

    /// Bring the launched state on screen
    ///
    /// Fails only if Chrome could not be started. Title and navigation
    /// updates go over DevTools and are best effort.
    pub async fn present(&mut self) -> Result<()> {
        let Some(sync) = self.plan_sync()? else {
            return Ok(());
        };

        if let Err(e) = self.sync_page(&sync).await {
            tracing::warn!("Could not update the Chrome window: {}", e);
        }

        Ok(())
    }

    /// What has to be pushed into the app page over DevTools, if anything
    fn plan_sync(&mut self) -> Result<Option<PageSync>> {
        if let Some(err) = self.surface.take_launch_error() {
            return Err(err);
        }

        if let Some(status) = self.surface.exit_status() {
            tracing::warn!(
                "Chrome exited before its window came up (exit code: {}), \
                 another instance may own the profile or debugging port",
                status.code().unwrap_or(-1)
            );
            return Ok(None);
        }

        let Some(launched_url) = self.surface.launched_url().map(String::from) else {
            tracing::warn!("Nothing to present, no page was loaded");
            return Ok(None);
        };

        let navigate_to = self.surface.take_pending_navigation();
        let title_script = match self.window.title() {
            "" => None,
            title => Some(devtools::title_script(title)?),
        };

        if navigate_to.is_none() && title_script.is_none() {
            return Ok(None);
        }

        Ok(Some(PageSync {
            launched_url,
            navigate_to,
            title_script,
        }))
    }

    async fn sync_page(&self, sync: &PageSync) -> Result<()> {
        let connection = DevToolsSession::new(self.surface.debugging_port())
            .connect()
            .await?;
        let page = connection.app_page(&sync.launched_url).await?;

        if let Some(url) = &sync.navigate_to {
            devtools::navigate(&page, url).await?;
        }

        if let Some(script) = &sync.title_script {
            devtools::apply_title_script(&page, script).await?;
            tracing::debug!("Window title applied: {}", self.window.title());
        }

        Ok(())
    }

    /// Stop Chrome now if it is still running
    pub fn stop(&mut self) -> Result<ShellExit> {
        let Some(mut process) = self.surface.take_process() else {
            return Ok(ShellExit::NotRunning);
        };

        if process.try_wait()?.is_none() {
            tracing::info!("Stopping Chrome (pid {})", process.id());
            process.kill()?;
        }
        process.wait()?;

        Ok(ShellExit::Interrupted)
    }

    /// Block until Chrome exits, or stop it on Ctrl+C
    pub async fn wait_for_exit(&mut self) -> Result<ShellExit> {
        let Some(mut process) = self.surface.take_process() else {
            return Ok(ShellExit::NotRunning);
        };
        let pid = process.id();

        let mut wait_task = tokio::task::spawn_blocking(move || process.wait());

        tokio::select! {
            result = &mut wait_task => {
                let status = result.map_err(|e| std::io::Error::other(e.to_string()))??;
                tracing::info!("Chrome closed (exit code: {})", status.code().unwrap_or(-1));
                Ok(ShellExit::Closed(status.code()))
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, stopping Chrome");
                kill_process_by_pid(pid);
                let _ = wait_task.await;
                Ok(ShellExit::Interrupted)
            }
        }
    }
}

impl Host for ChromeShell {
    fn window(&mut self) -> Option<&mut dyn HostWindow> {
        Some(&mut self.window)
    }

    fn browser(&mut self) -> Option<&mut dyn BrowserSurface> {
        Some(&mut self.surface)
    }
}

fn kill_process_by_pid(pid: u32) {
    #[cfg(unix)]
    {
        use std::process::Command;
        let _ = Command::new("kill").arg(pid.to_string()).output();
    }

    #[cfg(windows)]
    {
        use std::process::Command;
        let _ = Command::new("taskkill")
            .args(["/PID", &pid.to_string(), "/F"])
            .output();
    }
}
