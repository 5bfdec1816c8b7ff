use crate::{
    ArgumentList, Collaborator, Error, Host, LaunchParameters, ResolvedConfig, Result,
};

/// Whether the launch sequence has been triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchState {
    #[default]
    NotRun,
    Ran,
}

/// One-shot startup sequencing for the app shell
///
/// The host calls [`Launcher::on_launch`] once its window is ready. The
/// launcher resolves the launch arguments, titles the window and points the
/// browser surface at the resolved URL.
#[derive(Debug, Default)]
pub struct Launcher {
    state: LaunchState,
}

impl Launcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> LaunchState {
        self.state
    }

    /// Run the launch sequence against `host`
    ///
    /// Calling this again re-runs every side effect; hosts deliver the ready
    /// signal once.
    pub fn on_launch<A, H>(&mut self, args: &A, host: &mut H) -> Result<()>
    where
        A: ArgumentList + ?Sized,
        H: Host + ?Sized,
    {
        if self.state == LaunchState::Ran {
            tracing::warn!("Launch sequence triggered again, re-applying");
        }
        self.state = LaunchState::Ran;

        tracing::info!("Launching");

        let config = ResolvedConfig::resolve(LaunchParameters::extract(args));

        let window = host
            .window()
            .ok_or(Error::MissingCollaborator(Collaborator::Window))?;
        window.set_title(config.window_title());
        tracing::debug!("Window title set to {:?}", config.window_title());

        let browser = host
            .browser()
            .ok_or(Error::MissingCollaborator(Collaborator::Browser))?;
        browser.load(config.url(), None, None);
        tracing::info!("Loading {}", config.url());

        Ok(())
    }
}
