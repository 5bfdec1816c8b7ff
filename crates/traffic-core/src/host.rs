use std::fmt;

/// The top-level window supplied by the application shell
pub trait HostWindow {
    /// Set the window title. Last write wins.
    fn set_title(&mut self, title: &str);
}

/// An embedded view that can navigate to a URL
pub trait BrowserSurface {
    /// Request navigation to `url`
    ///
    /// Returns once the request is issued; the navigation itself proceeds
    /// independently and its outcome is not reported back.
    fn load(&mut self, url: &str, referrer: Option<&str>, post_data: Option<&[u8]>);
}

/// The environment the launcher runs in
///
/// Lookups return `None` when the shell has no such element.
pub trait Host {
    fn window(&mut self) -> Option<&mut dyn HostWindow>;

    fn browser(&mut self) -> Option<&mut dyn BrowserSurface>;
}

/// Collaborators the launcher looks up on the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    Window,
    Browser,
}

impl Collaborator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collaborator::Window => "host window",
            Collaborator::Browser => "browser surface",
        }
    }
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
