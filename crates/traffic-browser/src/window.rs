use traffic_core::HostWindow;

/// Host window of a Chrome app-mode shell
///
/// Chrome derives the window caption from the page, so the title is held
/// here and pushed into the page once it has loaded.
#[derive(Debug, Default)]
pub struct ChromeWindow {
    title: String,
}

impl ChromeWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl HostWindow for ChromeWindow {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }
}
