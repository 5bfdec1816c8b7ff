use crate::{Error, Result};
use chromiumoxide::browser::Browser;
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;
use url::Url;

const CONNECT_ATTEMPTS: u32 = 5;
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// DevTools endpoint of a locally launched Chrome
pub struct DevToolsSession {
    debugging_port: u16,
}

impl DevToolsSession {
    pub fn new(debugging_port: u16) -> Self {
        Self { debugging_port }
    }

    fn endpoint(&self) -> String {
        format!("http://localhost:{}", self.debugging_port)
    }

    /// Connect, retrying while Chrome is still starting up
    pub async fn connect(&self) -> Result<DevToolsConnection> {
        let endpoint = self.endpoint();
        let mut retries = CONNECT_ATTEMPTS;

        let (browser, mut handler) = loop {
            tracing::debug!("Attempting DevTools connection to {}...", endpoint);
            match Browser::connect(&endpoint).await {
                Ok(result) => break result,
                Err(e) => {
                    retries -= 1;
                    if retries == 0 {
                        return Err(Error::DevTools(format!(
                            "Failed to connect to Chrome after {} attempts: {}",
                            CONNECT_ATTEMPTS, e
                        )));
                    }
                    tracing::debug!("DevTools connection failed, retrying... ({} left)", retries);
                    tokio::time::sleep(RETRY_DELAY).await;
                }
            }
        };
        tracing::debug!("DevTools connection established");

        // The handler has to be polled for any command to complete
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("DevTools handler event error (continuing): {}", e);
                }
            }
        });

        Ok(DevToolsConnection {
            browser,
            handler_task,
        })
    }
}

/// Live DevTools connection; stops the event handler on drop
pub struct DevToolsConnection {
    browser: Browser,
    handler_task: JoinHandle<()>,
}

impl DevToolsConnection {
    /// The page of our app window, identified by the URL it was opened with
    ///
    /// Chrome may not have created it yet right after connecting. Any other
    /// page on the endpoint belongs to someone else and is never returned.
    pub async fn app_page(&self, launched_url: &str) -> Result<Page> {
        for _ in 0..CONNECT_ATTEMPTS {
            for page in self.browser.pages().await? {
                let page_url = page.url().await?.unwrap_or_default();
                if page_matches(launched_url, &page_url) {
                    return Ok(page);
                }
                tracing::debug!("Skipping unrelated page {}", page_url);
            }
            tokio::time::sleep(RETRY_DELAY).await;
        }

        Err(Error::DevTools(format!(
            "No page showing {} on this DevTools endpoint",
            launched_url
        )))
    }
}

/// Whether a page at `page_url` is the one opened for `launched_url`
///
/// Loads may redirect (scheme upgrade, trailing slash, path), so URLs with a
/// host match on the host; others have to match exactly.
fn page_matches(launched_url: &str, page_url: &str) -> bool {
    if launched_url == page_url {
        return true;
    }

    match (Url::parse(launched_url), Url::parse(page_url)) {
        (Ok(launched), Ok(page)) => match (launched.host_str(), page.host_str()) {
            (Some(expected), Some(actual)) => expected.eq_ignore_ascii_case(actual),
            _ => false,
        },
        _ => false,
    }
}

impl Drop for DevToolsConnection {
    fn drop(&mut self) {
        self.handler_task.abort();
    }
}

/// Navigate `page` to `url` and wait for the load to settle
pub async fn navigate(page: &Page, url: &str) -> Result<()> {
    tracing::debug!("Navigating page to {}", url);
    page.goto(url).await?;
    Ok(())
}

/// Run a script built by [`title_script`] once the page has loaded
///
/// Chrome shows the page title as the app window caption.
pub async fn apply_title_script(page: &Page, script: &str) -> Result<()> {
    page.wait_for_navigation().await?;
    page.evaluate(script.to_string()).await?;
    Ok(())
}

/// Script that sets `document.title` to `title`
pub fn title_script(title: &str) -> Result<String> {
    Ok(format!("document.title = {};", serde_json::to_string(title)?))
}
