use std::time::Duration;

use anyhow::Result;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::{error, info, warn};

const MAX_RETRIES: u32 = 3;
const BASE_BACKOFF_SECS: u64 = 1;
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// Subtrees that carry no visible prose.
const SKIP_TAGS: &[&str] = &["script", "style", "noscript", "svg", "iframe", "head"];

static SELECTOR_LINKS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// One fetched page, reduced to what the extractors match against: visible
/// text (with a lowercased copy for case-insensitive keyword checks) and the
/// page's anchor links.
#[derive(Debug, Clone)]
pub struct Page {
    pub text: String,
    lower: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone)]
pub struct Link {
    pub text: String,
    pub url: String,
}

impl Page {
    pub fn from_html(html: &str) -> Self {
        let document = Html::parse_document(html);

        let mut text = String::new();
        collect_text(document.root_element(), &mut text);

        let links = document
            .select(&SELECTOR_LINKS)
            .filter_map(|el| {
                let url = el.value().attr("href")?.to_string();
                let text = el.text().collect::<String>().trim().to_string();
                Some(Link { text, url })
            })
            .collect();

        Self::assemble(text, links)
    }

    /// Build a page straight from plain text (no links).
    pub fn from_text(text: &str) -> Self {
        Self::assemble(text.to_string(), Vec::new())
    }

    fn assemble(text: String, links: Vec<Link>) -> Self {
        let lower = text.to_lowercase();
        Self { text, lower, links }
    }

    /// Case-sensitive literal containment, for profile-known strings.
    pub fn contains(&self, literal: &str) -> bool {
        self.text.contains(literal)
    }

    /// Case-insensitive keyword containment.
    pub fn contains_ci(&self, keyword: &str) -> bool {
        self.lower.contains(&keyword.to_lowercase())
    }
}

fn collect_text(el: ElementRef, out: &mut String) {
    for node in el.children() {
        if let Some(child) = ElementRef::wrap(node) {
            if !SKIP_TAGS.contains(&child.value().name()) {
                collect_text(child, out);
            }
        } else if let Some(text) = node.value().as_text() {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                out.push_str(trimmed);
                out.push('\n');
            }
        }
    }
}

/// The seam extractors fetch through. Tests substitute a stub; production
/// uses [`PageFetcher`].
pub trait PageSource {
    async fn fetch_page(&self, url: &str) -> Option<Page>;
}

/// Reusable HTTP client with retry. A non-2xx response or transport failure
/// counts as a failed attempt; after the retry budget is exhausted the page
/// is reported absent, never as an error.
pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    async fn try_fetch(&self, url: &str) -> Result<String, reqwest::Error> {
        let response = self.client.get(url).send().await?;
        let response = response.error_for_status()?;
        response.text().await
    }
}

impl PageSource for PageFetcher {
    async fn fetch_page(&self, url: &str) -> Option<Page> {
        for attempt in 0..MAX_RETRIES {
            info!("Fetching: {} (attempt {})", url, attempt + 1);
            match self.try_fetch(url).await {
                Ok(body) => return Some(Page::from_html(&body)),
                Err(e) => {
                    warn!("Failed to fetch {}: {}", url, e);
                    if attempt + 1 < MAX_RETRIES {
                        let backoff = Duration::from_secs(BASE_BACKOFF_SECS << attempt);
                        tokio::time::sleep(backoff).await;
                    }
                }
            }
        }
        error!("Max retries exceeded for {}", url);
        None
    }
}
