//! Open Graph metadata scraping.
//!
//! Fetches a page and pulls the tags a link preview is built from:
//! `og:*` properties first, `twitter:*` equivalents as fallback, then the
//! plain `<title>` element. A page with no metadata at all still yields a
//! usable `OgData` with the host as its title, because the mockups must
//! render something for every URL a user pastes.

use scraper::{Html, Selector};

use crate::error::PreviewError;
use crate::models::{AppConfig, OgData};
use crate::utils::url::{add_protocol, clean_url};

/// Scrapes Open Graph metadata from web pages
pub struct OgScraper {
    client: reqwest::Client,
}

impl OgScraper {
    /// Create a scraper with the configured timeout and user agent.
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.fetch_timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { client })
    }

    /// Fetch a page and extract its Open Graph metadata.
    ///
    /// The URL may omit its scheme; `https://` is assumed. Redirects are
    /// followed and the final URL is what relative image URLs resolve
    /// against.
    pub async fn fetch(&self, url: &str) -> Result<OgData, PreviewError> {
        let url = add_protocol(url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| PreviewError::Fetch {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PreviewError::UpstreamStatus {
                url,
                status: status.as_u16(),
            });
        }

        // Redirects may have moved us; relative og:image resolves from here
        let final_url = response.url().to_string();

        let body = response
            .text()
            .await
            .map_err(|source| PreviewError::Fetch {
                url: url.clone(),
                source,
            })?;

        let data = Self::parse(&body, &final_url);
        tracing::debug!(
            url = %final_url,
            title = %data.title,
            has_image = data.image.is_some(),
            "Scraped Open Graph metadata"
        );

        Ok(data)
    }

    /// Extract Open Graph metadata from an HTML document.
    pub fn parse(html: &str, page_url: &str) -> OgData {
        let doc = Html::parse_document(html);

        let title = meta_content(&doc, "og:title")
            .or_else(|| meta_name_content(&doc, "twitter:title"))
            .or_else(|| title_element(&doc))
            .unwrap_or_else(|| clean_url(page_url).to_string());

        let description = meta_content(&doc, "og:description")
            .or_else(|| meta_name_content(&doc, "twitter:description"))
            .or_else(|| meta_name_content(&doc, "description"));

        let image = meta_content(&doc, "og:image")
            .or_else(|| meta_content(&doc, "og:image:url"))
            .or_else(|| meta_name_content(&doc, "twitter:image"))
            .map(|src| resolve_image_url(&src, page_url));

        OgData {
            title,
            description,
            image,
            site_name: meta_content(&doc, "og:site_name"),
            og_type: meta_content(&doc, "og:type"),
            url: page_url.to_string(),
        }
    }
}

/// Content of a `<meta property="...">` tag.
fn meta_content(doc: &Html, property: &str) -> Option<String> {
    select_content(doc, &format!(r#"meta[property="{property}"]"#))
}

/// Content of a `<meta name="...">` tag (Twitter cards, plain description).
fn meta_name_content(doc: &Html, name: &str) -> Option<String> {
    select_content(doc, &format!(r#"meta[name="{name}"]"#))
}

fn select_content(doc: &Html, selector: &str) -> Option<String> {
    // Selectors are built from fixed tag names; parse cannot fail for them
    let sel = Selector::parse(selector).ok()?;
    doc.select(&sel)
        .find_map(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn title_element(doc: &Html) -> Option<String> {
    let sel = Selector::parse("title").ok()?;
    doc.select(&sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Resolve a possibly relative image reference against the page URL.
fn resolve_image_url(src: &str, page_url: &str) -> String {
    if src.starts_with("http://") || src.starts_with("https://") {
        return src.to_string();
    }
    if let Some(rest) = src.strip_prefix("//") {
        return format!("https://{rest}");
    }
    match reqwest::Url::parse(page_url).and_then(|base| base.join(src)) {
        Ok(url) => url.to_string(),
        Err(e) => {
            tracing::warn!(src, page_url, error = %e, "Could not resolve image URL");
            src.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(head: &str) -> String {
        format!("<html><head>{head}</head><body><p>hi</p></body></html>")
    }

    #[test]
    fn test_parse_full_og_tags() {
        let html = page(concat!(
            r#"<meta property="og:title" content="The AI workspace">"#,
            r#"<meta property="og:description" content="One space for work">"#,
            r#"<meta property="og:image" content="https://cdn.notion.so/front.png">"#,
            r#"<meta property="og:site_name" content="Notion">"#,
            r#"<meta property="og:type" content="website">"#,
        ));
        let data = OgScraper::parse(&html, "https://notion.so");

        assert_eq!(data.title, "The AI workspace");
        assert_eq!(data.description.as_deref(), Some("One space for work"));
        assert_eq!(
            data.image.as_deref(),
            Some("https://cdn.notion.so/front.png")
        );
        assert_eq!(data.site_name.as_deref(), Some("Notion"));
        assert_eq!(data.og_type.as_deref(), Some("website"));
    }

    #[test]
    fn test_parse_twitter_fallbacks() {
        let html = page(concat!(
            r#"<meta name="twitter:title" content="Tweet title">"#,
            r#"<meta name="twitter:image" content="https://pbs.example/img.jpg">"#,
        ));
        let data = OgScraper::parse(&html, "https://example.com");

        assert_eq!(data.title, "Tweet title");
        assert_eq!(data.image.as_deref(), Some("https://pbs.example/img.jpg"));
    }

    #[test]
    fn test_parse_title_element_fallback() {
        let html = page("<title>  Plain page  </title>");
        let data = OgScraper::parse(&html, "https://example.com");
        assert_eq!(data.title, "Plain page");
    }

    #[test]
    fn test_parse_bare_page_uses_host() {
        let data = OgScraper::parse("<html></html>", "https://example.com/deep/path");
        assert_eq!(data.title, "example.com");
        assert!(data.image.is_none());
    }

    #[test]
    fn test_og_tags_win_over_twitter() {
        let html = page(concat!(
            r#"<meta property="og:title" content="OG wins">"#,
            r#"<meta name="twitter:title" content="Twitter loses">"#,
        ));
        let data = OgScraper::parse(&html, "https://example.com");
        assert_eq!(data.title, "OG wins");
    }

    #[test]
    fn test_relative_image_resolves_against_page() {
        let html = page(r#"<meta property="og:image" content="/assets/card.png">"#);
        let data = OgScraper::parse(&html, "https://example.com/blog/post");
        assert_eq!(
            data.image.as_deref(),
            Some("https://example.com/assets/card.png")
        );
    }

    #[test]
    fn test_scheme_relative_image() {
        let html = page(r#"<meta property="og:image" content="//cdn.example.com/a.png">"#);
        let data = OgScraper::parse(&html, "https://example.com");
        assert_eq!(
            data.image.as_deref(),
            Some("https://cdn.example.com/a.png")
        );
    }

    #[test]
    fn test_empty_content_attribute_ignored() {
        let html = page(concat!(
            r#"<meta property="og:title" content="">"#,
            "<title>Backup</title>",
        ));
        let data = OgScraper::parse(&html, "https://example.com");
        assert_eq!(data.title, "Backup");
    }
}
