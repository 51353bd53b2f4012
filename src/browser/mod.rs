//! A small stateful browser: one cookie jar, one current page.
//!
//! Every navigation replaces the current page, and relative links and
//! form actions resolve against it.

pub mod form;

use std::sync::LazyLock;

use regex::Regex;
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::Url;
use select::document::Document;
use select::predicate::{Attr, Name, Predicate};
use tracing::debug;

use crate::error::BrowseError;
pub use form::{Form, Method};

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Collapse runs of whitespace and trim, the way link texts are compared.
#[must_use]
pub fn normalize_text(text: &str) -> String {
    WHITESPACE.replace_all(text.trim(), " ").into_owned()
}

#[derive(Debug, Clone)]
pub struct Page {
    pub url: Url,
    pub body: String,
}

impl Page {
    #[must_use]
    pub const fn new(url: Url, body: String) -> Self {
        Self { url, body }
    }

    pub fn resolve(&self, href: &str) -> Result<Url, BrowseError> {
        self.url
            .join(href)
            .map_err(|e| BrowseError::InvalidUrl(format!("{href}: {e}")))
    }

    /// Href of the first link whose text equals `text`.
    #[must_use]
    pub fn find_link(&self, text: &str) -> Option<String> {
        let wanted = normalize_text(text);
        let document = Document::from(self.body.as_str());
        document
            .find(Name("a").and(Attr("href", ())))
            .find(|a| normalize_text(&a.text()) == wanted)
            .and_then(|a| a.attr("href").map(String::from))
    }

    #[must_use]
    pub fn forms(&self) -> Vec<Form> {
        Form::parse_all(&self.body)
    }
}

pub struct Browser {
    client: Client,
    page: Option<Page>,
}

impl Browser {
    pub fn new(user_agent: &str) -> Result<Self, BrowseError> {
        let client = ClientBuilder::new()
            .cookie_store(true)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, page: None })
    }

    pub fn page(&self) -> Result<&Page, BrowseError> {
        self.page.as_ref().ok_or(BrowseError::NoPage)
    }

    fn resolve(&self, href: &str) -> Result<Url, BrowseError> {
        match &self.page {
            Some(page) => page.resolve(href),
            None => Url::parse(href).map_err(|e| BrowseError::InvalidUrl(format!("{href}: {e}"))),
        }
    }

    fn load(&mut self, response: reqwest::blocking::Response) -> Result<(), BrowseError> {
        let response = response.error_for_status()?;
        let url = response.url().clone();
        let body = response.text()?;
        debug!(%url, bytes = body.len(), "page loaded");
        self.page = Some(Page::new(url, body));
        Ok(())
    }

    /// GET `href`, relative to the current page if there is one.
    pub fn open(&mut self, href: &str) -> Result<(), BrowseError> {
        let url = self.resolve(href)?;
        debug!(%url, "open");
        let response = self.client.get(url).send()?;
        self.load(response)
    }

    pub fn follow_link(&mut self, text: &str) -> Result<(), BrowseError> {
        let href = self
            .page()?
            .find_link(text)
            .ok_or_else(|| BrowseError::LinkNotFound(text.to_string()))?;
        debug!(link = text, %href, "follow");
        self.open(&href)
    }

    /// First form on the current page carrying `class`.
    pub fn form_by_class(&self, class: &str) -> Result<Form, BrowseError> {
        self.page()?
            .forms()
            .into_iter()
            .find(|f| f.has_class(class))
            .ok_or_else(|| BrowseError::FormNotFound(format!("class {class}")))
    }

    /// The `nr`-th form on the current page, counting from zero.
    pub fn form_nr(&self, nr: usize) -> Result<Form, BrowseError> {
        self.page()?
            .forms()
            .into_iter()
            .nth(nr)
            .ok_or_else(|| BrowseError::FormNotFound(format!("nr {nr}")))
    }

    pub fn submit(&mut self, form: &Form) -> Result<(), BrowseError> {
        let page = self.page()?;
        let mut url = match &form.action {
            Some(action) => page.resolve(action)?,
            None => page.url.clone(),
        };
        let fields = form.fields();
        debug!(%url, method = ?form.method, fields = fields.len(), "submit");
        let response = match form.method {
            Method::Get => {
                url.set_query(None);
                self.client.get(url).query(&fields).send()?
            }
            Method::Post => self.client.post(url).form(&fields).send()?,
        };
        self.load(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(body: &str) -> Page {
        Page::new(
            Url::parse("https://portal.test/de/domains/").unwrap(),
            body.into(),
        )
    }

    #[test]
    fn link_text_ignores_layout_whitespace() {
        let p = page("<a href=\"dns\">\n  DNS-Verwaltung\n</a>");
        assert_eq!(p.find_link("DNS-Verwaltung").as_deref(), Some("dns"));
    }

    #[test]
    fn link_without_href_is_skipped() {
        let p = page(r#"<a>Domains</a><a href="/de/domains">Domains</a>"#);
        assert_eq!(p.find_link("Domains").as_deref(), Some("/de/domains"));
    }

    #[test]
    fn relative_href_resolves_against_page() {
        let p = page("");
        assert_eq!(
            p.resolve("dns?id=4").unwrap().as_str(),
            "https://portal.test/de/domains/dns?id=4"
        );
    }
}
