// crates/markup-gate-session/src/http.rs
// ============================================================================
// Module: HTTP Session Driver
// Description: Blocking HTTP implementation of the WebSession capability.
// Purpose: Fetch pages, resolve selectors, and submit forms with strict
//          transport-fault classification.
// Dependencies: markup-gate-core, reqwest, scraper, url
// ============================================================================

//! ## Overview
//! The driver fetches pages with a blocking `reqwest` client and answers
//! element queries by re-parsing the stored HTML per operation. Element
//! handles record their selector and match index plus the navigation
//! generation that issued them; any navigation bumps the generation and
//! turns older handles stale. Transport classification is strict: only
//! failures without a delivered response map to `SessionError::Transport`;
//! an HTTP error status replaces the page like any other response.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::io::Read;
use std::time::Duration;

use markup_gate_core::ElementHandle;
use markup_gate_core::SessionError;
use markup_gate_core::WebSession;
use markup_gate_core::normalize_markup;
use reqwest::blocking::Client;
use reqwest::blocking::RequestBuilder;
use scraper::ElementRef;
use scraper::Html;
use tracing::debug;
use url::Url;

use crate::form::FormMethod;
use crate::form::parse_selector;
use crate::form::plan_submission;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the HTTP session driver.
///
/// # Invariants
/// - `timeout_ms` applies to the full request lifecycle of each attempt.
/// - `max_response_bytes` is a hard upper bound on page bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSessionConfig {
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
    /// User agent string for outbound requests.
    pub user_agent: String,
    /// Maximum response size allowed, in bytes.
    pub max_response_bytes: usize,
}

impl Default for HttpSessionConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            user_agent: concat!("markup-gate/", env!("CARGO_PKG_VERSION")).to_string(),
            max_response_bytes: 4 * 1024 * 1024,
        }
    }
}

// ============================================================================
// SECTION: Session State
// ============================================================================

/// The page currently loaded by the driver.
#[derive(Debug)]
struct Page {
    /// Effective URL after redirects, used to resolve form actions.
    url: Url,
    /// Raw HTML body as delivered.
    html: String,
}

/// Backing record of an issued element handle.
#[derive(Debug)]
struct HandleRecord {
    /// Selector expression the handle was located with.
    selector: String,
    /// Match index within the selector's result list.
    index: usize,
    /// Navigation generation the handle was issued under.
    generation: u64,
}

/// Blocking HTTP implementation of [`WebSession`].
pub struct HttpSession {
    /// HTTP client used for navigation and submissions.
    client: Client,
    /// Driver limits.
    config: HttpSessionConfig,
    /// Currently loaded page, if any.
    page: Option<Page>,
    /// Issued handles, indexed by token.
    handles: Vec<HandleRecord>,
    /// Navigation generation; bumped whenever the page is replaced.
    generation: u64,
    /// Pending form control overrides set via `set_value`, keyed by name.
    overrides: BTreeMap<String, String>,
}

impl HttpSession {
    /// Creates a session driver with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Driver`] when the HTTP client cannot be
    /// constructed.
    pub fn new(config: HttpSessionConfig) -> Result<Self, SessionError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|err| SessionError::Driver(format!("http client build failed: {err}")))?;
        Ok(Self {
            client,
            config,
            page: None,
            handles: Vec::new(),
            generation: 0,
            overrides: BTreeMap::new(),
        })
    }

    /// Executes a request and replaces the current page with its response.
    fn load(&mut self, request: RequestBuilder) -> Result<(), SessionError> {
        let response = request.send().map_err(classify)?;
        let url = response.url().clone();
        let status = response.status();
        let body = read_limited(response, self.config.max_response_bytes)?;
        debug!(%url, status = status.as_u16(), bytes = body.len(), "page loaded");
        self.page = Some(Page {
            url,
            html: body,
        });
        self.generation += 1;
        self.overrides.clear();
        Ok(())
    }

    /// Returns the current page or a driver fault when none is loaded.
    fn page(&self) -> Result<&Page, SessionError> {
        self.page
            .as_ref()
            .ok_or_else(|| SessionError::Driver("no page loaded".to_string()))
    }

    /// Validates a handle against the current navigation generation.
    fn record(&self, element: ElementHandle) -> Result<&HandleRecord, SessionError> {
        let record = self
            .handles
            .get(usize::try_from(element.token()).unwrap_or(usize::MAX))
            .ok_or(SessionError::StaleElement(element))?;
        if record.generation == self.generation {
            Ok(record)
        } else {
            Err(SessionError::StaleElement(element))
        }
    }

    /// Issues a handle for a selector match on the current page.
    fn issue(&mut self, selector: &str, index: usize) -> ElementHandle {
        self.handles.push(HandleRecord {
            selector: selector.to_string(),
            index,
            generation: self.generation,
        });
        ElementHandle::new(self.handles.len() as u64 - 1)
    }

    /// Resolves a validated record against a parsed document.
    fn resolve<'a>(
        doc: &'a Html,
        record: &HandleRecord,
        element: ElementHandle,
    ) -> Result<ElementRef<'a>, SessionError> {
        let selector = parse_selector(&record.selector)?;
        doc.select(&selector)
            .nth(record.index)
            .ok_or(SessionError::StaleElement(element))
    }
}

impl WebSession for HttpSession {
    fn visit(&mut self, url: &str) -> Result<(), SessionError> {
        let mut target = Url::parse(url)
            .map_err(|err| SessionError::Driver(format!("invalid url '{url}': {err}")))?;
        // The legacy entry point carries a fragment; it never goes on the wire.
        target.set_fragment(None);
        self.load(self.client.get(target))
    }

    fn page_markup(&self) -> Result<String, SessionError> {
        Ok(self.page()?.html.clone())
    }

    fn find_element(&mut self, selector: &str) -> Result<Option<ElementHandle>, SessionError> {
        let parsed = parse_selector(selector)?;
        let doc = Html::parse_document(&self.page()?.html);
        if doc.select(&parsed).next().is_none() {
            return Ok(None);
        }
        Ok(Some(self.issue(selector, 0)))
    }

    fn find_all_elements(&mut self, selector: &str) -> Result<Vec<ElementHandle>, SessionError> {
        let parsed = parse_selector(selector)?;
        let count = Html::parse_document(&self.page()?.html).select(&parsed).count();
        Ok((0..count).map(|index| self.issue(selector, index)).collect())
    }

    fn set_value(&mut self, element: ElementHandle, value: &str) -> Result<(), SessionError> {
        let record = self.record(element)?;
        let doc = Html::parse_document(&self.page()?.html);
        let control = Self::resolve(&doc, record, element)?;
        let name = control.value().attr("name").ok_or_else(|| {
            SessionError::Driver(format!("element {element} is not a named form control"))
        })?;
        let name = name.to_string();
        drop(doc);
        self.overrides.insert(name, value.to_string());
        Ok(())
    }

    fn press(&mut self, element: ElementHandle) -> Result<(), SessionError> {
        let record = self.record(element)?;
        let page = self.page()?;
        let doc = Html::parse_document(&page.html);
        let pressed = Self::resolve(&doc, record, element)?;
        let plan = plan_submission(pressed, &self.overrides)?;
        let action = match &plan.action {
            Some(action) => page
                .url
                .join(action)
                .map_err(|err| SessionError::Driver(format!("invalid form action: {err}")))?,
            None => page.url.clone(),
        };
        let request = match plan.method {
            FormMethod::Get => {
                let mut target = action;
                target
                    .query_pairs_mut()
                    .clear()
                    .extend_pairs(plan.fields.iter().map(|(k, v)| (k.as_str(), v.as_str())));
                self.client.get(target)
            }
            FormMethod::Post => self.client.post(action).form(&plan.fields),
        };
        drop(doc);
        self.load(request)
    }

    fn element_text(&self, element: ElementHandle) -> Result<String, SessionError> {
        let record = self.record(element)?;
        let doc = Html::parse_document(&self.page()?.html);
        let text = Self::resolve(&doc, record, element)?.text().collect::<String>();
        Ok(normalize_markup(&text).trim().to_string())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Classifies a request failure for the retry policy.
///
/// A failure without a delivered response is a transport fault; everything
/// else is a driver fault. Status-level errors never reach this point, the
/// driver treats any delivered page as success.
fn classify(err: reqwest::Error) -> SessionError {
    if err.is_builder() || err.is_redirect() {
        SessionError::Driver(err.to_string())
    } else {
        SessionError::Transport(err.to_string())
    }
}

/// Reads a response body under the configured byte limit.
fn read_limited(
    response: reqwest::blocking::Response,
    max_bytes: usize,
) -> Result<String, SessionError> {
    let mut buf = Vec::new();
    let limit = u64::try_from(max_bytes)
        .unwrap_or(u64::MAX)
        .saturating_add(1);
    response
        .take(limit)
        .read_to_end(&mut buf)
        .map_err(|err| SessionError::Transport(format!("failed to read response: {err}")))?;
    if buf.len() > max_bytes {
        return Err(SessionError::Driver("response exceeds size limit".to_string()));
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
