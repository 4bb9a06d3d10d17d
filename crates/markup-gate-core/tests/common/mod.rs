// crates/markup-gate-core/tests/common/mod.rs
// ============================================================================
// Module: Core Test Helpers
// Description: Scripted in-memory session driver for submitter tests.
// Purpose: Exercise the round trip without any network or DOM backend.
// Dependencies: markup-gate-core
// ============================================================================

//! ## Overview
//! [`MockSession`] is a scripted [`WebSession`]: selectors resolve against
//! configured element texts, and visit/press can be primed with a number of
//! transport faults or a driver fault. Tests inspect the recorded calls to
//! verify retry behavior and submission contents.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use markup_gate_core::ElementHandle;
use markup_gate_core::SelectorMap;
use markup_gate_core::SessionError;
use markup_gate_core::WebSession;

/// Scripted session driver.
#[derive(Debug, Default)]
pub struct MockSession {
    /// Transport faults remaining before `visit` succeeds.
    pub visit_faults: u32,
    /// Transport faults remaining before `press` succeeds.
    pub press_faults: u32,
    /// When set, `press` fails with a non-transport driver fault.
    pub press_driver_fault: bool,
    /// Successful visits performed.
    pub visits: u32,
    /// Press attempts performed (including failed ones).
    pub press_attempts: u32,
    /// Successful presses performed.
    pub presses: u32,
    /// Values set on elements, as (selector, value) pairs.
    pub set_values: Vec<(String, String)>,
    /// Selectors that resolve to no element.
    pub absent: BTreeSet<String>,
    /// Element texts per selector, in document order.
    pub texts: BTreeMap<String, Vec<String>>,
    /// Issued handles as (selector, index) records.
    pub handles: Vec<(String, usize)>,
}

impl MockSession {
    /// Registers the texts matched by a selector.
    pub fn set_texts(&mut self, selector: &str, texts: &[&str]) {
        self.texts
            .insert(selector.to_string(), texts.iter().map(ToString::to_string).collect());
    }

    /// Issues a handle for the given selector and match index.
    fn issue(&mut self, selector: &str, index: usize) -> ElementHandle {
        self.handles.push((selector.to_string(), index));
        ElementHandle::new(self.handles.len() as u64 - 1)
    }
}

impl WebSession for MockSession {
    fn visit(&mut self, _url: &str) -> Result<(), SessionError> {
        if self.visit_faults > 0 {
            self.visit_faults -= 1;
            return Err(SessionError::Transport("connection timed out".to_string()));
        }
        self.visits += 1;
        Ok(())
    }

    fn page_markup(&self) -> Result<String, SessionError> {
        Ok("<html><body>scripted</body></html>".to_string())
    }

    fn find_element(&mut self, selector: &str) -> Result<Option<ElementHandle>, SessionError> {
        if self.absent.contains(selector) {
            return Ok(None);
        }
        Ok(Some(self.issue(selector, 0)))
    }

    fn find_all_elements(&mut self, selector: &str) -> Result<Vec<ElementHandle>, SessionError> {
        let count = self.texts.get(selector).map_or(0, Vec::len);
        Ok((0..count).map(|index| self.issue(selector, index)).collect())
    }

    fn set_value(&mut self, element: ElementHandle, value: &str) -> Result<(), SessionError> {
        let (selector, _) = self
            .handles
            .get(handle_index(element))
            .cloned()
            .ok_or(SessionError::StaleElement(element))?;
        self.set_values.push((selector, value.to_string()));
        Ok(())
    }

    fn press(&mut self, element: ElementHandle) -> Result<(), SessionError> {
        self.press_attempts += 1;
        if self.handles.get(handle_index(element)).is_none() {
            return Err(SessionError::StaleElement(element));
        }
        if self.press_driver_fault {
            return Err(SessionError::Driver("submit control has no form".to_string()));
        }
        if self.press_faults > 0 {
            self.press_faults -= 1;
            return Err(SessionError::Transport("connection reset".to_string()));
        }
        self.presses += 1;
        Ok(())
    }

    fn element_text(&self, element: ElementHandle) -> Result<String, SessionError> {
        let (selector, index) = self
            .handles
            .get(handle_index(element))
            .ok_or(SessionError::StaleElement(element))?;
        self.texts
            .get(selector)
            .and_then(|texts| texts.get(*index))
            .cloned()
            .ok_or(SessionError::StaleElement(element))
    }
}

/// Selector map used by the scripted driver tests.
pub fn selectors() -> SelectorMap {
    SelectorMap::default()
}

/// Maps a handle token onto an index into the recorded handles.
fn handle_index(element: ElementHandle) -> usize {
    usize::try_from(element.token()).unwrap_or(usize::MAX)
}
