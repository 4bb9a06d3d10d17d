// crates/markup-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Session Interfaces
// Description: Backend-agnostic web session capability for the gate.
// Purpose: Define the contract the submitter drives without embedding a
//          concrete HTTP or browser backend.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! The submitter drives an injected [`WebSession`] rather than a concrete
//! transport. Implementations must report connection-level failures as
//! [`SessionError::Transport`] so the retry policy can apply selectively;
//! a delivered response carrying an HTTP error status is not a transport
//! fault. Element access is handle based: a [`WebSession`] issues opaque
//! [`ElementHandle`] tokens that stay valid until the next navigation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use thiserror::Error;

// ============================================================================
// SECTION: Element Handles
// ============================================================================

/// Opaque token for an element located on the current page.
///
/// Handles are issued by a [`WebSession`] and are invalidated by any
/// navigation (a visit or a form submission).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle(u64);

impl ElementHandle {
    /// Creates a handle from a driver-issued token value.
    #[must_use]
    pub const fn new(token: u64) -> Self {
        Self(token)
    }

    /// Returns the raw token value.
    #[must_use]
    pub const fn token(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element#{}", self.0)
    }
}

// ============================================================================
// SECTION: Session Errors
// ============================================================================

/// Session driver errors.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    /// Connection-level failure: DNS, connect, reset, or timeout. The only
    /// variant eligible for retry.
    #[error("transport fault: {0}")]
    Transport(String),
    /// Malformed selector expression.
    #[error("invalid selector '{selector}': {message}")]
    Selector {
        /// The offending selector expression.
        selector: String,
        /// Parser diagnostic.
        message: String,
    },
    /// Element handle issued before the last navigation.
    #[error("stale {0}: the page changed since the element was located")]
    StaleElement(ElementHandle),
    /// Any other driver fault: no page loaded, unsupported operation, or an
    /// internal failure of the session backend.
    #[error("session driver error: {0}")]
    Driver(String),
}

impl SessionError {
    /// Returns true when the fault is transport level and thus retryable.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

// ============================================================================
// SECTION: Web Session
// ============================================================================

/// Backend-agnostic web session capability.
///
/// The gate consumes this capability; it never owns page navigation or DOM
/// querying logic itself. Implementations are synchronous and exclusively
/// owned by one scenario at a time.
pub trait WebSession {
    /// Navigates to the given URL, replacing the current page.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Transport`] for connection-level failures and
    /// other variants for driver faults. A delivered error page is success.
    fn visit(&mut self, url: &str) -> Result<(), SessionError>;

    /// Returns the raw markup of the current page.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Driver`] when no page has been loaded.
    fn page_markup(&self) -> Result<String, SessionError>;

    /// Locates the first element matching the selector, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Selector`] for malformed selectors and
    /// [`SessionError::Driver`] when no page has been loaded. An absent
    /// element is `Ok(None)`, not an error.
    fn find_element(&mut self, selector: &str) -> Result<Option<ElementHandle>, SessionError>;

    /// Locates all elements matching the selector, in document order.
    ///
    /// # Errors
    ///
    /// Same contract as [`WebSession::find_element`].
    fn find_all_elements(&mut self, selector: &str) -> Result<Vec<ElementHandle>, SessionError>;

    /// Sets the value of a form control element.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::StaleElement`] for handles issued before the
    /// last navigation and [`SessionError::Driver`] for non-control elements.
    fn set_value(&mut self, element: ElementHandle, value: &str) -> Result<(), SessionError>;

    /// Activates a submit control, performing the enclosing form submission.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Transport`] for connection-level submission
    /// failures, [`SessionError::StaleElement`] for outdated handles, and
    /// [`SessionError::Driver`] when the element has no enclosing form.
    fn press(&mut self, element: ElementHandle) -> Result<(), SessionError>;

    /// Returns the visible text content of an element.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::StaleElement`] for outdated handles.
    fn element_text(&self, element: ElementHandle) -> Result<String, SessionError>;
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::ElementHandle;
    use super::SessionError;

    #[test]
    fn transport_is_the_only_retryable_fault() {
        assert!(SessionError::Transport("reset".to_string()).is_transport());
        assert!(!SessionError::Driver("boom".to_string()).is_transport());
        assert!(!SessionError::StaleElement(ElementHandle::new(1)).is_transport());
    }
}
