// crates/markup-gate-core/src/runtime/retry.rs
// ============================================================================
// Module: Transport Retry
// Description: Bounded retry of transport-level session faults.
// Purpose: Recover from a flaky validation service without hanging forever.
// Dependencies: crate::interfaces, serde, tracing
// ============================================================================

//! ## Overview
//! The external validation service is occasionally flaky at the connection
//! level. Transport faults are retried in place, without backoff, under an
//! explicit attempt budget; any other fault aborts immediately. The legacy
//! tool retried unboundedly, the budget here trades that liveness risk for
//! a descriptive failure once the budget is spent.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

use crate::interfaces::SessionError;

// ============================================================================
// SECTION: Retry Policy
// ============================================================================

/// Default number of attempts for transport-fault retry.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Budget for transport-fault retry.
///
/// # Invariants
/// - `max_attempts` is at least 1; configuration validation rejects 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total attempts allowed, including the first.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

/// Serde default for the attempt budget.
const fn default_max_attempts() -> u32 {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

// ============================================================================
// SECTION: Retry Outcome
// ============================================================================

/// Terminal outcome of a retried operation.
#[derive(Debug)]
pub enum RetryOutcome<T> {
    /// The operation succeeded within the budget.
    Success(T),
    /// A non-transport fault aborted the loop.
    Aborted(SessionError),
    /// The budget was spent on transport faults; carries the last fault.
    Exhausted {
        /// Attempts performed before giving up.
        attempts: u32,
        /// Message of the last transport fault observed.
        last_fault: String,
    },
}

/// Runs an operation under the policy, retrying only transport faults.
///
/// Each failed attempt is retried in place with no delay. Non-transport
/// faults abort on first occurrence.
pub fn retry_transport<T>(
    policy: RetryPolicy,
    what: &str,
    mut operation: impl FnMut() -> Result<T, SessionError>,
) -> RetryOutcome<T> {
    let budget = policy.max_attempts.max(1);
    let mut last_fault = String::new();
    for attempt in 1..=budget {
        match operation() {
            Ok(value) => return RetryOutcome::Success(value),
            Err(err) if err.is_transport() => {
                debug!(what, attempt, budget, fault = %err, "transport fault, retrying");
                last_fault = err.to_string();
            }
            Err(err) => return RetryOutcome::Aborted(err),
        }
    }
    RetryOutcome::Exhausted {
        attempts: budget,
        last_fault,
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
