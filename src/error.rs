//! Error types for the mapping and routing core.

use thiserror::Error;

use crate::qubit::PhysicalQubit;

/// Errors that can abort a mapping/routing pass.
///
/// All variants are fatal to the current `map_circuit` invocation; none are
/// retried internally (see spec §7). A `RouteError` always means the caller
/// gets nothing back — there is no partial-output contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The device description was malformed, or an unknown policy string
    /// was supplied.
    #[error("config error: {0}")]
    ConfigError(String),

    /// A gate reached the router with an arity other than 1 or 2.
    #[error("gate `{name}` has unsupported arity {arity} (expected 1 or 2)")]
    UnsupportedArity {
        /// The gate's diagnostic name.
        name: String,
        /// The number of operands the gate carried.
        arity: usize,
    },

    /// No path exists between two physical qubits in the current grid.
    #[error("no route between physical qubits {src} and {dst}")]
    UnroutableGate {
        /// Source physical qubit.
        src: PhysicalQubit,
        /// Target physical qubit.
        dst: PhysicalQubit,
    },

    /// An internal consistency check failed. This indicates a bug in the
    /// core rather than a problem with the caller's input.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}

/// Convenience alias used throughout the crate.
pub type RouteResult<T> = Result<T, RouteError>;
