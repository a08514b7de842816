use std::fmt;

/// Errors raised while parsing a circuit's text representation.
///
/// Parse errors are recoverable by design (a caller reading user-supplied
/// circuit text should get a `Result`, not a panic) — this is the one error
/// type in the stabilizer engine that is not a programming error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CircuitError {
    UnknownGate(String),
    InvalidTarget(String),
    ArityMismatch { gate: String, expected: usize, found: usize },
}

impl fmt::Display for CircuitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CircuitError::UnknownGate(name) => write!(f, "unrecognized gate name: {name}"),
            CircuitError::InvalidTarget(text) => write!(f, "invalid qubit target: {text}"),
            CircuitError::ArityMismatch { gate, expected, found } => write!(
                f,
                "gate {gate} expects {expected} target(s), found {found}"
            ),
        }
    }
}

impl std::error::Error for CircuitError {}

/// Errors from the simulation core itself.
///
/// Per this engine's error-propagation policy, an unsupported gate name
/// reaching dispatch (one present in neither gate table) is a programming
/// error, not a recoverable condition — callers are expected to validate
/// against `GATE_TABLEAUS` ahead of time (`Circuit::from_text` already
/// does, via `CircuitError::UnknownGate`). `SimError` exists for debug
/// assertions and diagnostics, not as a `Result` variant threaded through
/// the hot path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    UnsupportedGate(String),
    InvariantViolation(String),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::UnsupportedGate(name) => write!(f, "unsupported gate: {name}"),
            SimError::InvariantViolation(detail) => write!(f, "tableau invariant violated: {detail}"),
        }
    }
}

impl std::error::Error for SimError {}
