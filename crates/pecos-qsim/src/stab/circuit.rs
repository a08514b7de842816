// Copyright 2024 The PECOS Developers
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not use this file except
// in compliance with the License.You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software distributed under the License
// is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express
// or implied. See the License for the specific language governing permissions and limitations under
// the License.

//! The abstract circuit shape the engine consumes: a named operation plus
//! its integer qubit targets, and a minimal text parser sufficient to
//! author the end-to-end test scenarios. The production circuit file
//! format is out of scope (`spec.md` §1); this is "the abstract
//! token/operation shape used by the core," not a hardened file format.

use super::errors::CircuitError;
use super::gate_data::GATE_TABLEAUS;

/// A gate name plus its qubit targets. Two-qubit gate targets are
/// interpreted as consecutive pairs; `M`/`R` targets are independent qubit
/// indices; `TICK` carries no targets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Operation {
    pub name: String,
    pub targets: Vec<usize>,
}

impl Operation {
    #[must_use]
    pub fn new(name: impl Into<String>, targets: Vec<usize>) -> Self {
        Self { name: name.into(), targets }
    }
}

/// A sequence of operations over a known qubit count.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Circuit {
    pub num_qubits: usize,
    pub operations: Vec<Operation>,
}

impl Circuit {
    #[must_use]
    pub fn new(num_qubits: usize) -> Self {
        Self { num_qubits, operations: Vec::new() }
    }

    /// Appends `op`, fusing into the previous operation if both are
    /// consecutive `M` (or both `R`) ops with no intervening operation, per
    /// `spec.md` §3 ("Consecutive M operations are fused into one M with
    /// all targets; likewise R").
    pub fn push(&mut self, op: Operation) {
        if matches!(op.name.as_str(), "M" | "R") {
            if let Some(last) = self.operations.last_mut() {
                if last.name == op.name {
                    last.targets.extend(op.targets);
                    return;
                }
            }
        }
        for &t in &op.targets {
            if t >= self.num_qubits {
                self.num_qubits = t + 1;
            }
        }
        self.operations.push(op);
    }

    /// Parses the one-operation-per-line text format described by
    /// `spec.md` §6: `#` starts a comment, whitespace separates the
    /// case-insensitive gate name from its non-negative integer targets,
    /// `TICK` is a barrier token carrying no targets.
    ///
    /// # Errors
    /// Returns a [`CircuitError`] on an unrecognized gate name, a
    /// non-numeric or negative target, or a unitary gate whose target
    /// count does not match its arity.
    pub fn from_text(text: &str) -> Result<Self, CircuitError> {
        let mut circuit = Self::new(0);
        for raw_line in text.lines() {
            let line = match raw_line.split('#').next() {
                Some(l) => l.trim(),
                None => "",
            };
            if line.is_empty() {
                continue;
            }
            let mut tokens = line.split_whitespace();
            let Some(name_token) = tokens.next() else {
                continue;
            };
            let name = name_token.to_ascii_uppercase();

            if name == "TICK" {
                circuit.push(Operation::new("TICK", Vec::new()));
                continue;
            }

            let mut targets = Vec::new();
            for tok in tokens {
                let target: i64 = tok
                    .parse()
                    .map_err(|_| CircuitError::InvalidTarget(tok.to_string()))?;
                if target < 0 {
                    return Err(CircuitError::InvalidTarget(tok.to_string()));
                }
                targets.push(target as usize);
            }

            if name == "M" || name == "R" {
                circuit.push(Operation::new(name, targets));
                continue;
            }

            let gate = GATE_TABLEAUS
                .get(name.as_str())
                .ok_or_else(|| CircuitError::UnknownGate(name.clone()))?;
            if targets.len() != gate.n {
                return Err(CircuitError::ArityMismatch {
                    gate: name,
                    expected: gate.n,
                    found: targets.len(),
                });
            }
            circuit.push(Operation::new(name, targets));
        }
        Ok(circuit)
    }
}
