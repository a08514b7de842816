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

//! The program recorder: runs one copy of `TableauSim` forward over a
//! circuit once, grouping operations into `ProgramCycle`s so that
//! `BulkFrameSim` can later replay the same circuit across many shots by
//! propagating only two bits per qubit per shot.
//!
//! A cycle's four phases (`unitary -> collapse -> measure -> reset`) are
//! closed off and a new cycle opened whenever the next operation would
//! touch a qubit out of order — a unitary on a qubit already measured or
//! reset this cycle, or a measurement/reset on a qubit already reset this
//! cycle. This mirrors `spec.md` §4.5 exactly.

use super::circuit::{Circuit, Operation};
use super::pauli::SparsePauli;
use super::tableau_sim::TableauSim;

/// One atomic step of bulk replay: a batch of Clifford gates, the
/// destabilizers needed to randomize the cycle's non-deterministic
/// measurements, the measurement results themselves (qubit plus an
/// "invert" flag against the frame's X component), and the qubits reset
/// to |0> at the end of the cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramCycle {
    pub unitary: Vec<Operation>,
    pub collapse: Vec<SparsePauli>,
    pub measure: Vec<(usize, bool)>,
    pub reset: Vec<usize>,
}

impl ProgramCycle {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.unitary.is_empty() && self.collapse.is_empty() && self.measure.is_empty() && self.reset.is_empty()
    }
}

/// The fully recorded replay plan for one circuit: how many qubits and
/// measurements it has, and the ordered cycles `BulkFrameSim::clear_and_run`
/// executes against its per-shot Pauli frames.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    pub num_qubits: usize,
    pub num_measurements: usize,
    pub cycles: Vec<ProgramCycle>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Phase {
    Open,
    Collapsed,
    Reset,
}

struct Recorder {
    phases: Vec<Phase>,
    current: ProgramCycle,
    cycles: Vec<ProgramCycle>,
    num_measurements: usize,
    cycle_index: usize,
}

impl Recorder {
    fn new(num_qubits: usize) -> Self {
        Self {
            phases: vec![Phase::Open; num_qubits],
            current: ProgramCycle::default(),
            cycles: Vec::new(),
            num_measurements: 0,
            cycle_index: 0,
        }
    }

    fn flush(&mut self) {
        if self.current.is_empty() {
            return;
        }
        log::trace!(
            "recorded cycle {}: {} unitary, {} collapse, {} measure, {} reset",
            self.cycle_index,
            self.current.unitary.len(),
            self.current.collapse.len(),
            self.current.measure.len(),
            self.current.reset.len(),
        );
        self.cycle_index += 1;
        self.cycles.push(std::mem::take(&mut self.current));
        self.phases.iter_mut().for_each(|p| *p = Phase::Open);
    }

    fn handle(&mut self, op: &Operation, sim: &mut TableauSim) {
        match op.name.as_str() {
            "TICK" => {}
            "M" => {
                if op.targets.iter().any(|&q| self.phases[q] == Phase::Reset) {
                    self.flush();
                }
                for &q in &op.targets {
                    let record = sim.inspected_measure(q);
                    if !record.destabilizer.is_empty() {
                        self.current.collapse.push(record.destabilizer);
                    }
                    self.current.measure.push((q, record.outcome));
                    self.num_measurements += 1;
                    self.phases[q] = Phase::Collapsed;
                }
            }
            "R" => {
                if op.targets.iter().any(|&q| self.phases[q] == Phase::Reset) {
                    self.flush();
                }
                for &q in &op.targets {
                    let record = sim.inspected_reset(q, false);
                    if !record.destabilizer.is_empty() {
                        self.current.collapse.push(record.destabilizer);
                    }
                    self.current.reset.push(q);
                    self.phases[q] = Phase::Reset;
                }
            }
            "X" | "Y" | "Z" | "I" => {
                // Absorbed into the tableau sim only: Pauli gates never
                // anticommute with a Z measurement's sign tracking in a way
                // a Pauli-frame replay cares about (frame propagation
                // ignores sign), so they are not recorded as a unitary step.
                sim.apply(&op.name, &op.targets);
            }
            name => {
                if op.targets.iter().any(|&q| matches!(self.phases[q], Phase::Collapsed | Phase::Reset)) {
                    self.flush();
                }
                sim.apply(name, &op.targets);
                self.current.unitary.push(op.clone());
            }
        }
    }

    fn finish(mut self) -> (usize, Vec<ProgramCycle>) {
        self.flush();
        (self.num_measurements, self.cycles)
    }
}

impl Program {
    /// Records `circuit` by running it once against a freshly seeded
    /// `TableauSim`.
    #[must_use]
    pub fn record(circuit: &Circuit) -> Self {
        let mut sim = TableauSim::new(circuit.num_qubits.max(1));
        Self::record_with(circuit, &mut sim)
    }

    /// As `record`, but with a caller-provided seed for reproducibility.
    #[must_use]
    pub fn record_with_seed(circuit: &Circuit, seed: u64) -> Self {
        let mut sim = TableauSim::with_seed(circuit.num_qubits.max(1), seed);
        Self::record_with(circuit, &mut sim)
    }

    fn record_with(circuit: &Circuit, sim: &mut TableauSim) -> Self {
        let mut recorder = Recorder::new(circuit.num_qubits);
        for op in &circuit.operations {
            recorder.handle(op, sim);
        }
        let (num_measurements, cycles) = recorder.finish();
        Self { num_qubits: circuit.num_qubits, num_measurements, cycles }
    }
}
