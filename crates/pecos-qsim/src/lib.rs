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

//! Simulators for Clifford-group (stabilizer) and related quantum circuits.

pub mod arbitrary_rotation_gateable;
pub mod clifford_gateable;
pub mod clifford_simulator;
pub mod pauli_prop;
pub mod prelude;
pub mod quantum_simulator;
pub mod stab;
pub mod state_vec;

pub use arbitrary_rotation_gateable::ArbitraryRotationGateable;
pub use clifford_gateable::CliffordGateable;
pub use clifford_simulator::CliffordSimulator;
pub use pauli_prop::{PauliProp, StdPauliProp};
pub use quantum_simulator::QuantumSimulator;
pub use stab::{BulkFrameSim, Circuit, Operation, Program, SampleFormat, Tableau, TableauSim};
pub use state_vec::StateVec;
