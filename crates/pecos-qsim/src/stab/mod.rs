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

//! The stabilizer-tableau engine: a single-shot `TableauSim` for reference
//! simulation and debugging, and a `Program`/`BulkFrameSim` pair that
//! records one circuit pass and replays it across many shots by
//! propagating Pauli frames instead of full tableaus.

pub mod bulk_frame_sim;
pub mod circuit;
pub mod errors;
pub mod gate_data;
pub mod pauli;
pub mod program;
pub mod tableau;
pub mod tableau_sim;
pub mod transposed;

pub use bulk_frame_sim::{BulkFrameSim, SampleFormat};
pub use circuit::{Circuit, Operation};
pub use errors::{CircuitError, SimError};
pub use gate_data::GATE_TABLEAUS;
pub use pauli::{PauliString, SparsePauli};
pub use program::{Program, ProgramCycle};
pub use tableau::Tableau;
pub use tableau_sim::{MeasurementRecord, TableauSim};
pub use transposed::BlockTransposedTableau;
