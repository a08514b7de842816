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

pub mod bit_matrix;
pub mod element;
pub mod gate;
pub mod pauli;
pub mod phase;
pub mod qubit_id;
pub mod sets;
pub mod sign;
pub mod sims_rngs;

pub use bit_matrix::BitMatrix;
pub use element::{Element, IndexableElement};
pub use phase::Phase;
pub use qubit_id::QubitId;
pub use sets::set::Set;
pub use sets::vec_set::VecSet;
pub use sign::Sign;

pub use crate::sims_rngs::chacha_rng::{ChaCha12Rng, ChaCha20Rng, ChaCha8Rng};
pub use crate::sims_rngs::choices::Choices;
pub use crate::sims_rngs::sim_rng::SimRng;
pub use crate::sims_rngs::xoshiro_rng::{
    Xoshiro128PlusPlus, Xoshiro128StarStar, Xoshiro256PlusPlus, Xoshiro256StarStar,
    Xoshiro512PlusPlus, Xoshiro512StarStar,
};
pub use gate::Gate;
pub use pauli::pauli_bitmap::PauliBitmap;
pub use pauli::pauli_sparse::PauliSparse;
pub use pauli::pauli_string::PauliString;
pub use pauli::{Pauli, PauliOperator};
