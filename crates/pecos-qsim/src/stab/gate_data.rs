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

//! The named-gate tableau table and its inverse-name table, transcribed
//! from the original's `GATE_TABLEAUS`/`GATE_INVERSE_NAMES` static maps.
//!
//! `GATE_INVERSE_NAMES` is total over `GATE_TABLEAUS`'s key set: every gate
//! dispatched by name has an inverse also reachable by name, which is what
//! lets `TableauSim` implement its gates purely as
//! `inv_state.prepend(GATE_TABLEAUS[GATE_INVERSE_NAMES[name]], targets)`.

use super::tableau::Tableau;
use std::collections::HashMap;

lazy_static::lazy_static! {
    pub static ref GATE_TABLEAUS: HashMap<&'static str, Tableau> = {
        let mut m = HashMap::new();
        m.insert("I", Tableau::gate1("+X", "+Z"));
        m.insert("X", Tableau::gate1("+X", "-Z"));
        m.insert("Y", Tableau::gate1("-X", "-Z"));
        m.insert("Z", Tableau::gate1("-X", "+Z"));
        m.insert("H", Tableau::gate1("+Z", "+X"));
        m.insert("H_XY", Tableau::gate1("+Y", "-Z"));
        m.insert("H_YZ", Tableau::gate1("-X", "+Y"));
        m.insert("SQRT_X", Tableau::gate1("+X", "-Y"));
        m.insert("SQRT_X_DAG", Tableau::gate1("+X", "+Y"));
        m.insert("SQRT_Y", Tableau::gate1("-Z", "+X"));
        m.insert("SQRT_Y_DAG", Tableau::gate1("+Z", "-X"));
        m.insert("SQRT_Z", Tableau::gate1("+Y", "+Z"));
        m.insert("S", Tableau::gate1("+Y", "+Z"));
        m.insert("SQRT_Z_DAG", Tableau::gate1("-Y", "+Z"));
        m.insert("S_DAG", Tableau::gate1("-Y", "+Z"));

        m.insert("CX", Tableau::gate2("+XX", "+ZI", "+IX", "+ZZ"));
        m.insert("CNOT", Tableau::gate2("+XX", "+ZI", "+IX", "+ZZ"));
        m.insert("CY", Tableau::gate2("+XY", "+ZI", "+ZX", "+ZZ"));
        m.insert("CZ", Tableau::gate2("+XZ", "+ZI", "+ZX", "+IZ"));
        m.insert("SWAP", Tableau::gate2("+IX", "+IZ", "+XI", "+ZI"));
        m.insert("ISWAP", Tableau::gate2("+ZY", "+IZ", "+YZ", "+ZI"));
        m.insert("ISWAP_DAG", Tableau::gate2("-ZY", "+IZ", "-YZ", "+ZI"));
        m.insert("XCX", Tableau::gate2("+XI", "+ZX", "+IX", "+XZ"));
        m.insert("XCY", Tableau::gate2("+XI", "+ZY", "+XX", "+XZ"));
        m.insert("XCZ", Tableau::gate2("+XI", "+ZZ", "+XX", "+IZ"));
        m.insert("YCX", Tableau::gate2("+XX", "+ZX", "+IX", "+YZ"));
        m.insert("YCY", Tableau::gate2("+XY", "+ZY", "+YX", "+YZ"));
        m.insert("YCZ", Tableau::gate2("+XZ", "+ZZ", "+YX", "+IZ"));
        m
    };

    pub static ref GATE_INVERSE_NAMES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("I", "I");
        m.insert("X", "X");
        m.insert("Y", "Y");
        m.insert("Z", "Z");
        m.insert("H", "H");
        m.insert("H_XY", "H_XY");
        m.insert("H_YZ", "H_YZ");
        m.insert("SQRT_X", "SQRT_X_DAG");
        m.insert("SQRT_X_DAG", "SQRT_X");
        m.insert("SQRT_Y", "SQRT_Y_DAG");
        m.insert("SQRT_Y_DAG", "SQRT_Y");
        m.insert("SQRT_Z", "SQRT_Z_DAG");
        m.insert("S", "S_DAG");
        m.insert("SQRT_Z_DAG", "SQRT_Z");
        m.insert("S_DAG", "S");

        m.insert("CX", "CX");
        m.insert("CNOT", "CNOT");
        m.insert("CY", "CY");
        m.insert("CZ", "CZ");
        m.insert("SWAP", "SWAP");
        m.insert("ISWAP", "ISWAP_DAG");
        m.insert("ISWAP_DAG", "ISWAP");
        m.insert("XCX", "XCX");
        m.insert("XCY", "XCY");
        m.insert("XCZ", "XCZ");
        m.insert("YCX", "YCX");
        m.insert("YCY", "YCY");
        m.insert("YCZ", "YCZ");
        m
    };
}
