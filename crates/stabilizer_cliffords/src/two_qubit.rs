// Copyright contributors to the Stabilizer State Benchmark project
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Serialize};
use stabilizer_common::Gate;

use crate::SingleQubitClifford;

/// The order-3 rotation of the Pauli axes about the X+Y+Z diagonal, as an
/// H/S word.
///
/// Together with the identity these three form coset representatives for
/// the nine inequivalent axis feeds into an entangling core: they send any
/// fixed axis to three distinct axes, so no two differ by a core-commuting
/// local.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AxisCycle {
    Identity,
    /// Z -> X -> Y -> Z (up to signs).
    Forward,
    /// Z -> Y -> X -> Z (up to signs).
    Backward,
}

impl AxisCycle {
    pub const ALL: [AxisCycle; 3] = [AxisCycle::Identity, AxisCycle::Forward, AxisCycle::Backward];

    fn gates(self, qubit: usize) -> Vec<Gate> {
        match self {
            AxisCycle::Identity => vec![],
            AxisCycle::Forward => vec![Gate::S(qubit), Gate::H(qubit)],
            AxisCycle::Backward => vec![
                Gate::S(qubit),
                Gate::H(qubit),
                Gate::S(qubit),
                Gate::H(qubit),
            ],
        }
    }
}

/// The entangling part of a two-qubit Clifford: one of the four classes
/// left fixed by single-qubit dressing.
///
/// Of the 11520 two-qubit Cliffords, 576 are purely local, 5184 are
/// CZ-like, 5184 are iSWAP-like, and 576 are SWAP-like. The CZ-like and
/// iSWAP-like classes carry a pair of [`AxisCycle`] representatives
/// selecting which axis each qubit feeds into the core.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum EntanglingClass {
    Local,
    Cz { cycles: (AxisCycle, AxisCycle) },
    Iswap { cycles: (AxisCycle, AxisCycle) },
    Swap,
}

/// An element of the 11520-element two-qubit Clifford group, decomposed as
/// one single-qubit Clifford per qubit followed by an entangling class
/// core (up to global phase).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TwoQubitClifford {
    pub locals: (SingleQubitClifford, SingleQubitClifford),
    pub class: EntanglingClass,
}

impl TwoQubitClifford {
    pub const COUNT: usize = 11520;

    /// Enumerate all 11520 group elements.
    pub fn all() -> Vec<TwoQubitClifford> {
        let mut classes = vec![EntanglingClass::Local, EntanglingClass::Swap];
        for ca in AxisCycle::ALL {
            for cb in AxisCycle::ALL {
                classes.push(EntanglingClass::Cz { cycles: (ca, cb) });
                classes.push(EntanglingClass::Iswap { cycles: (ca, cb) });
            }
        }

        let singles = SingleQubitClifford::all();
        let mut out = vec![];
        for a in &singles {
            for b in &singles {
                for class in &classes {
                    out.push(TwoQubitClifford {
                        locals: (*a, *b),
                        class: *class,
                    });
                }
            }
        }
        out
    }

    /// The gate word realizing this element on `(a, b)`, in circuit order.
    pub fn gates(&self, a: usize, b: usize) -> Vec<Gate> {
        assert_ne!(a, b, "Two-qubit Clifford needs two distinct qubits");
        let mut gates = self.locals.0.gates(a);
        gates.extend(self.locals.1.gates(b));
        match self.class {
            EntanglingClass::Local => {}
            EntanglingClass::Cz { cycles } => {
                gates.push(Gate::Cz(a, b));
                gates.extend(cycles.0.gates(a));
                gates.extend(cycles.1.gates(b));
            }
            EntanglingClass::Iswap { cycles } => {
                gates.extend([Gate::Cz(a, b), Gate::H(a), Gate::H(b), Gate::Cz(a, b)]);
                gates.extend(cycles.0.gates(a));
                gates.extend(cycles.1.gates(b));
            }
            EntanglingClass::Swap => {
                // Three CNOTs, each a CZ conjugated by H on its target.
                gates.extend([
                    Gate::H(b),
                    Gate::Cz(a, b),
                    Gate::H(b),
                    Gate::H(a),
                    Gate::Cz(a, b),
                    Gate::H(a),
                    Gate::H(b),
                    Gate::Cz(a, b),
                    Gate::H(b),
                ]);
            }
        }
        gates
    }
}

impl Distribution<TwoQubitClifford> for StandardUniform {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> TwoQubitClifford {
        let locals = (rng.random(), rng.random());
        // Class choice weighted by class size, in twentieths: 1 local,
        // 9 CZ-like, 9 iSWAP-like, 1 SWAP-like.
        let class = match rng.random_range(0..20) {
            0 => EntanglingClass::Local,
            19 => EntanglingClass::Swap,
            k => {
                let cycles = (
                    AxisCycle::ALL[rng.random_range(0..3)],
                    AxisCycle::ALL[rng.random_range(0..3)],
                );
                if k <= 9 {
                    EntanglingClass::Cz { cycles }
                } else {
                    EntanglingClass::Iswap { cycles }
                }
            }
        };
        TwoQubitClifford { locals, class }
    }
}
