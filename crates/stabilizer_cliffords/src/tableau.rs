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

use serde::{Deserialize, Serialize};
use stabilizer_common::{Gate, Pauli, Sign, SignedPauliString};

/// One stabilizer generator: X/Z support packed into machine words plus a
/// sign bit. Bit `q` of `x`/`z` stores qubit `q`'s X/Z component.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
struct Row {
    x: u64,
    z: u64,
    sign: bool,
}

/// The stabilizer generators of `U|0...0>` for a Clifford circuit `U`,
/// tracked under gate conjugation.
///
/// Row `i` starts as `+Z_i` and is rewritten by each applied gate. Supports
/// 1 through 63 qubits (the sampler draws subset indices below `2^n`).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct StabilizerTableau {
    qubits: usize,
    rows: Vec<Row>,
}

impl StabilizerTableau {
    /// The tableau of the identity circuit: generators `+Z_0 ... +Z_{n-1}`.
    pub fn identity(qubits: usize) -> Self {
        assert!(
            (1..=63).contains(&qubits),
            "Tableau supports 1 through 63 qubits, got {qubits}"
        );
        let rows = (0..qubits)
            .map(|i| Row {
                x: 0,
                z: 1 << i,
                sign: false,
            })
            .collect();
        Self { qubits, rows }
    }

    pub fn qubits(&self) -> usize {
        self.qubits
    }

    /// Conjugate every generator by the given gate.
    pub fn apply(&mut self, gate: Gate) {
        assert!(
            gate.max_qubit() < self.qubits,
            "Gate {gate} is out of range for {} qubits",
            self.qubits
        );
        match gate {
            Gate::H(q) => self.apply_h(q),
            Gate::S(q) => self.apply_s(q),
            Gate::Sdg(q) => self.apply_sdg(q),
            Gate::X(q) => self.apply_x(q),
            Gate::Z(q) => self.apply_z(q),
            Gate::Cz(a, b) => self.apply_cz(a, b),
        }
    }

    /// Extract generator `i` as a signed Pauli string.
    pub fn stabilizer(&self, i: usize) -> SignedPauliString {
        let row = &self.rows[i];
        let paulis = (0..self.qubits)
            .map(|q| {
                let x = (row.x >> q) & 1 == 1;
                let z = (row.z >> q) & 1 == 1;
                match (x, z) {
                    (true, true) => Pauli::Y,
                    (true, false) => Pauli::X,
                    (false, true) => Pauli::Z,
                    (false, false) => Pauli::I,
                }
            })
            .collect();
        let sign = if row.sign { Sign::Minus } else { Sign::Plus };
        SignedPauliString::new(sign, paulis)
    }

    pub fn stabilizers(&self) -> impl Iterator<Item = SignedPauliString> + '_ {
        (0..self.qubits).map(|i| self.stabilizer(i))
    }

    // H: X <-> Z, Y -> -Y.
    fn apply_h(&mut self, q: usize) {
        let mask = 1 << q;
        for row in &mut self.rows {
            row.sign ^= row.x & row.z & mask != 0;
            let x = row.x & mask;
            let z = row.z & mask;
            row.x = (row.x & !mask) | z;
            row.z = (row.z & !mask) | x;
        }
    }

    // S: X -> Y, Y -> -X, Z -> Z.
    fn apply_s(&mut self, q: usize) {
        let mask = 1 << q;
        for row in &mut self.rows {
            row.sign ^= row.x & row.z & mask != 0;
            row.z ^= row.x & mask;
        }
    }

    // S†: X -> -Y, Y -> X, Z -> Z.
    fn apply_sdg(&mut self, q: usize) {
        let mask = 1 << q;
        for row in &mut self.rows {
            row.sign ^= row.x & !row.z & mask != 0;
            row.z ^= row.x & mask;
        }
    }

    // X: Z -> -Z, Y -> -Y.
    fn apply_x(&mut self, q: usize) {
        let mask = 1 << q;
        for row in &mut self.rows {
            row.sign ^= row.z & mask != 0;
        }
    }

    // Z: X -> -X, Y -> -Y.
    fn apply_z(&mut self, q: usize) {
        let mask = 1 << q;
        for row in &mut self.rows {
            row.sign ^= row.x & mask != 0;
        }
    }

    // CZ: X_a -> X_a Z_b, X_b -> X_b Z_a, Z invariant.
    // Picks up a sign exactly when both X components are set and the Z
    // components differ, e.g. CZ (X ⊗ Y) CZ = -(Y ⊗ X).
    fn apply_cz(&mut self, a: usize, b: usize) {
        assert_ne!(a, b, "CZ needs two distinct qubits");
        let mask_a = 1 << a;
        let mask_b = 1 << b;
        for row in &mut self.rows {
            let xa = row.x & mask_a != 0;
            let xb = row.x & mask_b != 0;
            let za = row.z & mask_a != 0;
            let zb = row.z & mask_b != 0;
            row.sign ^= xa & xb & (za ^ zb);
            if xb {
                row.z ^= mask_a;
            }
            if xa {
                row.z ^= mask_b;
            }
        }
    }
}
