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

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use stabilizer_common::{Gate, Pauli, Sign, SignedPauliString};

use crate::CircuitBuilder;

/// A stabilizer with no measurable qubit: every symbol is the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyStabilizerError;

impl Display for EmptyStabilizerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "stabilizer has no non-identity symbol to measure")
    }
}

impl std::error::Error for EmptyStabilizerError {}

/// The measurement subcircuit for one signed Pauli stabilizer: basis-change
/// gates plus the ordered list of qubits to read out.
///
/// Measured qubit `k` writes classical bit `k`, in ascending qubit order.
/// A negative stabilizer sign is corrected by one X on the first measured
/// qubit, so the ideal outcome always has even parity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementPlan {
    basis_changes: Vec<Gate>,
    measured: Vec<usize>,
    flip_first: bool,
}

impl MeasurementPlan {
    pub fn for_stabilizer(
        stabilizer: &SignedPauliString,
    ) -> Result<Self, EmptyStabilizerError> {
        let mut basis_changes = vec![];
        let mut measured = vec![];

        for (qubit, pauli) in stabilizer.paulis().iter().enumerate() {
            match pauli {
                Pauli::I => continue,
                // Z is measured natively.
                Pauli::Z => {}
                Pauli::X => basis_changes.push(Gate::H(qubit)),
                Pauli::Y => {
                    basis_changes.push(Gate::Sdg(qubit));
                    basis_changes.push(Gate::H(qubit));
                }
            }
            measured.push(qubit);
        }

        if measured.is_empty() {
            return Err(EmptyStabilizerError);
        }

        Ok(Self {
            basis_changes,
            measured,
            flip_first: stabilizer.sign() == Sign::Minus,
        })
    }

    pub fn basis_changes(&self) -> &[Gate] {
        &self.basis_changes
    }

    /// Qubits to read out; entry `k` writes classical bit `k`.
    pub fn measured(&self) -> &[usize] {
        &self.measured
    }

    pub fn classical_bits(&self) -> usize {
        self.measured.len()
    }

    /// Append the subcircuit to a builder.
    ///
    /// A barrier separates the basis changes from the measurements only
    /// when at least one basis-change gate was emitted, so a pure I/Z
    /// stabilizer measures without an extra synchronization point.
    pub fn apply_to(&self, builder: &mut CircuitBuilder) {
        for gate in &self.basis_changes {
            builder.push_gate(*gate);
        }
        if self.flip_first {
            builder.push_gate(Gate::X(self.measured[0]));
        }
        if !self.basis_changes.is_empty() {
            builder.barrier();
        }
        for qubit in &self.measured {
            builder.measure(*qubit);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Instruction;

    use super::*;

    fn plan(label: &str) -> MeasurementPlan {
        let stabilizer = SignedPauliString::try_from(label).unwrap();
        MeasurementPlan::for_stabilizer(&stabilizer).unwrap()
    }

    #[test]
    fn z_symbols_measure_without_basis_change() {
        let plan = plan("ZIZ");
        assert!(plan.basis_changes().is_empty());
        assert_eq!(&[0, 2], plan.measured());
        assert_eq!(2, plan.classical_bits());
    }

    #[test]
    fn x_gets_a_hadamard() {
        let plan = plan("IXI");
        assert_eq!(&[Gate::H(1)], plan.basis_changes());
        assert_eq!(&[1], plan.measured());
    }

    #[test]
    fn y_gets_sdg_then_h() {
        let plan = plan("YZI");
        assert_eq!(&[Gate::Sdg(0), Gate::H(0)], plan.basis_changes());
        assert_eq!(&[0, 1], plan.measured());
    }

    #[test]
    fn measured_count_matches_weight() {
        for label in ["XYZ", "IXIY", "ZZZZZ", "IIZ"] {
            let stabilizer = SignedPauliString::try_from(label).unwrap();
            let plan = MeasurementPlan::for_stabilizer(&stabilizer).unwrap();
            assert_eq!(stabilizer.weight(), plan.measured().len());
        }
    }

    #[test]
    fn classical_bits_are_a_bijection() {
        let stabilizer = SignedPauliString::try_from("IXZIYZ").unwrap();
        let plan = MeasurementPlan::for_stabilizer(&stabilizer).unwrap();

        let mut builder = CircuitBuilder::new(6);
        plan.apply_to(&mut builder);
        let circuit = builder.finish();

        let cbits: Vec<usize> = circuit
            .instructions()
            .iter()
            .filter_map(|i| match i {
                Instruction::Measure { cbit, .. } => Some(*cbit),
                _ => None,
            })
            .collect();
        assert_eq!((0..plan.classical_bits()).collect::<Vec<_>>(), cbits);
        assert_eq!(plan.classical_bits(), circuit.clbits());
    }

    #[test]
    fn negative_sign_flips_the_first_measured_qubit() {
        let stabilizer = SignedPauliString::try_from("-IZZ").unwrap();
        let plan = MeasurementPlan::for_stabilizer(&stabilizer).unwrap();

        let mut builder = CircuitBuilder::new(3);
        plan.apply_to(&mut builder);
        let circuit = builder.finish();

        // First measured qubit is 1; the correction lands there.
        assert!(
            circuit
                .instructions()
                .contains(&Instruction::Gate(Gate::X(1)))
        );
    }

    #[test]
    fn barrier_only_with_basis_changes() {
        let mut builder = CircuitBuilder::new(2);
        plan("ZZ").apply_to(&mut builder);
        let no_basis = builder.finish();
        assert!(!no_basis.instructions().contains(&Instruction::Barrier));

        let mut builder = CircuitBuilder::new(2);
        plan("XZ").apply_to(&mut builder);
        let with_basis = builder.finish();
        let position = with_basis
            .instructions()
            .iter()
            .position(|i| *i == Instruction::Barrier)
            .expect("basis change requires a barrier");
        // Everything after the barrier is a measurement.
        assert!(
            with_basis.instructions()[position + 1..]
                .iter()
                .all(|i| matches!(i, Instruction::Measure { .. }))
        );
    }

    #[test]
    fn all_identity_is_an_error() {
        let stabilizer = SignedPauliString::identity(4);
        assert_eq!(
            Err(EmptyStabilizerError),
            MeasurementPlan::for_stabilizer(&stabilizer)
        );
    }
}
