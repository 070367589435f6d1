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

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use stabilizer_common::Gate;
use stabilizer_cliffords::StabilizerTableau;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum Instruction {
    Gate(Gate),
    Barrier,
    Measure { qubit: usize, cbit: usize },
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Instruction::Gate(gate) => write!(f, "{gate}"),
            Instruction::Barrier => write!(f, "barrier"),
            Instruction::Measure { qubit, cbit } => write!(f, "measure {qubit} -> {cbit}"),
        }
    }
}

/// A finished circuit: an ordered instruction sequence over a fixed qubit
/// register and classical register. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Circuit {
    qubits: usize,
    clbits: usize,
    instructions: Vec<Instruction>,
}

impl Circuit {
    pub fn qubits(&self) -> usize {
        self.qubits
    }

    pub fn clbits(&self) -> usize {
        self.clbits
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn gate_count(&self) -> usize {
        self.instructions
            .iter()
            .filter(|i| matches!(i, Instruction::Gate(_)))
            .count()
    }

    /// Replay the unitary part through a stabilizer tableau.
    ///
    /// Barriers are skipped; no measurement may precede a gate.
    pub fn clifford(&self) -> StabilizerTableau {
        let mut tableau = StabilizerTableau::identity(self.qubits);
        let mut measured = false;
        for instruction in &self.instructions {
            match instruction {
                Instruction::Gate(gate) => {
                    assert!(!measured, "Gate {gate} after measurement");
                    tableau.apply(*gate);
                }
                Instruction::Barrier => {}
                Instruction::Measure { .. } => measured = true,
            }
        }
        tableau
    }
}

impl Display for Circuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "qubits {}; clbits {}", self.qubits, self.clbits)?;
        for instruction in &self.instructions {
            writeln!(f, "{instruction}")?;
        }
        Ok(())
    }
}

/// Accumulates instructions and produces the finished [`Circuit`] on
/// [`finish`](CircuitBuilder::finish). The builder is consumed, so an
/// in-progress circuit can never alias a returned one.
#[derive(Debug)]
pub struct CircuitBuilder {
    qubits: usize,
    clbits: usize,
    instructions: Vec<Instruction>,
}

impl CircuitBuilder {
    pub fn new(qubits: usize) -> Self {
        assert!(qubits > 0, "Circuit needs at least one qubit");
        Self {
            qubits,
            clbits: 0,
            instructions: vec![],
        }
    }

    pub fn qubits(&self) -> usize {
        self.qubits
    }

    pub fn push_gate(&mut self, gate: Gate) {
        assert!(
            gate.max_qubit() < self.qubits,
            "Gate {gate} is out of range for {} qubits",
            self.qubits
        );
        self.instructions.push(Instruction::Gate(gate));
    }

    pub fn barrier(&mut self) {
        self.instructions.push(Instruction::Barrier);
    }

    /// Measure `qubit` into the next classical bit; returns the bit index.
    pub fn measure(&mut self, qubit: usize) -> usize {
        assert!(qubit < self.qubits, "Measured qubit {qubit} out of range");
        let cbit = self.clbits;
        self.clbits += 1;
        self.instructions.push(Instruction::Measure { qubit, cbit });
        cbit
    }

    pub fn finish(self) -> Circuit {
        Circuit {
            qubits: self.qubits,
            clbits: self.clbits,
            instructions: self.instructions,
        }
    }
}
