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

use clap::ValueEnum;
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};
use stabilizer_cliffords::{
    SingleQubitClifford, StabilizerTableau, TwoQubitClifford, random_stabilizer,
};
use stabilizer_common::{Gate, SignedPauliString};

use crate::{
    Circuit, CircuitBuilder, CouplingGraph, EmptyStabilizerError, MeasurementPlan,
};

/// The two-qubit operation applied across each matched edge.
#[derive(ValueEnum, Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Entangler {
    /// A bare controlled-Z.
    Cz,
    /// A fresh uniform draw from the full two-qubit Clifford group.
    RandomClifford,
}

impl Display for Entangler {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cz => write!(f, "cz"),
            Self::RandomClifford => write!(f, "random-clifford"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssembleError {
    TopologyMismatch { graph_qubits: usize, qubits: usize },
    EmptyStabilizer(EmptyStabilizerError),
}

impl Display for AssembleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TopologyMismatch {
                graph_qubits,
                qubits,
            } => write!(
                f,
                "coupling graph declared over {graph_qubits} qubits, circuit has {qubits}"
            ),
            Self::EmptyStabilizer(err) => write!(f, "degenerate stabilizer: {err}"),
        }
    }
}

impl std::error::Error for AssembleError {}

impl From<EmptyStabilizerError> for AssembleError {
    fn from(err: EmptyStabilizerError) -> Self {
        Self::EmptyStabilizer(err)
    }
}

/// An assembled benchmark circuit together with the quantities the result
/// handler needs: the derived Clifford, the sampled stabilizer, and the
/// measured qubits (classical-bit count is `circuit.clbits()`).
#[derive(Debug, Clone)]
pub struct StabilizerCircuit {
    pub circuit: Circuit,
    pub clifford: StabilizerTableau,
    pub stabilizer: SignedPauliString,
    pub measured: Vec<usize>,
}

/// Compose `layers` random Clifford layers over the coupling topology, then
/// append the stabilizer measurement.
///
/// Each layer applies one independently sampled uniform single-qubit
/// Clifford to every qubit, then the entangler across each edge of a fresh
/// random maximal matching, so no qubit sees two two-qubit operations in
/// one layer. Passing no topology uses the complete graph.
///
/// All randomness flows through `rng`; a seeded generator reproduces the
/// circuit and its stabilizer bit-for-bit.
pub fn assemble<R: Rng + ?Sized>(
    qubits: usize,
    topology: Option<&CouplingGraph>,
    layers: usize,
    entangler: Entangler,
    rng: &mut R,
) -> Result<StabilizerCircuit, AssembleError> {
    let complete;
    let graph = match topology {
        Some(graph) => {
            if graph.qubits() != qubits {
                return Err(AssembleError::TopologyMismatch {
                    graph_qubits: graph.qubits(),
                    qubits,
                });
            }
            graph
        }
        None => {
            complete = CouplingGraph::complete(qubits);
            &complete
        }
    };

    let mut builder = CircuitBuilder::new(qubits);
    let mut tableau = StabilizerTableau::identity(qubits);

    for _ in 0..layers {
        for qubit in 0..qubits {
            let local: SingleQubitClifford = rng.random();
            for gate in local.gates(qubit) {
                push(&mut builder, &mut tableau, gate);
            }
        }

        for (a, b) in graph.random_matching(rng) {
            match entangler {
                Entangler::Cz => push(&mut builder, &mut tableau, Gate::Cz(a, b)),
                Entangler::RandomClifford => {
                    let clifford: TwoQubitClifford = rng.random();
                    for gate in clifford.gates(a, b) {
                        push(&mut builder, &mut tableau, gate);
                    }
                }
            }
        }
    }

    let stabilizer = random_stabilizer(&tableau, rng);
    let plan = MeasurementPlan::for_stabilizer(&stabilizer)?;

    // Delimit the unitary body from the measurement subcircuit.
    builder.barrier();
    plan.apply_to(&mut builder);

    let circuit = builder.finish();
    debug!(
        "Assembled {qubits}-qubit circuit: {} layers, {} gates, stabilizer {stabilizer}",
        layers,
        circuit.gate_count()
    );

    Ok(StabilizerCircuit {
        circuit,
        clifford: tableau,
        stabilizer,
        measured: plan.measured().to_vec(),
    })
}

fn push(builder: &mut CircuitBuilder, tableau: &mut StabilizerTableau, gate: Gate) {
    builder.push_gate(gate);
    tableau.apply(gate);
}
