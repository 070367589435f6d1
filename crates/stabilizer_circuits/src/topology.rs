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

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Qubit-coupling topology: a set of unordered qubit-index pairs over a
/// declared register size.
///
/// Edges are normalized to `(lo, hi)` order and deduplicated so each pair
/// appears once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CouplingGraph {
    qubits: usize,
    edges: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopologyError {
    QubitOutOfRange { qubit: usize, qubits: usize },
    SelfLoop { qubit: usize },
}

impl Display for TopologyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::QubitOutOfRange { qubit, qubits } => write!(
                f,
                "edge references qubit {qubit}, register has {qubits} qubits"
            ),
            Self::SelfLoop { qubit } => {
                write!(f, "edge connects qubit {qubit} to itself")
            }
        }
    }
}

impl std::error::Error for TopologyError {}

impl CouplingGraph {
    pub fn new(
        qubits: usize,
        edges: impl IntoIterator<Item = (usize, usize)>,
    ) -> Result<Self, TopologyError> {
        let mut normalized: Vec<(usize, usize)> = vec![];
        for (a, b) in edges {
            if a == b {
                return Err(TopologyError::SelfLoop { qubit: a });
            }
            for qubit in [a, b] {
                if qubit >= qubits {
                    return Err(TopologyError::QubitOutOfRange { qubit, qubits });
                }
            }
            let edge = (a.min(b), a.max(b));
            if !normalized.contains(&edge) {
                normalized.push(edge);
            }
        }
        Ok(Self {
            qubits,
            edges: normalized,
        })
    }

    /// The complete graph on `qubits` qubits, the default topology.
    pub fn complete(qubits: usize) -> Self {
        let mut edges = vec![];
        for a in 0..qubits {
            for b in (a + 1)..qubits {
                edges.push((a, b));
            }
        }
        Self { qubits, edges }
    }

    pub fn qubits(&self) -> usize {
        self.qubits
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Greedily select a maximal matching.
    ///
    /// Repeatedly samples a uniform remaining edge, keeps it, and drops
    /// every edge sharing an endpoint with it. No qubit appears in more
    /// than one returned pair.
    pub fn random_matching<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<(usize, usize)> {
        let mut remaining = self.edges.clone();
        let mut matching = vec![];
        while !remaining.is_empty() {
            let pick = remaining.swap_remove(rng.random_range(0..remaining.len()));
            remaining.retain(|(a, b)| {
                *a != pick.0 && *a != pick.1 && *b != pick.0 && *b != pick.1
            });
            matching.push(pick);
        }
        matching
    }
}
