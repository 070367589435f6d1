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

//! Benchmark driver for stabilizer-state circuits.
//!
//! Sweeps a range of register sizes, assembles a batch of random circuits
//! per size with generation timing, and hands each batch to an execution
//! harness. Fidelity analysis of returned counts lives here too, so a
//! harness completion callback only needs [`analyze_result`].

pub mod harness;
pub mod metrics;

pub use harness::{CircuitJob, ExecutionHarness, IdealHarness, JsonLinesHarness};
pub use metrics::{Metric, MetricSink};

use std::fmt::{Display, Formatter};
use std::io;
use std::time::Instant;

use log::{info, warn};
use rand::{SeedableRng, rngs::StdRng};
use stabilizer_circuits::{AssembleError, Entangler, assemble};
use stabilizer_common::{CountDistribution, ParitySplit};

/// Parameters for one benchmark sweep.
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub min_qubits: usize,
    pub max_qubits: usize,
    /// Circuit instances generated per register size.
    pub circuits: usize,
    /// Shots requested per submitted job.
    pub shots: u64,
    /// Random Clifford layers per circuit.
    pub layers: usize,
    pub entangler: Entangler,
    pub seed: u64,
}

#[derive(Debug)]
pub enum BenchmarkError {
    Assemble(AssembleError),
    Harness(io::Error),
}

impl Display for BenchmarkError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Assemble(err) => write!(f, "circuit assembly failed: {err}"),
            Self::Harness(err) => write!(f, "execution harness failed: {err}"),
        }
    }
}

impl std::error::Error for BenchmarkError {}

impl From<AssembleError> for BenchmarkError {
    fn from(err: AssembleError) -> Self {
        Self::Assemble(err)
    }
}

impl From<io::Error> for BenchmarkError {
    fn from(err: io::Error) -> Self {
        Self::Harness(err)
    }
}

/// Parity-analyze a returned count distribution.
///
/// The ideal outcome is all-even parity, so the polarization fidelity of the
/// even bucket is the quality score a completion reports.
pub fn analyze_result(counts: &CountDistribution) -> (ParitySplit, f64) {
    let split = counts.parity_split();
    let fidelity = counts.polarization_fidelity();
    info!(
        "{} shots split {} even / {} odd, fidelity {}",
        counts.shots(),
        split.even,
        split.odd,
        fidelity
    );
    (split, fidelity)
}

/// Run the full sweep described by `config` against `harness`.
///
/// Both qubit bounds are clamped up to two, the smallest register a
/// two-qubit entangling layer makes sense on; a reversed range (minimum
/// above maximum) sweeps nothing but still finalizes the harness. Every
/// instance records a `create_time` metric (generation wall time in
/// seconds) before submission. The harness is throttled once per size
/// group and finalized at the end.
///
/// All randomness comes from a single generator seeded with `config.seed`,
/// so a rerun with the same configuration submits identical circuits.
pub fn run(
    config: &BenchmarkConfig,
    harness: &mut impl ExecutionHarness,
    sink: &mut MetricSink,
) -> Result<(), BenchmarkError> {
    let max_qubits = config.max_qubits.max(2);
    let min_qubits = config.min_qubits.max(2);
    assert!(
        max_qubits <= 63,
        "The stabilizer tableau supports at most 63 qubits, got {max_qubits}"
    );
    if min_qubits > max_qubits {
        warn!("Empty sweep: min_qubits {min_qubits} exceeds max_qubits {max_qubits}");
    }

    let mut rng = StdRng::seed_from_u64(config.seed);

    for qubits in min_qubits..=max_qubits {
        info!(
            "Generating [{}] circuits with {} qubits, {} layers, {} entangler",
            config.circuits, qubits, config.layers, config.entangler
        );

        for instance in 0..config.circuits {
            let started = Instant::now();
            let assembled = assemble(qubits, None, config.layers, config.entangler, &mut rng)?;
            sink.record(Metric::new(
                qubits,
                instance,
                "create_time",
                started.elapsed().as_secs_f64(),
            ));

            harness.submit(CircuitJob {
                qubits,
                instance,
                shots: config.shots,
                circuit: assembled.circuit,
            })?;
        }

        harness.throttle(sink)?;
    }

    harness.finalize(sink)?;
    Ok(())
}
