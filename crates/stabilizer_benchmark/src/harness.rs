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

//! The execution-harness boundary.
//!
//! The driver never talks to a backend directly. It hands assembled circuits
//! to an [`ExecutionHarness`] and collects whatever metrics the harness
//! reports back when submissions complete.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};
use stabilizer_circuits::Circuit;
use stabilizer_common::CountDistribution;

use crate::{Metric, MetricSink, analyze_result};

/// A generated circuit queued for execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircuitJob {
    pub qubits: usize,
    pub instance: usize,
    pub shots: u64,
    pub circuit: Circuit,
}

/// Where assembled circuits go to be run.
///
/// `submit` is fire-and-forget. `throttle` lets a backend drain some
/// in-flight work between circuit sizes, and `finalize` drains everything;
/// both report completion metrics through the sink.
pub trait ExecutionHarness {
    fn submit(&mut self, job: CircuitJob) -> io::Result<()>;
    fn throttle(&mut self, sink: &mut MetricSink) -> io::Result<()>;
    fn finalize(&mut self, sink: &mut MetricSink) -> io::Result<()>;
}

/// Streams every submitted job as one JSON object per line, the shape the
/// downstream executor reads from stdin.
#[derive(Debug)]
pub struct JsonLinesHarness<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesHarness<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ExecutionHarness for JsonLinesHarness<W> {
    fn submit(&mut self, job: CircuitJob) -> io::Result<()> {
        let mut out = serde_json::to_string(&job)?;
        out.push('\n');
        self.writer.write_all(out.as_bytes())
    }

    fn throttle(&mut self, _sink: &mut MetricSink) -> io::Result<()> {
        self.writer.flush()
    }

    fn finalize(&mut self, _sink: &mut MetricSink) -> io::Result<()> {
        self.writer.flush()
    }
}

/// A noiseless stand-in backend: every shot reads out all zeros, so every
/// job completes with a `fidelity` metric of 1.0.
#[derive(Debug, Default)]
pub struct IdealHarness {
    pending: Vec<CircuitJob>,
}

impl IdealHarness {
    pub fn new() -> Self {
        Self::default()
    }

    fn complete_pending(&mut self, sink: &mut MetricSink) {
        for job in self.pending.drain(..) {
            let zeros = "0".repeat(job.circuit.clbits());
            let counts = CountDistribution::new([(zeros, job.shots)], job.shots)
                .expect("an all-zeros readout should form a valid distribution");
            let (_, fidelity) = analyze_result(&counts);
            sink.record(Metric::new(job.qubits, job.instance, "fidelity", fidelity));
        }
    }
}

impl ExecutionHarness for IdealHarness {
    fn submit(&mut self, job: CircuitJob) -> io::Result<()> {
        self.pending.push(job);
        Ok(())
    }

    fn throttle(&mut self, sink: &mut MetricSink) -> io::Result<()> {
        self.complete_pending(sink);
        Ok(())
    }

    fn finalize(&mut self, sink: &mut MetricSink) -> io::Result<()> {
        self.complete_pending(sink);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::StdRng};
    use stabilizer_circuits::{Entangler, assemble};

    fn job(qubits: usize, instance: usize, shots: u64, seed: u64) -> CircuitJob {
        let mut rng = StdRng::seed_from_u64(seed);
        let assembled = assemble(qubits, None, 2, Entangler::Cz, &mut rng).unwrap();
        CircuitJob {
            qubits,
            instance,
            shots,
            circuit: assembled.circuit,
        }
    }

    #[test]
    fn json_lines_harness_writes_one_line_per_job() {
        let mut harness = JsonLinesHarness::new(Vec::new());
        let mut sink = MetricSink::new();
        harness.submit(job(3, 0, 100, 1)).unwrap();
        harness.submit(job(3, 1, 100, 2)).unwrap();
        harness.finalize(&mut sink).unwrap();

        let out = String::from_utf8(harness.into_inner()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(2, lines.len());

        for (instance, line) in lines.iter().enumerate() {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert_eq!(3, value["qubits"]);
            assert_eq!(instance, value["instance"].as_u64().unwrap() as usize);
            assert_eq!(100, value["shots"]);
        }
    }

    #[test]
    fn json_lines_jobs_round_trip() {
        let submitted = job(4, 2, 50, 9);
        let mut harness = JsonLinesHarness::new(Vec::new());
        harness.submit(submitted.clone()).unwrap();

        let out = harness.into_inner();
        let parsed: CircuitJob = serde_json::from_slice(&out).unwrap();
        assert_eq!(submitted.circuit, parsed.circuit);
        assert_eq!(submitted.shots, parsed.shots);
    }

    #[test]
    fn ideal_harness_reports_perfect_fidelity_on_completion() {
        let mut harness = IdealHarness::new();
        let mut sink = MetricSink::new();
        harness.submit(job(2, 0, 100, 3)).unwrap();
        harness.submit(job(3, 0, 100, 4)).unwrap();

        // Nothing completes until a barrier.
        assert!(sink.records().is_empty());

        harness.throttle(&mut sink).unwrap();
        assert_eq!(2, sink.records().len());
        for metric in sink.records() {
            assert_eq!("fidelity", metric.metric);
            assert_eq!(1.0, metric.value);
        }

        // The queue drained, so finalizing adds nothing.
        harness.finalize(&mut sink).unwrap();
        assert_eq!(2, sink.records().len());
    }
}
