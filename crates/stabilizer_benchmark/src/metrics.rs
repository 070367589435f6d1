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

//! Metric records collected during a benchmark run and their CSV sink.

use std::io::Write;

use log::debug;
use serde::{Deserialize, Serialize};

/// One named observation, keyed by circuit size and instance index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub qubits: usize,
    pub instance: usize,
    pub metric: String,
    pub value: f64,
}

impl Metric {
    pub fn new(qubits: usize, instance: usize, metric: impl Into<String>, value: f64) -> Self {
        Self {
            qubits,
            instance,
            metric: metric.into(),
            value,
        }
    }
}

/// Accumulates metric records from the driver and from harness completions,
/// in arrival order.
#[derive(Debug, Default)]
pub struct MetricSink {
    records: Vec<Metric>,
}

impl MetricSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, metric: Metric) {
        debug!(
            "{} qubits, instance {}: {} = {}",
            metric.qubits, metric.instance, metric.metric, metric.value
        );
        self.records.push(metric);
    }

    pub fn records(&self) -> &[Metric] {
        &self.records
    }

    /// Serialize all records as a CSV table with a header row.
    pub fn write_csv<W: Write>(&self, writer: W) -> csv::Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for metric in &self.records {
            wtr.serialize(metric)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_keep_arrival_order() {
        let mut sink = MetricSink::new();
        sink.record(Metric::new(3, 0, "create_time", 0.25));
        sink.record(Metric::new(3, 0, "fidelity", 1.0));
        sink.record(Metric::new(4, 1, "create_time", 0.5));

        let names: Vec<&str> = sink.records().iter().map(|m| m.metric.as_str()).collect();
        assert_eq!(vec!["create_time", "fidelity", "create_time"], names);
    }

    #[test]
    fn csv_output_has_a_header_and_one_row_per_record() {
        let mut sink = MetricSink::new();
        sink.record(Metric::new(2, 0, "create_time", 0.125));
        sink.record(Metric::new(2, 1, "fidelity", 1.0));

        let mut buffer = Vec::new();
        sink.write_csv(&mut buffer).unwrap();
        let table = String::from_utf8(buffer).unwrap();

        let mut lines = table.lines();
        assert_eq!(Some("qubits,instance,metric,value"), lines.next());
        assert_eq!(Some("2,0,create_time,0.125"), lines.next());
        assert_eq!(Some("2,1,fidelity,1.0"), lines.next());
        assert_eq!(None, lines.next());
    }
}
