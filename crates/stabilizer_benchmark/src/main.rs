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

use std::{error::Error, fs, fs::File, io, path::Path};

use clap::Parser;
use log::info;

use stabilizer_benchmark::{BenchmarkConfig, JsonLinesHarness, MetricSink, run};
use stabilizer_circuits::Entangler;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value_t = 3)]
    min_qubits: usize,
    #[arg(long, default_value_t = 6)]
    max_qubits: usize,
    /// Circuit instances per register size.
    #[arg(short, long, default_value_t = 3)]
    circuits: usize,
    /// Shots requested per submitted job.
    #[arg(short, long, default_value_t = 100)]
    shots: u64,
    /// Random Clifford layers per circuit.
    #[arg(short, long, default_value_t = 10)]
    layers: usize,
    #[arg(short, long, default_value_t = Entangler::Cz)]
    entangler: Entangler,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Write collected metrics to this CSV file.
    #[arg(short, long)]
    metrics: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    // By default log INFO.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    assert!(
        cli.max_qubits <= 63,
        "The stabilizer tableau supports at most 63 qubits"
    );

    // Open the metrics file up front so a bad path fails before the sweep
    // rather than after it.
    let metrics_file = match &cli.metrics {
        Some(metrics_str) => {
            let metrics_path = Path::new(metrics_str);
            if let Some(parent) = metrics_path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            Some(File::create(metrics_path)?)
        }
        None => None,
    };

    let config = BenchmarkConfig {
        min_qubits: cli.min_qubits,
        max_qubits: cli.max_qubits,
        circuits: cli.circuits,
        shots: cli.shots,
        layers: cli.layers,
        entangler: cli.entangler,
        seed: cli.seed,
    };

    let stdout = io::stdout();
    let mut harness = JsonLinesHarness::new(stdout.lock());
    let mut sink = MetricSink::new();
    run(&config, &mut harness, &mut sink)?;

    if let Some(file) = metrics_file {
        sink.write_csv(file)?;
        info!("Wrote {} metric records", sink.records().len());
    }

    Ok(())
}
