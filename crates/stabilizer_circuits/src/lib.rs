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

mod assemble;
mod circuit;
mod measure;
mod topology;

pub use assemble::{AssembleError, Entangler, StabilizerCircuit, assemble};
pub use circuit::{Circuit, CircuitBuilder, Instruction};
pub use measure::{EmptyStabilizerError, MeasurementPlan};
pub use topology::{CouplingGraph, TopologyError};
