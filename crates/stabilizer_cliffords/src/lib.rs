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

pub mod sampler;
mod single_qubit;
mod tableau;
mod two_qubit;

pub use sampler::random_stabilizer;
pub use single_qubit::{Frame, SingleQubitClifford};
pub use tableau::StabilizerTableau;
pub use two_qubit::{AxisCycle, EntanglingClass, TwoQubitClifford};
