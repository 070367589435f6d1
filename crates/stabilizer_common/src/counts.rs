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

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Measurement counts over fixed-width bitstrings with a declared shot total.
///
/// The invariant that counts sum to the declared shots is checked at
/// construction, so a distribution can never reach the parity analyzer in a
/// partially-correct state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountDistribution {
    counts: BTreeMap<String, u64>,
    shots: u64,
    width: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountsError {
    Empty,
    ShotCountMismatch { declared: u64, found: u64 },
    WidthMismatch { expected: usize, bitstring: String },
    NonBinaryBit { bitstring: String },
}

impl Display for CountsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "count distribution has no shots"),
            Self::ShotCountMismatch { declared, found } => write!(
                f,
                "count sum disagrees with declared shots: declared {declared}, found {found}"
            ),
            Self::WidthMismatch { expected, bitstring } => write!(
                f,
                "bitstring '{bitstring}' does not match width {expected}"
            ),
            Self::NonBinaryBit { bitstring } => {
                write!(f, "bitstring '{bitstring}' contains a non-binary digit")
            }
        }
    }
}

impl std::error::Error for CountsError {}

/// Shot counts bucketed by total bitstring parity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParitySplit {
    pub even: u64,
    pub odd: u64,
}

impl CountDistribution {
    pub fn new(
        counts: impl IntoIterator<Item = (String, u64)>,
        shots: u64,
    ) -> Result<Self, CountsError> {
        if shots == 0 {
            return Err(CountsError::Empty);
        }

        let counts: BTreeMap<String, u64> = counts.into_iter().collect();
        let width = match counts.keys().next() {
            Some(first) => first.len(),
            None => return Err(CountsError::ShotCountMismatch { declared: shots, found: 0 }),
        };

        for bitstring in counts.keys() {
            if bitstring.len() != width {
                return Err(CountsError::WidthMismatch {
                    expected: width,
                    bitstring: bitstring.clone(),
                });
            }
            if bitstring.chars().any(|c| c != '0' && c != '1') {
                return Err(CountsError::NonBinaryBit {
                    bitstring: bitstring.clone(),
                });
            }
        }

        let found: u64 = counts.values().sum();
        if found != shots {
            return Err(CountsError::ShotCountMismatch {
                declared: shots,
                found,
            });
        }

        Ok(Self { counts, shots, width })
    }

    pub fn shots(&self) -> u64 {
        self.shots
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn counts(&self) -> &BTreeMap<String, u64> {
        &self.counts
    }

    /// Bucket every bitstring count by its total parity (popcount mod 2).
    pub fn parity_split(&self) -> ParitySplit {
        let mut split = ParitySplit { even: 0, odd: 0 };
        for (bitstring, count) in &self.counts {
            let ones = bitstring.chars().filter(|c| *c == '1').count();
            if ones % 2 == 0 {
                split.even += count;
            } else {
                split.odd += count;
            }
        }
        split
    }

    /// Polarization-rescaled fidelity against the ideal all-even claim.
    ///
    /// Rescales the even-parity probability so the uniform two-outcome
    /// baseline of 1/2 maps to 0 and certainty maps to 1, clamped below at 0.
    pub fn polarization_fidelity(&self) -> f64 {
        let split = self.parity_split();
        let p_even = split.even as f64 / self.shots as f64;
        ((p_even - 0.5) / 0.5).max(0.0)
    }
}
