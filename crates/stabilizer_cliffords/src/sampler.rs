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

use log::trace;
use rand::Rng;
use stabilizer_common::SignedPauliString;

use crate::StabilizerTableau;

/// Draw one random signed Pauli stabilizer of the tableau's state.
///
/// Picks a uniform subset index `m` in `[1, 2^n - 1]` and multiplies the
/// generators selected by the binary digits of `m`, tracking the sign.
/// Excluding `m = 0` guarantees the result is never the all-identity string.
pub fn random_stabilizer<R: Rng + ?Sized>(
    tableau: &StabilizerTableau,
    rng: &mut R,
) -> SignedPauliString {
    let n = tableau.qubits();
    let m: u64 = rng.random_range(1..(1 << n));
    trace!("Sampled generator subset index {m:#b} over {n} qubits");

    let mut stabilizer = SignedPauliString::identity(n);
    for i in 0..n {
        if (m >> i) & 1 == 1 {
            stabilizer = stabilizer.mul(&tableau.stabilizer(i));
        }
    }
    stabilizer
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::{SeedableRng, rngs::StdRng};
    use stabilizer_common::{Gate, Sign};

    use super::*;

    fn bell_tableau() -> StabilizerTableau {
        let mut t = StabilizerTableau::identity(2);
        t.apply(Gate::H(0));
        t.apply(Gate::H(1));
        t.apply(Gate::Cz(0, 1));
        t.apply(Gate::H(1));
        t
    }

    #[test]
    fn never_returns_identity() {
        for qubits in 1..=4 {
            let tableau = StabilizerTableau::identity(qubits);
            let mut rng = StdRng::seed_from_u64(qubits as u64);
            for _ in 0..200 {
                let stabilizer = random_stabilizer(&tableau, &mut rng);
                assert!(!stabilizer.is_identity());
                assert_eq!(qubits, stabilizer.len());
            }
        }
    }

    #[test]
    fn bell_samples_lie_in_the_stabilizer_group() {
        // The Bell pair's non-identity stabilizers: XX, ZZ, and -YY.
        let tableau = bell_tableau();
        let mut rng = StdRng::seed_from_u64(0);

        let mut seen = HashSet::new();
        for _ in 0..100 {
            let s = random_stabilizer(&tableau, &mut rng);
            seen.insert(format!("{s}"));
        }
        let expected: HashSet<String> =
            ["+XX", "+ZZ", "-YY"].iter().map(|s| s.to_string()).collect();
        assert_eq!(expected, seen);
    }

    #[test]
    fn covers_every_subset_for_small_registers() {
        // 2^3 - 1 = 7 possible products; all must be reachable.
        let mut t = StabilizerTableau::identity(3);
        t.apply(Gate::H(0));
        t.apply(Gate::Cz(0, 1));
        t.apply(Gate::Cz(1, 2));

        let mut rng = StdRng::seed_from_u64(5);
        let seen: HashSet<String> = (0..500)
            .map(|_| format!("{}", random_stabilizer(&t, &mut rng)))
            .collect();
        assert_eq!(7, seen.len());
    }

    #[test]
    fn seeded_draws_replay_identically() {
        let tableau = bell_tableau();
        let a = random_stabilizer(&tableau, &mut StdRng::seed_from_u64(42));
        let b = random_stabilizer(&tableau, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn signs_are_well_defined() {
        let tableau = bell_tableau();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..50 {
            let s = random_stabilizer(&tableau, &mut rng);
            // -YY is the only negative element of the Bell group.
            if s.sign() == Sign::Minus {
                assert_eq!("-YY", format!("{s}"));
            }
        }
    }
}
