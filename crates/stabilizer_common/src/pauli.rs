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

use std::fmt::Display;

use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Serialize};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Default)]
pub enum Pauli {
    #[default]
    I,
    X,
    Z,
    Y,
}

impl Pauli {
    /// Multiply two single-qubit Paulis in the Pauli group.
    ///
    /// Returns the resulting symbol and the power of the imaginary unit
    /// (mod 4) the product picks up, e.g. `X * Z = -iY` gives `(Y, 3)`.
    pub fn mul_with_phase(self, rhs: Self) -> (Self, u8) {
        use Pauli::{I, X, Y, Z};
        match (self, rhs) {
            (I, p) => (p, 0),
            (p, I) => (p, 0),
            (X, X) | (Y, Y) | (Z, Z) => (I, 0),
            (X, Y) => (Z, 1),
            (Y, X) => (Z, 3),
            (Y, Z) => (X, 1),
            (Z, Y) => (X, 3),
            (Z, X) => (Y, 1),
            (X, Z) => (Y, 3),
        }
    }
}

impl Display for Pauli {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Distribution<Pauli> for StandardUniform {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> Pauli {
        let i = rng.random_range(0..=3);
        match i {
            0 => Pauli::I,
            1 => Pauli::Z,
            2 => Pauli::X,
            3 => Pauli::Y,
            _ => unreachable!("RNG number out of range"),
        }
    }
}

impl TryFrom<&char> for Pauli {
    type Error = String;

    fn try_from(value: &char) -> Result<Self, Self::Error> {
        match value.to_ascii_lowercase() {
            'i' => Ok(Pauli::I),
            'x' => Ok(Pauli::X),
            'z' => Ok(Pauli::Z),
            'y' => Ok(Pauli::Y),
            c => Err(format!("Cannot convert {} to Pauli", c)),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Default)]
pub enum Sign {
    #[default]
    Plus,
    Minus,
}

impl Sign {
    pub fn flipped(self) -> Self {
        match self {
            Self::Plus => Self::Minus,
            Self::Minus => Self::Plus,
        }
    }

    /// The sign as a power of the imaginary unit: `+1 = i^0`, `-1 = i^2`.
    fn phase_exponent(self) -> u8 {
        match self {
            Self::Plus => 0,
            Self::Minus => 2,
        }
    }
}

impl Display for Sign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}

/// A Pauli string with a ±1 sign, one symbol per qubit.
///
/// Qubit `i` carries symbol `i`; the length is the qubit count.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SignedPauliString {
    sign: Sign,
    paulis: Vec<Pauli>,
}

impl SignedPauliString {
    pub fn new(sign: Sign, paulis: Vec<Pauli>) -> Self {
        Self { sign, paulis }
    }

    /// The all-identity string with positive sign.
    pub fn identity(qubits: usize) -> Self {
        Self {
            sign: Sign::Plus,
            paulis: vec![Pauli::I; qubits],
        }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn paulis(&self) -> &[Pauli] {
        &self.paulis
    }

    pub fn len(&self) -> usize {
        self.paulis.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paulis.is_empty()
    }

    /// Number of non-identity symbols.
    pub fn weight(&self) -> usize {
        self.paulis.iter().filter(|p| **p != Pauli::I).count()
    }

    pub fn is_identity(&self) -> bool {
        self.paulis.iter().all(|p| *p == Pauli::I)
    }

    /// Pauli-group product with phase bookkeeping.
    ///
    /// Accumulates the power of `i` across qubits and both signs. Commuting
    /// operators (all stabilizer-group elements in particular) multiply to a
    /// Hermitian result, so the accumulated phase is always ±1.
    pub fn mul(&self, rhs: &Self) -> SignedPauliString {
        assert_eq!(
            self.len(),
            rhs.len(),
            "Cannot multiply Pauli strings of different length"
        );

        let mut exponent =
            (self.sign.phase_exponent() + rhs.sign.phase_exponent()) % 4;
        let paulis = self
            .paulis
            .iter()
            .zip(&rhs.paulis)
            .map(|(a, b)| {
                let (p, phase) = a.mul_with_phase(*b);
                exponent = (exponent + phase) % 4;
                p
            })
            .collect();

        assert!(
            exponent % 2 == 0,
            "Product of commuting Pauli strings must carry a real phase, got i^{exponent}"
        );
        let sign = if exponent == 2 { Sign::Minus } else { Sign::Plus };
        SignedPauliString { sign, paulis }
    }
}

impl Display for SignedPauliString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.sign)?;
        for pauli in &self.paulis {
            write!(f, "{}", pauli)?;
        }
        Ok(())
    }
}

impl TryFrom<&str> for SignedPauliString {
    type Error = String;

    /// Parse a label such as `"-XIZ"` or `"XYZ"` (sign optional).
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let (sign, symbols) = match value.strip_prefix('-') {
            Some(rest) => (Sign::Minus, rest),
            None => (Sign::Plus, value.strip_prefix('+').unwrap_or(value)),
        };
        let paulis = symbols
            .chars()
            .map(|c| Pauli::try_from(&c))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { sign, paulis })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use Pauli::{I, X, Y, Z};

    #[test]
    fn single_qubit_products() {
        assert_eq!((I, 0), I.mul_with_phase(I));
        assert_eq!((X, 0), I.mul_with_phase(X));
        assert_eq!((I, 0), Y.mul_with_phase(Y));
        assert_eq!((Z, 1), X.mul_with_phase(Y));
        assert_eq!((Z, 3), Y.mul_with_phase(X));
        assert_eq!((Y, 1), Z.mul_with_phase(X));
        assert_eq!((Y, 3), X.mul_with_phase(Z));
        assert_eq!((X, 1), Y.mul_with_phase(Z));
        assert_eq!((X, 3), Z.mul_with_phase(Y));
    }

    #[test]
    fn phases_compose_to_real_signs() {
        // XZ * ZX = (XZ)(ZX) qubit-wise: X*Z = -iY, Z*X = iY; phases cancel.
        let a = SignedPauliString::try_from("XZ").unwrap();
        let b = SignedPauliString::try_from("ZX").unwrap();
        let prod = a.mul(&b);
        assert_eq!(Sign::Plus, prod.sign());
        assert_eq!(&[Y, Y], prod.paulis());

        // XZ * YI: X*Y = iZ on qubit 0 only would be imaginary, but these
        // anticommute; pair with the commuting ZX instead.
        let c = SignedPauliString::try_from("-ZX").unwrap();
        let prod = a.mul(&c);
        assert_eq!(Sign::Minus, prod.sign());
    }

    #[test]
    fn identity_is_neutral() {
        let s = SignedPauliString::try_from("-XYZI").unwrap();
        let id = SignedPauliString::identity(4);
        assert_eq!(s, s.mul(&id));
        assert_eq!(s, id.mul(&s));
    }

    #[test]
    fn squares_are_positive_identity() {
        for label in ["XX", "YZ", "-ZY", "XYZI"] {
            let s = SignedPauliString::try_from(label).unwrap();
            let sq = s.mul(&s);
            assert!(sq.is_identity(), "{label} squared should be identity");
            assert_eq!(Sign::Plus, sq.sign());
        }
    }

    #[test]
    fn weight_counts_non_identity() {
        let s = SignedPauliString::try_from("IXIZY").unwrap();
        assert_eq!(3, s.weight());
        assert_eq!(5, s.len());
        assert!(!s.is_identity());
        assert!(SignedPauliString::identity(3).is_identity());
    }

    #[test]
    fn display_round_trips_labels() {
        for label in ["+XIZ", "-YYI", "+IIII"] {
            let s = SignedPauliString::try_from(label).unwrap();
            assert_eq!(label, format!("{}", s));
        }
    }

    #[test]
    fn parse_rejects_unknown_symbols() {
        assert!(SignedPauliString::try_from("XQZ").is_err());
    }

    #[test]
    fn sampled_paulis_cover_all_symbols() {
        use rand::{Rng, SeedableRng};
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        let sampled: Vec<Pauli> = (0..200).map(|_| rng.random()).collect();
        for p in [I, X, Z, Y] {
            assert!(sampled.contains(&p));
        }
    }
}
