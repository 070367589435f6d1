// Copyright contributors to the Stabilizer State Benchmark project

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// The elementary Clifford gate alphabet shared by the tableau, the
/// single-qubit Clifford decomposition, and the circuit layer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Gate {
    H(usize),
    S(usize),
    Sdg(usize),
    X(usize),
    Z(usize),
    Cz(usize, usize),
}

impl Gate {
    /// The qubit indices the gate touches.
    pub fn qubits(&self) -> (usize, Option<usize>) {
        match *self {
            Gate::H(q) | Gate::S(q) | Gate::Sdg(q) | Gate::X(q) | Gate::Z(q) => (q, None),
            Gate::Cz(a, b) => (a, Some(b)),
        }
    }

    pub fn max_qubit(&self) -> usize {
        match self.qubits() {
            (a, Some(b)) => a.max(b),
            (a, None) => a,
        }
    }
}

impl Display for Gate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Gate::H(q) => write!(f, "h {q}"),
            Gate::S(q) => write!(f, "s {q}"),
            Gate::Sdg(q) => write!(f, "sdg {q}"),
            Gate::X(q) => write!(f, "x {q}"),
            Gate::Z(q) => write!(f, "z {q}"),
            Gate::Cz(a, b) => write!(f, "cz {a} {b}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qubit_accessors() {
        assert_eq!((3, None), Gate::H(3).qubits());
        assert_eq!((1, Some(4)), Gate::Cz(1, 4).qubits());
        assert_eq!(4, Gate::Cz(1, 4).max_qubit());
        assert_eq!(2, Gate::Sdg(2).max_qubit());
    }

    #[test]
    fn display_format() {
        assert_eq!("sdg 0", format!("{}", Gate::Sdg(0)));
        assert_eq!("cz 2 5", format!("{}", Gate::Cz(2, 5)));
    }
}
