// Copyright contributors to the Stabilizer State Benchmark project

use std::fmt::Display;

use rand::distr::{Distribution, StandardUniform};
use serde::{Deserialize, Serialize};
use stabilizer_common::{Gate, Pauli};

/// One of the six axis permutations of the single-qubit Clifford group,
/// realized as a short H/S word.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Frame {
    Identity,
    H,
    S,
    HS,
    SH,
    HSH,
}

impl Frame {
    pub const ALL: [Frame; 6] = [
        Frame::Identity,
        Frame::H,
        Frame::S,
        Frame::HS,
        Frame::SH,
        Frame::HSH,
    ];

    /// The gate word realizing this frame on `qubit`, in circuit order.
    fn gates(self, qubit: usize) -> Vec<Gate> {
        match self {
            Frame::Identity => vec![],
            Frame::H => vec![Gate::H(qubit)],
            Frame::S => vec![Gate::S(qubit)],
            Frame::HS => vec![Gate::H(qubit), Gate::S(qubit)],
            Frame::SH => vec![Gate::S(qubit), Gate::H(qubit)],
            Frame::HSH => vec![Gate::H(qubit), Gate::S(qubit), Gate::H(qubit)],
        }
    }
}

/// An element of the 24-element single-qubit Clifford group, decomposed as
/// an axis-permutation frame followed by a Pauli (up to global phase).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SingleQubitClifford {
    pub frame: Frame,
    pub pauli: Pauli,
}

impl SingleQubitClifford {
    pub const COUNT: usize = 24;

    /// Enumerate all 24 group elements.
    pub fn all() -> Vec<SingleQubitClifford> {
        let paulis = [Pauli::I, Pauli::X, Pauli::Z, Pauli::Y];

        let mut out = vec![];
        for frame in Frame::ALL {
            for pauli in paulis {
                out.push(SingleQubitClifford { frame, pauli });
            }
        }
        out
    }

    /// The gate word realizing this element on `qubit`, in circuit order.
    pub fn gates(&self, qubit: usize) -> Vec<Gate> {
        let mut gates = self.frame.gates(qubit);
        match self.pauli {
            Pauli::I => {}
            Pauli::X => gates.push(Gate::X(qubit)),
            Pauli::Z => gates.push(Gate::Z(qubit)),
            // Y is XZ up to global phase.
            Pauli::Y => {
                gates.push(Gate::Z(qubit));
                gates.push(Gate::X(qubit));
            }
        }
        gates
    }
}

impl Display for SingleQubitClifford {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "C({:?}, {})", self.frame, self.pauli)
    }
}

impl Distribution<SingleQubitClifford> for StandardUniform {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> SingleQubitClifford {
        let frame = Frame::ALL[rng.random_range(0..Frame::ALL.len())];
        SingleQubitClifford {
            frame,
            pauli: StandardUniform.sample(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use itertools::Itertools;

    use super::*;
    use crate::StabilizerTableau;

    /// Image of Z and X under conjugation by the element's gate word.
    ///
    /// The X image comes from prepending H, since X = H Z H; the pair of
    /// images determines a single-qubit Clifford up to global phase.
    fn conjugation_images(c: &SingleQubitClifford) -> (String, String) {
        let mut z_image = StabilizerTableau::identity(1);
        for gate in c.gates(0) {
            z_image.apply(gate);
        }

        let mut x_image = StabilizerTableau::identity(1);
        x_image.apply(Gate::H(0));
        for gate in c.gates(0) {
            x_image.apply(gate);
        }

        (
            format!("{}", z_image.stabilizer(0)),
            format!("{}", x_image.stabilizer(0)),
        )
    }

    #[test]
    fn twenty_four_elements() {
        let all = SingleQubitClifford::all();
        assert_eq!(SingleQubitClifford::COUNT, all.len());
        assert_eq!(SingleQubitClifford::COUNT, all.iter().unique().count());
    }

    #[test]
    fn elements_act_distinctly() {
        let images: HashSet<_> = SingleQubitClifford::all()
            .iter()
            .map(conjugation_images)
            .collect();
        assert_eq!(SingleQubitClifford::COUNT, images.len());
    }

    #[test]
    fn identity_element_has_no_gates() {
        let id = SingleQubitClifford {
            frame: Frame::Identity,
            pauli: Pauli::I,
        };
        assert!(id.gates(5).is_empty());
    }

    #[test]
    fn sampling_reaches_every_element() {
        use rand::{Rng, SeedableRng};
        let mut rng = rand::rngs::StdRng::seed_from_u64(3);
        let sampled: HashSet<SingleQubitClifford> =
            (0..2000).map(|_| rng.random()).collect();
        assert_eq!(SingleQubitClifford::COUNT, sampled.len());
    }
}
