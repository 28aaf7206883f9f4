// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::{
    f64::consts::PI,
    fmt::{self, Display, Formatter},
    ops::Deref,
};

use serde::{Deserialize, Serialize};

use crate::Error;


/// Number of Grover iterations for an unstructured search over `input_length`
/// bits, `floor(π/4 · 2^(n/2))`.
///
/// The count is returned as a float since it exceeds `u64` for inputs larger
/// than 128 bits.
#[must_use]
pub fn grover_iterations(input_length: u32) -> f64 {
    (PI / 4.0 * 2f64.powf(f64::from(input_length) / 2.0)).floor()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GateKind {
    T,
    Cnot,
    QubitClifford,
}

impl GateKind {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            GateKind::T => "T",
            GateKind::Cnot => "CNOT",
            GateKind::QubitClifford => "QUBITCLIFFORD",
        }
    }
}

impl Display for GateKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Gate counts and width of a Clifford+T circuit.
///
/// Counts are integer valued but kept as floats, both because some published
/// counts are given as fractions of a total and because scaling by the number
/// of Grover iterations quickly exceeds the range of `u64`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    #[serde(rename = "T")]
    t: f64,
    #[serde(rename = "CNOT")]
    cnot: f64,
    #[serde(rename = "QUBITCLIFFORD")]
    qubit_clifford: f64,
    #[serde(rename = "WIDTH")]
    width: u64,
    #[serde(rename = "T_DEPTH")]
    t_depth: f64,
}

impl Circuit {
    pub fn new(
        t: f64,
        cnot: f64,
        qubit_clifford: f64,
        width: u64,
        t_depth: f64,
    ) -> Result<Self, Error> {
        let circuit = Self::from_counts(t, cnot, qubit_clifford, width, t_depth);
        circuit.validate()?;
        Ok(circuit)
    }

    pub(crate) const fn from_counts(
        t: f64,
        cnot: f64,
        qubit_clifford: f64,
        width: u64,
        t_depth: f64,
    ) -> Self {
        Self {
            t,
            cnot,
            qubit_clifford,
            width,
            t_depth,
        }
    }

    /// Checks that T count, T depth, and width are positive and that the
    /// Clifford counts are non-negative.
    #[allow(clippy::cast_precision_loss)]
    pub fn validate(&self) -> Result<(), Error> {
        let positive = [("T", self.t), ("T_DEPTH", self.t_depth)];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidCircuit { field, value });
            }
        }

        let non_negative = [("CNOT", self.cnot), ("QUBITCLIFFORD", self.qubit_clifford)];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidCircuit { field, value });
            }
        }

        if self.width == 0 {
            return Err(Error::InvalidCircuit {
                field: "WIDTH",
                value: self.width as f64,
            });
        }

        Ok(())
    }

    #[must_use]
    pub fn t(&self) -> f64 {
        self.t
    }

    #[must_use]
    pub fn cnot(&self) -> f64 {
        self.cnot
    }

    #[must_use]
    pub fn qubit_clifford(&self) -> f64 {
        self.qubit_clifford
    }

    #[must_use]
    pub fn width(&self) -> u64 {
        self.width
    }

    #[must_use]
    pub fn t_depth(&self) -> f64 {
        self.t_depth
    }

    #[must_use]
    pub fn count(&self, kind: GateKind) -> f64 {
        match kind {
            GateKind::T => self.t,
            GateKind::Cnot => self.cnot,
            GateKind::QubitClifford => self.qubit_clifford,
        }
    }

    /// All gates that are executed inside the surface code without magic
    /// states.
    #[must_use]
    pub fn clifford_gates(&self) -> f64 {
        self.qubit_clifford + self.cnot
    }

    /// Average number of gates of `kind` that fall into a single T layer.
    #[must_use]
    pub fn average_gates_per_t_layer(&self, kind: GateKind) -> f64 {
        self.count(kind) / self.t_depth
    }

    /// Repeats the circuit `iterations` times in sequence.  The width is
    /// unchanged since every repetition acts on the same register.
    #[must_use]
    pub fn scale(&self, iterations: f64) -> ScaledCircuit {
        ScaledCircuit {
            circuit: Circuit {
                t: self.t * iterations,
                cnot: self.cnot * iterations,
                qubit_clifford: self.qubit_clifford * iterations,
                width: self.width,
                t_depth: self.t_depth * iterations,
            },
            iterations,
        }
    }
}

impl Display for Circuit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "T: {}", self.t)?;
        writeln!(f, "CNOT: {}", self.cnot)?;
        writeln!(f, "QUBITCLIFFORD: {}", self.qubit_clifford)?;
        writeln!(f, "WIDTH: {}", self.width)?;
        writeln!(f, "T_DEPTH: {}", self.t_depth)
    }
}

/// A base circuit repeated for a fixed number of iterations.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ScaledCircuit {
    circuit: Circuit,
    iterations: f64,
}

impl ScaledCircuit {
    #[must_use]
    pub fn iterations(&self) -> f64 {
        self.iterations
    }

    #[must_use]
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }
}

impl Deref for ScaledCircuit {
    type Target = Circuit;

    fn deref(&self) -> &Self::Target {
        &self.circuit
    }
}
