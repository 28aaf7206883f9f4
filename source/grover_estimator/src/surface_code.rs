// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Surface code footprint and the code distance of the Clifford region.

use log::debug;
use serde::Serialize;

use crate::{Circuit, Error};


/// Threshold of the recursive logical error rate relation in Eq. (12) of
/// [arXiv:1603.09383](https://arxiv.org/pdf/1603.09383).
pub const CLIFFORD_THRESHOLD: f64 = 0.0125;

/// Largest code distance any distance scan will consider.
pub const MAX_CODE_DISTANCE: u64 = 10_000;

/// Physical qubits per logical qubit at code distance `d`, see Section 7.1 in
/// [arXiv:1603.09383](https://arxiv.org/pdf/1603.09383) and Appendix M in
/// [arXiv:1208.0928](https://arxiv.org/pdf/1208.0928).
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn physical_qubits_for_distance(d: u64) -> f64 {
    2.5 * 1.25 * (d * d) as f64
}

/// Number of logical qubits occupied by one factory at distillation level
/// `level`.  Every level is made of 15-to-1 blocks fed by the level below,
/// on top of a base unit of 16 logical qubits.
#[must_use]
pub fn logical_qubit_multiplicity(level: u32) -> u64 {
    16 * 15u64.pow(level)
}

/// Surface code cycles for one round of distillation at code distance `d`.
#[must_use]
pub fn cycles_for_distillation(d: u64) -> u64 {
    10 * d
}

/// Smallest code distance `d` such that the logical error rate
/// `(p_in / 0.0125)^floor((d + 1) / 2)` of a single operation is below
/// `1 / clifford_gates`.
///
/// Follows Eq. (12) in [arXiv:1603.09383](https://arxiv.org/pdf/1603.09383),
/// but with the floored exponent used in
/// [arXiv:1010.5022](https://arxiv.org/pdf/1010.5022).  A region without
/// Clifford gates gets distance 1.
#[allow(clippy::cast_precision_loss)]
pub fn code_distance(p_in: f64, clifford_gates: f64) -> Result<u64, Error> {
    if p_in.is_nan() || p_in <= 0.0 {
        return Err(Error::InvalidProbability {
            quantity: "physical error rate",
            value: p_in,
        });
    }
    if p_in >= CLIFFORD_THRESHOLD {
        return Err(Error::CliffordThresholdExceeded {
            p_in,
            threshold: CLIFFORD_THRESHOLD,
        });
    }
    if !clifford_gates.is_finite() || clifford_gates < 0.0 {
        return Err(Error::InvalidParameter {
            quantity: "Clifford gate count",
            value: clifford_gates,
        });
    }

    let target = 1.0 / clifford_gates;
    let ratio = p_in / CLIFFORD_THRESHOLD;

    let distance = (1..=MAX_CODE_DISTANCE)
        .find(|d| ratio.powf(((d + 1) / 2) as f64) < target)
        .ok_or(Error::DistanceSearchExhausted {
            quantity: "Clifford region",
            limit: MAX_CODE_DISTANCE,
            target,
        })?;

    debug!("Clifford region needs distance {distance} for {clifford_gates} gates at p_in = {p_in}");

    Ok(distance)
}

/// Main register of the algorithm, protected with a single code distance.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CliffordRegion {
    distance: u64,
    width: u64,
}

impl CliffordRegion {
    /// Picks the code distance for all CNOT and single qubit Clifford gates in
    /// `circuit`.
    pub fn new(p_in: f64, circuit: &Circuit) -> Result<Self, Error> {
        let distance = code_distance(p_in, circuit.clifford_gates())?;

        Ok(Self {
            distance,
            width: circuit.width(),
        })
    }

    #[must_use]
    pub fn distance(&self) -> u64 {
        self.distance
    }

    #[must_use]
    pub fn width(&self) -> u64 {
        self.width
    }

    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn physical_qubits(&self) -> f64 {
        self.width as f64 * physical_qubits_for_distance(self.distance)
    }
}
