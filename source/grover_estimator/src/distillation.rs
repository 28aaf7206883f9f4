// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::ops::Deref;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    Error,
    surface_code::{
        MAX_CODE_DISTANCE, cycles_for_distillation, logical_qubit_multiplicity,
        physical_qubits_for_distance,
    },
};


/// Upper bound on the number of distillation levels.  The per-level update
/// `p -> (p / 70)^(1/3)` has a fixed point near `0.12`, so a physical error
/// rate above it would otherwise never end the level loop.
pub const MAX_DISTILLATION_LEVELS: u32 = 12;

/// Hyper parameters of the distillation distance search, see Algorithm 4 in
/// [arXiv:1603.09383](https://arxiv.org/pdf/1603.09383).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistillationParams {
    /// Share of the error budget given to the Clifford operations of the
    /// factory, relative to the distillation error.
    epsilon: f64,
    /// Error rate of a physical gate inside the factory.
    gate_error: f64,
}

impl DistillationParams {
    /// Defaults for a physical error rate `p_in`: `epsilon = 1` and a gate
    /// error rate of `p_in / 10`.
    #[must_use]
    pub fn new(p_in: f64) -> Self {
        Self {
            epsilon: 1.0,
            gate_error: p_in / 10.0,
        }
    }

    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    #[must_use]
    pub fn with_gate_error(mut self, gate_error: f64) -> Self {
        self.gate_error = gate_error;
        self
    }

    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[must_use]
    pub fn gate_error(&self) -> f64 {
        self.gate_error
    }
}

/// Code distances of successive 15-to-1 distillation levels that bring the
/// output error rate `p_out` up to the physical error rate `p_in`, innermost
/// level first.
///
/// Each level scans for the smallest distance `d` with
/// `192 d (100 p_g)^floor((d + 1) / 2) < epsilon p / (1 + epsilon)` and then
/// relaxes the target to the input error rate `(p / (35 (1 + epsilon)))^(1/3)`
/// of the level below.  See Algorithm 4 in
/// [arXiv:1603.09383](https://arxiv.org/pdf/1603.09383) and Section 2 in
/// [arXiv:1301.7107](https://arxiv.org/pdf/1301.7107).
///
/// No level is needed if `p_out` already exceeds `p_in`.
#[allow(clippy::cast_precision_loss)]
pub fn distillation_distances(
    p_in: f64,
    p_out: f64,
    params: &DistillationParams,
) -> Result<Vec<u64>, Error> {
    if p_out.is_nan() || p_out <= 0.0 {
        return Err(Error::InvalidProbability {
            quantity: "output error rate",
            value: p_out,
        });
    }
    if !params.epsilon.is_finite() || params.epsilon <= 0.0 {
        return Err(Error::InvalidParameter {
            quantity: "distillation epsilon",
            value: params.epsilon,
        });
    }

    let base = 100.0 * params.gate_error;
    if base.is_nan() || base <= 0.0 {
        return Err(Error::InvalidProbability {
            quantity: "distillation gate error rate",
            value: params.gate_error,
        });
    }
    if base >= 1.0 {
        return Err(Error::DistillationThresholdExceeded {
            gate_error: params.gate_error,
            threshold: 0.01,
        });
    }

    let epsilon = params.epsilon;
    let mut p = p_out;
    let mut distances = vec![];

    while p <= p_in {
        if distances.len() >= MAX_DISTILLATION_LEVELS as usize {
            return Err(Error::HierarchyTooDeep {
                limit: MAX_DISTILLATION_LEVELS,
                p_in,
                p_out,
            });
        }

        let target = epsilon * p / (1.0 + epsilon);
        let d = (1..=MAX_CODE_DISTANCE)
            .find(|d| (192 * d) as f64 * base.powf(((d + 1) / 2) as f64) < target)
            .ok_or(Error::DistanceSearchExhausted {
                quantity: "distillation",
                limit: MAX_CODE_DISTANCE,
                target,
            })?;

        debug!(
            "distillation level {} needs distance {d} for output error rate {p}",
            distances.len()
        );
        distances.push(d);

        p = (p / (35.0 * (1.0 + epsilon))).powf(1.0 / 3.0);
    }

    Ok(distances)
}

/// One level of the distillation hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DistillationLevel {
    index: u32,
    distance: u64,
}

impl DistillationLevel {
    #[must_use]
    pub fn new(index: u32, distance: u64) -> Self {
        Self { index, distance }
    }

    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    #[must_use]
    pub fn distance(&self) -> u64 {
        self.distance
    }

    #[must_use]
    pub fn cycles(&self) -> u64 {
        cycles_for_distillation(self.distance)
    }

    #[must_use]
    pub fn physical_qubits_per_logical_qubit(&self) -> f64 {
        physical_qubits_for_distance(self.distance)
    }

    #[must_use]
    pub fn logical_qubits(&self) -> u64 {
        logical_qubit_multiplicity(self.index)
    }

    /// Physical footprint of the whole level.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn physical_qubits(&self) -> f64 {
        self.physical_qubits_per_logical_qubit() * self.logical_qubits() as f64
    }
}

/// All levels of a distillery, innermost level first.
///
/// Levels run one after the other on the same physical qubits, so a
/// distillery takes the sum of all level cycles but only occupies the
/// footprint of its largest level.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DistillationHierarchy {
    levels: Vec<DistillationLevel>,
}

impl DistillationHierarchy {
    pub fn solve(p_in: f64, p_out: f64, params: &DistillationParams) -> Result<Self, Error> {
        let distances = distillation_distances(p_in, p_out, params)?;
        Ok(Self::from_distances(&distances))
    }

    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn from_distances(distances: &[u64]) -> Self {
        Self {
            levels: distances
                .iter()
                .enumerate()
                .map(|(index, &distance)| DistillationLevel::new(index as u32, distance))
                .collect(),
        }
    }

    #[must_use]
    pub fn distances(&self) -> Vec<u64> {
        self.levels.iter().map(DistillationLevel::distance).collect()
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn deepest_level(&self) -> Option<&DistillationLevel> {
        self.levels.last()
    }

    #[must_use]
    pub fn total_cycles(&self) -> u64 {
        self.levels.iter().map(DistillationLevel::cycles).sum()
    }

    #[must_use]
    pub fn peak_physical_qubits(&self) -> f64 {
        self.levels
            .iter()
            .map(DistillationLevel::physical_qubits)
            .fold(0.0, f64::max)
    }
}

impl Deref for DistillationHierarchy {
    type Target = [DistillationLevel];

    fn deref(&self) -> &Self::Target {
        &self.levels
    }
}
