// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use serde::Serialize;

use crate::{
    Circuit, Error, GateKind, distillation::DistillationHierarchy, surface_code::CliffordRegion,
};


/// Magic states one distillery delivers per run.  Output pipelining between
/// levels is not modeled.
pub const MAGIC_STATES_PER_DISTILLERY: u64 = 4;

/// Surface code cycles of a lattice surgery CNOT.
pub const CYCLES_PER_CNOT: f64 = 2.0;

/// Work done within a single T layer, on average.
///
/// Per layer, the distilleries must produce one magic state for every T gate
/// while the main register executes the Clifford gates in between.  See p. 16
/// in [arXiv:1603.09383](https://arxiv.org/pdf/1603.09383).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Throughput {
    t_per_layer: f64,
    cnot_per_layer: f64,
    qubit_clifford_per_layer: f64,
    width: u64,
    distilleries: u64,
    clifford_cycles_per_t_layer: f64,
    distillation_cycles_per_t_layer: u64,
}

impl Throughput {
    /// Averages over the T layers of `circuit`.  Pass a single iteration
    /// rather than the scaled search so that each average is one correctly
    /// rounded division of exact counts.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    #[must_use]
    pub fn new(
        circuit: &Circuit,
        clifford: &CliffordRegion,
        hierarchy: &DistillationHierarchy,
    ) -> Self {
        let t_per_layer = circuit.average_gates_per_t_layer(GateKind::T);
        let cnot_per_layer = circuit.average_gates_per_t_layer(GateKind::Cnot);
        let qubit_clifford_per_layer = circuit.average_gates_per_t_layer(GateKind::QubitClifford);
        let width = circuit.width() as f64;

        let distilleries = (t_per_layer / MAGIC_STATES_PER_DISTILLERY as f64).ceil() as u64;

        // Most single qubit Cliffords are Hadamards, which take d cycles
        let cycles_cnot = CYCLES_PER_CNOT * cnot_per_layer / width;
        let cycles_single_qubit = clifford.distance() as f64 * qubit_clifford_per_layer / width;

        Self {
            t_per_layer,
            cnot_per_layer,
            qubit_clifford_per_layer,
            width: circuit.width(),
            distilleries,
            clifford_cycles_per_t_layer: cycles_cnot + cycles_single_qubit,
            distillation_cycles_per_t_layer: hierarchy.total_cycles(),
        }
    }

    #[must_use]
    pub fn average_gates_per_t_layer(&self, kind: GateKind) -> f64 {
        match kind {
            GateKind::T => self.t_per_layer,
            GateKind::Cnot => self.cnot_per_layer,
            GateKind::QubitClifford => self.qubit_clifford_per_layer,
        }
    }

    /// Average gates of `kind` per T layer and per qubit of the main
    /// register.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn average_gates_per_t_layer_per_qubit(&self, kind: GateKind) -> f64 {
        self.average_gates_per_t_layer(kind) / self.width as f64
    }

    /// Parallel distilleries needed to deliver one magic state per T gate in
    /// every layer.
    #[must_use]
    pub fn distilleries(&self) -> u64 {
        self.distilleries
    }

    #[must_use]
    pub fn clifford_cycles_per_t_layer(&self) -> f64 {
        self.clifford_cycles_per_t_layer
    }

    #[must_use]
    pub fn distillation_cycles_per_t_layer(&self) -> u64 {
        self.distillation_cycles_per_t_layer
    }

    /// Duration of one T layer, bounded by the slower of both regions.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn cycles_per_t_layer(&self) -> f64 {
        self.clifford_cycles_per_t_layer
            .max(self.distillation_cycles_per_t_layer as f64)
    }

    /// Fails unless distillation dominates each T layer.
    ///
    /// TODO: when Clifford cycles dominate, fewer distilleries would be
    /// enough; the estimate has no model for that yet.
    #[allow(clippy::cast_precision_loss)]
    pub fn check_distillation_bound(&self) -> Result<(), Error> {
        if self.distillation_cycles_per_t_layer as f64 > self.clifford_cycles_per_t_layer {
            Ok(())
        } else {
            Err(Error::ThroughputInvariantViolated {
                distillation_cycles: self.distillation_cycles_per_t_layer,
                clifford_cycles: self.clifford_cycles_per_t_layer,
            })
        }
    }
}
