// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Display, Formatter};

use log::info;
use serde::Serialize;

use crate::{
    Circuit, Error, EstimationParams, GateKind, PowerOfTwo, ScaledCircuit,
    budget::ErrorBudget,
    circuit::grover_iterations,
    distillation::{DistillationHierarchy, DistillationLevel},
    surface_code::CliffordRegion,
    throughput::{MAGIC_STATES_PER_DISTILLERY, Throughput},
};


/// Estimates the preset circuit selected in `params`.
pub fn estimate(params: &EstimationParams) -> Result<ResourceEstimate, Error> {
    estimate_circuit(&params.preset().circuit(), params)
}

/// Estimates a Grover search whose iterations each run `base`.
///
/// The preset in `params` is ignored.
#[allow(clippy::cast_precision_loss)]
pub fn estimate_circuit(
    base: &Circuit,
    params: &EstimationParams,
) -> Result<ResourceEstimate, Error> {
    params.validate()?;
    base.validate()?;

    let p_in = params.physical_error_rate();
    let iterations = grover_iterations(params.input_length());
    let circuit = base.scale(iterations);
    info!(
        "scaled circuit by {iterations} Grover iterations for {} input bits",
        params.input_length()
    );

    let budget = ErrorBudget::derive(&circuit, p_in)?;

    let hierarchy = DistillationHierarchy::solve(p_in, budget.p_out(), &params.distillation())?;
    info!("distillation hierarchy has {} levels", hierarchy.depth());

    let clifford = CliffordRegion::new(p_in, &circuit)?;
    info!("Clifford region uses code distance {}", clifford.distance());

    // per-layer averages do not depend on the number of iterations
    let throughput = Throughput::new(base, &clifford, &hierarchy);
    throughput.check_distillation_bound()?;

    let distilleries = throughput.distilleries();
    let deepest_logical_qubits = hierarchy
        .deepest_level()
        .map_or(0, DistillationLevel::logical_qubits);

    let total_logical_qubits = distilleries
        .checked_mul(deepest_logical_qubits)
        .and_then(|qubits| qubits.checked_add(circuit.width()))
        .ok_or(Error::QubitCountOverflow {
            quantity: "total logical qubits",
        })?;
    let total_physical_qubits =
        hierarchy.peak_physical_qubits() * distilleries as f64 + clifford.physical_qubits();

    // multiply the per-iteration quantities first so that each total is
    // rounded only once when scaled by the iteration count
    let cycles_per_iteration = throughput.cycles_per_t_layer() * base.t_depth();
    let total_cycles = cycles_per_iteration * iterations;
    let total_time = total_cycles * params.time_per_cycle();
    let cost_metric = total_logical_qubits as f64 * cycles_per_iteration * iterations;
    info!("estimated {total_cycles} cycles on {total_logical_qubits} logical qubits");

    Ok(ResourceEstimate {
        params: *params,
        circuit,
        budget,
        hierarchy,
        clifford,
        throughput,
        total_logical_qubits,
        total_physical_qubits,
        total_cycles,
        total_time,
        cost_metric,
    })
}

/// Physical resources of a Grover search, together with all intermediate
/// quantities.
///
/// The `Display` implementation prints the full report.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceEstimate {
    params: EstimationParams,
    circuit: ScaledCircuit,
    budget: ErrorBudget,
    hierarchy: DistillationHierarchy,
    clifford: CliffordRegion,
    throughput: Throughput,
    total_logical_qubits: u64,
    total_physical_qubits: f64,
    total_cycles: f64,
    total_time: f64,
    cost_metric: f64,
}

impl ResourceEstimate {
    #[must_use]
    pub fn params(&self) -> &EstimationParams {
        &self.params
    }

    #[must_use]
    pub fn circuit(&self) -> &ScaledCircuit {
        &self.circuit
    }

    #[must_use]
    pub fn budget(&self) -> &ErrorBudget {
        &self.budget
    }

    #[must_use]
    pub fn hierarchy(&self) -> &DistillationHierarchy {
        &self.hierarchy
    }

    #[must_use]
    pub fn clifford(&self) -> &CliffordRegion {
        &self.clifford
    }

    #[must_use]
    pub fn throughput(&self) -> &Throughput {
        &self.throughput
    }

    #[must_use]
    pub fn total_logical_qubits(&self) -> u64 {
        self.total_logical_qubits
    }

    #[must_use]
    pub fn total_physical_qubits(&self) -> f64 {
        self.total_physical_qubits
    }

    #[must_use]
    pub fn total_cycles(&self) -> f64 {
        self.total_cycles
    }

    /// Runtime in seconds.
    #[must_use]
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    #[must_use]
    pub fn total_time_in_years(&self) -> f64 {
        self.total_time / 60.0 / 60.0 / 24.0 / 365.0
    }

    /// Logical qubits times cycles.
    #[must_use]
    pub fn cost_metric(&self) -> f64 {
        self.cost_metric
    }
}

impl Display for ResourceEstimate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "p_in: {}", self.budget.p_in())?;
        writeln!(f, "p_out: {}", self.budget.p_out())?;
        writeln!(f)?;

        writeln!(f, "Grover circuit:")?;
        write!(f, "{}", self.circuit.circuit())?;
        writeln!(f)?;
        writeln!(f)?;

        writeln!(f, "Distillation distances: {:?}", self.hierarchy.distances())?;
        writeln!(
            f,
            "Distillation takes {} cycles on {} physical qubits producing {MAGIC_STATES_PER_DISTILLERY} distilled states",
            self.hierarchy.total_cycles(),
            self.hierarchy.peak_physical_qubits(),
        )?;
        writeln!(f, "Code distance: {}", self.clifford.distance())?;
        writeln!(
            f,
            "Physical qubits for Clifford: {}",
            self.clifford.physical_qubits()
        )?;
        writeln!(f, "Distilleries needed: {}", self.throughput.distilleries())?;

        writeln!(
            f,
            "T-Gates per layer: {}",
            self.throughput.average_gates_per_t_layer(GateKind::T)
        )?;
        writeln!(
            f,
            "CNOT-Gates per layer per qubit: {}",
            self.throughput
                .average_gates_per_t_layer_per_qubit(GateKind::Cnot)
        )?;
        writeln!(
            f,
            "QUBITCLIFFORD-Gates per layer per gate: {}",
            self.throughput
                .average_gates_per_t_layer_per_qubit(GateKind::QubitClifford)
        )?;
        writeln!(
            f,
            "Average cycles for Clifford gates per T-Depth: {}",
            self.throughput.clifford_cycles_per_t_layer()
        )?;
        writeln!(
            f,
            "Total cycles for T gates per T-Depth: {}",
            self.throughput.distillation_cycles_per_t_layer()
        )?;

        writeln!(
            f,
            "Total cycles: {} = 2^{}",
            self.total_cycles,
            self.total_cycles.log2()
        )?;
        writeln!(f, "Total cycles: {}", normalized(self.total_cycles))?;
        writeln!(
            f,
            "Time: {}s or {} years",
            self.total_time,
            self.total_time_in_years()
        )?;

        writeln!(f, "Total logical qubits: {}", self.total_logical_qubits)?;
        writeln!(f, "Total physical qubits: {}", self.total_physical_qubits)?;
        writeln!(f, "Cost metric: {}", self.cost_metric)?;
        writeln!(f, "Cost metric: {}", normalized(self.cost_metric))
    }
}

/// Power of two form for the report, falling back to the plain number.
fn normalized(value: f64) -> String {
    PowerOfTwo::new(value).map_or_else(|_| value.to_string(), |p| p.to_string())
}
