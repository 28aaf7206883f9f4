// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use miette::Diagnostic;
use thiserror::Error;

/// Terminal failures of the estimation pipeline.  None of them is recovered
/// from; each one names the quantity that could not be computed together with
/// the inputs that caused it.
#[derive(Clone, Debug, Diagnostic, Error, PartialEq)]
pub enum Error {
    #[error("circuit field {field} is out of range: {value}")]
    #[diagnostic(code("GroverEstimator.InvalidCircuit"))]
    InvalidCircuit { field: &'static str, value: f64 },

    #[error("unknown circuit preset {0}")]
    #[diagnostic(code("GroverEstimator.UnknownPreset"))]
    UnknownPreset(String),

    #[error("{quantity} must be a probability in (0, 1), got {value}")]
    #[diagnostic(code("GroverEstimator.InvalidProbability"))]
    InvalidProbability { quantity: &'static str, value: f64 },

    #[error("{quantity} must be positive and finite, got {value}")]
    #[diagnostic(code("GroverEstimator.InvalidParameter"))]
    InvalidParameter { quantity: &'static str, value: f64 },

    #[error("cannot derive a logical error budget from {t_count} T gates")]
    #[diagnostic(code("GroverEstimator.EmptyErrorBudget"))]
    EmptyErrorBudget { t_count: f64 },

    #[error(
        "Clifford code distance does not converge: physical error rate {p_in} is not below the threshold {threshold}"
    )]
    #[diagnostic(code("GroverEstimator.CliffordThresholdExceeded"))]
    CliffordThresholdExceeded { p_in: f64, threshold: f64 },

    #[error(
        "distillation code distance does not converge: gate error rate {gate_error} is not below {threshold}"
    )]
    #[diagnostic(code("GroverEstimator.DistillationThresholdExceeded"))]
    DistillationThresholdExceeded { gate_error: f64, threshold: f64 },

    #[error("no {quantity} code distance up to {limit} reaches the target error rate {target}")]
    #[diagnostic(code("GroverEstimator.DistanceSearchExhausted"))]
    DistanceSearchExhausted {
        quantity: &'static str,
        limit: u64,
        target: f64,
    },

    #[error(
        "distillation hierarchy exceeds {limit} levels before the output error rate {p_out} reaches the physical error rate {p_in}"
    )]
    #[diagnostic(code("GroverEstimator.HierarchyTooDeep"))]
    HierarchyTooDeep { limit: u32, p_in: f64, p_out: f64 },

    #[error(
        "distillation is not the throughput bottleneck: {distillation_cycles} distillation cycles vs {clifford_cycles} Clifford cycles per T layer"
    )]
    #[diagnostic(
        code("GroverEstimator.ThroughputInvariantViolated"),
        help(
            "the estimate assumes magic state distillation dominates each T layer; these inputs need a different distillery layout"
        )
    )]
    ThroughputInvariantViolated {
        distillation_cycles: u64,
        clifford_cycles: f64,
    },

    #[error("{quantity} exceed the range of a 64 bit count")]
    #[diagnostic(code("GroverEstimator.QubitCountOverflow"))]
    QubitCountOverflow { quantity: &'static str },

    #[error("cannot normalize {0} to a power of two")]
    #[diagnostic(code("GroverEstimator.NotNormalizable"))]
    NotNormalizable(f64),
}
