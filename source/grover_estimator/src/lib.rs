// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Physical resource estimates for Grover searches on a surface code quantum
//! computer with magic state distillation, following Section 7 of
//! [arXiv:1603.09383](https://arxiv.org/pdf/1603.09383).

mod budget;
pub use budget::ErrorBudget;
mod circuit;
pub use circuit::{Circuit, GateKind, ScaledCircuit, grover_iterations};
pub mod distillation;
mod error;
pub use error::Error;
mod estimate;
pub use estimate::{ResourceEstimate, estimate, estimate_circuit};
mod params;
pub use params::{DEFAULT_PHYSICAL_ERROR_RATE, DEFAULT_TIME_PER_CYCLE, EstimationParams};
mod preset;
pub use preset::CircuitPreset;
pub mod surface_code;
pub mod throughput;
mod utils;
pub use utils::PowerOfTwo;
