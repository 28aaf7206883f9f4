// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use serde::{Deserialize, Serialize};

use crate::{CircuitPreset, Error, distillation::DistillationParams};

#[cfg(test)]
mod tests;

/// Physical error rate of the reference hardware.
pub const DEFAULT_PHYSICAL_ERROR_RATE: f64 = 1e-4;

/// Duration of one surface code cycle in seconds.
pub const DEFAULT_TIME_PER_CYCLE: f64 = 200e-9;

/// Inputs of an estimate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationParams {
    preset: CircuitPreset,
    input_length: u32,
    physical_error_rate: f64,
    time_per_cycle: f64,
    /// Derived from the physical error rate if not set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    distillation: Option<DistillationParams>,
}

impl Default for EstimationParams {
    fn default() -> Self {
        Self::for_preset(CircuitPreset::default())
    }
}

impl EstimationParams {
    /// Reference hardware parameters for `preset` at its own security level.
    #[must_use]
    pub fn for_preset(preset: CircuitPreset) -> Self {
        Self {
            preset,
            input_length: preset.input_length(),
            physical_error_rate: DEFAULT_PHYSICAL_ERROR_RATE,
            time_per_cycle: DEFAULT_TIME_PER_CYCLE,
            distillation: None,
        }
    }

    #[must_use]
    pub fn with_input_length(mut self, input_length: u32) -> Self {
        self.input_length = input_length;
        self
    }

    #[must_use]
    pub fn with_physical_error_rate(mut self, physical_error_rate: f64) -> Self {
        self.physical_error_rate = physical_error_rate;
        self
    }

    #[must_use]
    pub fn with_time_per_cycle(mut self, time_per_cycle: f64) -> Self {
        self.time_per_cycle = time_per_cycle;
        self
    }

    #[must_use]
    pub fn with_distillation(mut self, distillation: DistillationParams) -> Self {
        self.distillation = Some(distillation);
        self
    }

    #[must_use]
    pub fn preset(&self) -> CircuitPreset {
        self.preset
    }

    #[must_use]
    pub fn input_length(&self) -> u32 {
        self.input_length
    }

    #[must_use]
    pub fn physical_error_rate(&self) -> f64 {
        self.physical_error_rate
    }

    #[must_use]
    pub fn time_per_cycle(&self) -> f64 {
        self.time_per_cycle
    }

    #[must_use]
    pub fn distillation(&self) -> DistillationParams {
        self.distillation
            .unwrap_or_else(|| DistillationParams::new(self.physical_error_rate))
    }

    pub fn validate(&self) -> Result<(), Error> {
        let p_in = self.physical_error_rate;
        if p_in.is_nan() || p_in <= 0.0 || p_in >= 1.0 {
            return Err(Error::InvalidProbability {
                quantity: "physical error rate",
                value: p_in,
            });
        }

        if !self.time_per_cycle.is_finite() || self.time_per_cycle <= 0.0 {
            return Err(Error::InvalidParameter {
                quantity: "time per cycle",
                value: self.time_per_cycle,
            });
        }

        if self.input_length == 0 {
            return Err(Error::InvalidParameter {
                quantity: "input length",
                value: 0.0,
            });
        }

        Ok(())
    }
}
