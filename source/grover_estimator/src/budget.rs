// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use serde::Serialize;

use crate::{Error, ScaledCircuit};

#[cfg(test)]
mod tests;

/// Physical error rate of the hardware and the logical error rate each T gate
/// may contribute.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ErrorBudget {
    p_in: f64,
    p_out: f64,
}

impl ErrorBudget {
    /// Spreads a total failure probability of 1 evenly over all T gates of
    /// `circuit`, i.e., `p_out = 1 / T`.
    pub fn derive(circuit: &ScaledCircuit, p_in: f64) -> Result<Self, Error> {
        if p_in.is_nan() || p_in <= 0.0 || p_in >= 1.0 {
            return Err(Error::InvalidProbability {
                quantity: "physical error rate",
                value: p_in,
            });
        }

        let t_count = circuit.t();
        if !t_count.is_finite() || t_count <= 0.0 {
            return Err(Error::EmptyErrorBudget { t_count });
        }

        Ok(Self {
            p_in,
            p_out: 1.0 / t_count,
        })
    }

    #[must_use]
    pub fn p_in(&self) -> f64 {
        self.p_in
    }

    #[must_use]
    pub fn p_out(&self) -> f64 {
        self.p_out
    }
}
