// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use super::*;
use crate::{Circuit, grover_iterations};

#[test]
fn test_budget_is_inverse_t_count() {
    let circuit = Circuit::new(2_440_662.0, 5_537_988.0, 759_304.0, 1400, 276_852.0)
        .expect("reference circuit is valid")
        .scale(grover_iterations(128));

    let budget = ErrorBudget::derive(&circuit, 1e-4).expect("valid budget");

    assert!((budget.p_in() - 1e-4).abs() <= f64::EPSILON);
    assert!((budget.p_out() * circuit.t() - 1.0).abs() < 1e-15);
    assert!((budget.p_out() / 2.828_021_824_603_976e-26 - 1.0).abs() < 1e-12);
}

#[test]
fn test_budget_rejects_empty_circuit() {
    let circuit = Circuit::from_counts(0.0, 1.0, 1.0, 1, 1.0).scale(1.0);
    assert_eq!(
        ErrorBudget::derive(&circuit, 1e-4),
        Err(Error::EmptyErrorBudget { t_count: 0.0 })
    );
}

#[test]
fn test_budget_rejects_overflowing_t_count() {
    let circuit = Circuit::from_counts(1e300, 1.0, 1.0, 1, 1.0).scale(1e300);
    assert!(matches!(
        ErrorBudget::derive(&circuit, 1e-4),
        Err(Error::EmptyErrorBudget { .. })
    ));
}

#[test]
fn test_budget_rejects_invalid_physical_error_rate() {
    let circuit = Circuit::from_counts(10.0, 1.0, 1.0, 1, 1.0).scale(1.0);
    assert!(matches!(
        ErrorBudget::derive(&circuit, 1.5),
        Err(Error::InvalidProbability { .. })
    ));
}
