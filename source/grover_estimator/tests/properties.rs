// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use grover_estimator::{
    Circuit, PowerOfTwo,
    distillation::{DistillationParams, distillation_distances},
    surface_code::{
        CLIFFORD_THRESHOLD, code_distance, logical_qubit_multiplicity,
        physical_qubits_for_distance,
    },
};
use proptest::prelude::*;

fn arbitrary_circuit() -> impl Strategy<Value = Circuit> {
    (1u32..10_000_000, 0u32..10_000_000, 0u32..10_000_000, 1u64..10_000, 1u32..1_000_000)
        .prop_map(|(t, cnot, qubit_clifford, width, t_depth)| {
            Circuit::new(
                f64::from(t),
                f64::from(cnot),
                f64::from(qubit_clifford),
                width,
                f64::from(t_depth),
            )
            .expect("generated circuit is valid")
        })
}

proptest! {
    #[test]
    fn scaling_is_linear(circuit in arbitrary_circuit(), k in 1u32..100_000, m in 1u32..100_000) {
        let (k, m) = (f64::from(k), f64::from(m));
        let twice = circuit.scale(k).scale(m);
        let once = circuit.scale(k * m);

        // all products stay below 2^53, so both orders are exact
        prop_assert_eq!(twice.t(), once.t());
        prop_assert_eq!(twice.cnot(), once.cnot());
        prop_assert_eq!(twice.qubit_clifford(), once.qubit_clifford());
        prop_assert_eq!(twice.t_depth(), once.t_depth());
        prop_assert_eq!(twice.width(), circuit.width());
        prop_assert_eq!(once.width(), circuit.width());
    }

    #[test]
    fn code_distance_is_monotone_in_gate_count(
        p_exp in -6.0f64..-2.0,
        g_exp in 0.0f64..40.0,
        factor in 1.0f64..1000.0,
    ) {
        let p_in = 10f64.powf(p_exp);
        prop_assert!(p_in < CLIFFORD_THRESHOLD);
        let gates = 10f64.powf(g_exp);

        let fewer = code_distance(p_in, gates).expect("below threshold");
        let more = code_distance(p_in, gates * factor).expect("below threshold");
        prop_assert!(fewer <= more);
    }

    #[test]
    fn code_distance_is_monotone_in_error_rate(
        p_exp in -6.0f64..-2.0,
        factor in 1.0f64..10.0,
        g_exp in 0.0f64..40.0,
    ) {
        let p_low = 10f64.powf(p_exp);
        let p_high = p_low * factor;
        // closer to the threshold the distance search runs out of range
        prop_assume!(p_high <= 1e-2);
        let gates = 10f64.powf(g_exp);

        let low = code_distance(p_low, gates).expect("below threshold");
        let high = code_distance(p_high, gates).expect("below threshold");
        prop_assert!(low <= high);
    }

    #[test]
    fn smaller_output_error_needs_more_levels(out_exp in -40.0f64..-5.0) {
        let p_in = 1e-4;
        let params = DistillationParams::new(p_in);
        let p_out = 10f64.powf(out_exp);

        let shallow = distillation_distances(p_in, p_out, &params).expect("solver converges");
        let deep = distillation_distances(p_in, p_out * 1e-3, &params).expect("solver converges");
        prop_assert!(shallow.len() <= deep.len());
        prop_assert!(!deep.is_empty());
    }

    #[test]
    fn output_error_above_input_error_needs_no_distillation(p_out in 1.0001e-4f64..1.0) {
        let params = DistillationParams::new(1e-4);
        let distances = distillation_distances(1e-4, p_out, &params).expect("solver converges");
        prop_assert!(distances.is_empty());
    }

    #[test]
    fn footprints_are_strictly_increasing(d in 1u64..10_000, level in 0u32..12) {
        prop_assert!(physical_qubits_for_distance(d) < physical_qubits_for_distance(d + 1));
        prop_assert!(logical_qubit_multiplicity(level) < logical_qubit_multiplicity(level + 1));
    }

    #[test]
    fn power_of_two_round_trip(mantissa in 1.0f64..2.0, exponent in -1000i32..1000) {
        let value = mantissa * 2f64.powi(exponent);
        let normalized = PowerOfTwo::new(value).expect("positive value");

        prop_assert_eq!(normalized.exponent(), exponent);
        prop_assert_eq!(normalized.mantissa(), mantissa);
    }

    #[test]
    fn power_of_two_mantissa_range(value in f64::MIN_POSITIVE..f64::MAX) {
        let normalized = PowerOfTwo::new(value).expect("positive value");
        prop_assert!((1.0..2.0).contains(&normalized.mantissa()));
    }
}

#[test]
fn distillation_deepens_three_orders_of_magnitude_apart() {
    let params = DistillationParams::new(1e-4);
    let shallow = distillation_distances(1e-4, 1e-10, &params).expect("solver converges");
    let deep = distillation_distances(1e-4, 1e-13, &params).expect("solver converges");
    assert!(shallow.len() < deep.len());
}

#[test]
fn power_of_two_rejects_non_positive_values() {
    for value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(PowerOfTwo::new(value).is_err(), "{value}");
    }
}

#[test]
fn power_of_two_of_subnormal_value() {
    let smallest = f64::from_bits(1);
    let normalized = PowerOfTwo::new(smallest).expect("positive value");
    assert_eq!(normalized.exponent(), -1074);
    assert!((normalized.mantissa() - 1.0).abs() <= f64::EPSILON);
}

#[test]
fn power_of_two_display() {
    let normalized = PowerOfTwo::new(12.0).expect("positive value");
    assert_eq!(normalized.to_string(), "1.5*2^3");
}
