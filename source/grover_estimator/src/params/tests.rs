// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use expect_test::expect;
use indoc::indoc;

use super::*;

#[test]
fn test_default_params() {
    let params = EstimationParams::default();

    assert_eq!(params.preset(), CircuitPreset::HarakaS128);
    assert_eq!(params.input_length(), 128);
    assert!((params.physical_error_rate() - 1e-4).abs() <= f64::EPSILON);
    assert!((params.time_per_cycle() - 200e-9).abs() <= f64::EPSILON);
    assert_eq!(params.distillation(), DistillationParams::new(1e-4));
    assert!(params.validate().is_ok());
}

#[test]
fn test_distillation_follows_physical_error_rate() {
    let params = EstimationParams::default().with_physical_error_rate(1e-3);
    assert!((params.distillation().gate_error() - 1e-4).abs() <= f64::EPSILON);

    let custom = DistillationParams::new(1e-3).with_epsilon(0.5);
    let params = params.with_distillation(custom);
    assert_eq!(params.distillation(), custom);
}

#[test]
fn test_preset_sets_input_length() {
    let params = EstimationParams::for_preset(CircuitPreset::Sha3_256);
    assert_eq!(params.input_length(), 256);

    let params = params.with_input_length(200);
    assert_eq!(params.input_length(), 200);
    assert_eq!(params.preset(), CircuitPreset::Sha3_256);
}

#[test]
fn test_validate_rejects_bad_error_rates() {
    for p_in in [0.0, 1.0, -1e-4, f64::NAN] {
        let params = EstimationParams::default().with_physical_error_rate(p_in);
        assert!(
            matches!(
                params.validate(),
                Err(Error::InvalidProbability {
                    quantity: "physical error rate",
                    ..
                })
            ),
            "{p_in}"
        );
    }
}

#[test]
fn test_validate_rejects_bad_cycle_time_and_input_length() {
    let params = EstimationParams::default().with_time_per_cycle(0.0);
    assert!(matches!(
        params.validate(),
        Err(Error::InvalidParameter {
            quantity: "time per cycle",
            ..
        })
    ));

    let params = EstimationParams::default().with_input_length(0);
    assert!(matches!(
        params.validate(),
        Err(Error::InvalidParameter {
            quantity: "input length",
            ..
        })
    ));
}

#[test]
fn test_params_serialize() {
    let json = serde_json::to_string_pretty(&EstimationParams::default())
        .expect("serialization succeeds");
    expect![[r#"
        {
          "preset": "haraka-s-128",
          "inputLength": 128,
          "physicalErrorRate": 0.0001,
          "timePerCycle": 2e-7
        }"#]]
    .assert_eq(&json);

    let parsed: EstimationParams = serde_json::from_str(&json).expect("deserialization succeeds");
    assert_eq!(parsed, EstimationParams::default());
}

#[test]
fn test_params_deserialize_with_distillation_override() {
    let json = indoc! {r#"
        {
          "preset": "sha256",
          "inputLength": 256,
          "physicalErrorRate": 0.001,
          "timePerCycle": 1e-6,
          "distillation": { "epsilon": 0.5, "gateError": 0.00001 }
        }
    "#};
    let params: EstimationParams = serde_json::from_str(json).expect("deserialization succeeds");

    assert_eq!(params.preset(), CircuitPreset::Sha256);
    assert_eq!(params.input_length(), 256);
    assert!((params.distillation().epsilon() - 0.5).abs() <= f64::EPSILON);
    assert!((params.distillation().gate_error() - 1e-5).abs() <= f64::EPSILON);
    assert!(params.validate().is_ok());
}
