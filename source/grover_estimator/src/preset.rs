// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use enum_iterator::{Sequence, all};
use serde::{Deserialize, Serialize};

use crate::{Circuit, Error};


/// Circuits for a single Grover iteration of known hash function preimage
/// searches.
///
/// The SHAKE256 and Haraka-S counts are given as the sum of the oracle and
/// the diffusion operator.  Presets serialize under the same names they
/// parse from.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Sequence, Serialize, Deserialize,
)]
pub enum CircuitPreset {
    /// SHAKE256 with 128 bit parameters
    #[serde(rename = "shake256-128")]
    Shake256_128,
    /// Haraka-S with 128 bit parameters
    #[default]
    #[serde(rename = "haraka-s-128")]
    HarakaS128,
    /// SHAKE256 with 256 bit parameters
    #[serde(rename = "shake256-256")]
    Shake256_256,
    /// Haraka-S with 256 bit parameters, searching the right child node for a
    /// known left child node
    #[serde(rename = "haraka-s-256")]
    HarakaS256,
    /// SHA-256 from Section 7.1 in
    /// [arXiv:1603.09383](https://arxiv.org/pdf/1603.09383)
    #[serde(rename = "sha256")]
    Sha256,
    /// SHA3-256 from Section 7.1 in
    /// [arXiv:1603.09383](https://arxiv.org/pdf/1603.09383)
    #[serde(rename = "sha3-256")]
    Sha3_256,
}

impl CircuitPreset {
    /// Iterates over all presets in declaration order.
    pub fn iter() -> impl Iterator<Item = CircuitPreset> {
        all::<CircuitPreset>()
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CircuitPreset::Shake256_128 => "shake256-128",
            CircuitPreset::HarakaS128 => "haraka-s-128",
            CircuitPreset::Shake256_256 => "shake256-256",
            CircuitPreset::HarakaS256 => "haraka-s-256",
            CircuitPreset::Sha256 => "sha256",
            CircuitPreset::Sha3_256 => "sha3-256",
        }
    }

    /// Security parameter the preset was designed for.
    #[must_use]
    pub fn input_length(self) -> u32 {
        match self {
            CircuitPreset::Shake256_128 | CircuitPreset::HarakaS128 => 128,
            CircuitPreset::Shake256_256
            | CircuitPreset::HarakaS256
            | CircuitPreset::Sha256
            | CircuitPreset::Sha3_256 => 256,
        }
    }

    #[must_use]
    pub fn circuit(self) -> Circuit {
        match self {
            CircuitPreset::Shake256_128 => Circuit::from_counts(
                1_184_491.0 + 1771.0,
                5_072_866.0 + 2530.0,
                338_614.0 + 1022.0,
                3456,
                3635.0 + 1139.0,
            ),
            CircuitPreset::HarakaS128 => Circuit::from_counts(
                2_438_891.0 + 1771.0,
                5_535_458.0 + 2530.0,
                758_282.0 + 1022.0,
                1400,
                275_713.0 + 1139.0,
            ),
            CircuitPreset::Shake256_256 => Circuit::from_counts(
                1_186_283.0 + 3563.0,
                5_076_450.0 + 5090.0,
                339_126.0 + 2046.0,
                3712,
                4787.0 + 2291.0,
            ),
            CircuitPreset::HarakaS256 => Circuit::from_counts(
                2_440_683.0 + 3563.0,
                5_538_274.0 + 5090.0,
                758_794.0 + 2046.0,
                1656,
                276_865.0 + 2291.0,
            ),
            // CNOT and single qubit Cliffords are reported as a 98/2 split of
            // all Clifford gates
            CircuitPreset::Sha256 => Circuit::from_counts(
                228_992.0 * 2.0 + 8108.0 + 8076.0,
                8.76e6 * 0.98,
                8.76e6 * 0.02,
                2402,
                70400.0 * 2.0,
            ),
            CircuitPreset::Sha3_256 => {
                Circuit::from_counts(1_014_584.0, 6.85e7, 4.30e5, 3200, 432.0 * 2.0)
            }
        }
    }
}

impl Display for CircuitPreset {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for CircuitPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| Error::UnknownPreset(s.to_string()))
    }
}
