// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Display, Formatter};

use crate::Error;

/// A positive number written as `mantissa * 2^exponent` with a mantissa in
/// `[1, 2)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PowerOfTwo {
    mantissa: f64,
    exponent: i32,
}

impl PowerOfTwo {
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(value: f64) -> Result<Self, Error> {
        if !value.is_finite() || value <= 0.0 {
            return Err(Error::NotNormalizable(value));
        }

        let mut exponent = value.log2().floor() as i32;
        let mut mantissa = scale_down(value, exponent);

        // log2 may round across an integer right next to a power of two
        if mantissa >= 2.0 {
            exponent += 1;
            mantissa = scale_down(value, exponent);
        } else if mantissa < 1.0 {
            exponent -= 1;
            mantissa = scale_down(value, exponent);
        }

        Ok(Self { mantissa, exponent })
    }

    #[must_use]
    pub fn mantissa(&self) -> f64 {
        self.mantissa
    }

    #[must_use]
    pub fn exponent(&self) -> i32 {
        self.exponent
    }
}

/// `value / 2^exponent`, split in two steps so that neither power overflows
/// for exponents of subnormal values.
fn scale_down(value: f64, exponent: i32) -> f64 {
    let half = exponent / 2;
    value / 2f64.powi(half) / 2f64.powi(exponent - half)
}

impl Display for PowerOfTwo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}*2^{}", self.mantissa, self.exponent)
    }
}
