// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use grover_estimator::{EstimationParams, estimate};

fn main() -> miette::Result<()> {
    env_logger::init();

    let params = EstimationParams::default();
    log::debug!("estimating with {params:?}");

    let estimate = estimate(&params)?;
    print!("{estimate}");

    Ok(())
}
