// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Conversions between statistical weights and uncertainties.

mod error;

pub use error::WeightError;

use log::trace;
use ndarray::prelude::*;

/// Convert weights (`w`) to uncertainties (`σ`) with
///
/// σ = sqrt(1 / w)
///
/// A weight of zero yields an infinite sigma. Negative weights aren't
/// meaningful and produce NaN.
pub fn weight_to_sigma<D: Dimension>(weight: ArrayView<f64, D>) -> Array<f64, D> {
    weight.mapv(|w| (1.0 / w).sqrt())
}

/// Rescale all weights by a common factor, as if each sigma were multiplied
/// by `sigma_rescale`:
///
/// w_new = w_old / sigma_rescale^2
pub fn rescale_weights<D: Dimension>(
    weight: ArrayView<f64, D>,
    sigma_rescale: f64,
) -> Result<Array<f64, D>, WeightError> {
    if sigma_rescale == 0.0 || !sigma_rescale.is_finite() {
        return Err(WeightError::DegenerateRescale { sigma_rescale });
    }

    trace!("Rescaling {} weights by sigma factor {sigma_rescale}", weight.len());
    let factor = sigma_rescale * sigma_rescale;
    Ok(weight.mapv(|w| w / factor))
}
