// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Helper functions for averaging over polarizations.
//!
//! All of these functions collapse the polarization axis of their inputs. Data
//! are combined with a weighted mean, weights are summed (consistent with
//! inverse-variance weighting of the averaged data) and flags are ORed.

mod error;

pub use error::AveragingError;

use ndarray::{prelude::*, RemoveAxis, Zip};

use crate::{
    c64,
    constants::{CHAN_AXIS, NUM_POLS, POL_AXIS},
};

fn check_pol_axis(ndim: usize, polarization_axis: Axis) -> Result<(), AveragingError> {
    if polarization_axis.index() >= ndim {
        return Err(AveragingError::BadPolarizationAxis {
            axis: polarization_axis.index(),
            ndim,
        });
    }
    Ok(())
}

/// Sum weights over the polarization axis. `weight` could be `[npol, nchan,
/// nvis]` or `[npol, nvis]`, depending on whether it has already been
/// broadcast across channels.
pub fn average_weight_polarization<D: RemoveAxis>(
    weight: ArrayView<f64, D>,
    polarization_axis: Axis,
) -> Result<Array<f64, D::Smaller>, AveragingError> {
    check_pol_axis(weight.ndim(), polarization_axis)?;
    Ok(weight.sum_axis(polarization_axis))
}

/// Collapse flags across the polarization axis. If any polarization is
/// flagged, the averaged sample is flagged too.
pub fn average_flag_polarization<D: RemoveAxis>(
    flag: ArrayView<bool, D>,
    polarization_axis: Axis,
) -> Result<Array<bool, D::Smaller>, AveragingError> {
    check_pol_axis(flag.ndim(), polarization_axis)?;
    Ok(flag.map_axis(polarization_axis, |pols| pols.iter().any(|&f| f)))
}

/// Perform a weighted average of (dual-polarization) data over the
/// polarization axis:
///
/// sum(data * weight) / sum(weight)
///
/// `data` is either the observed or model visibilities. Two weight shapes are
/// understood:
///
/// 1. the same shape as `data` (e.g. weights that have been broadcast across
///    channels), or
/// 2. `[npol, nvis]` weights for `[npol, nchan, nvis]` (or `[nchan, npol,
///    nvis]`) data; the weights are used for every channel.
///
/// Anything else is an error.
pub fn average_data_polarization<D, E>(
    data: ArrayView<c64, D>,
    weight: ArrayView<f64, E>,
    polarization_axis: Axis,
) -> Result<Array<c64, D::Smaller>, AveragingError>
where
    D: RemoveAxis,
    E: Dimension,
{
    check_pol_axis(data.ndim(), polarization_axis)?;
    let num_pols = data.len_of(polarization_axis);
    if num_pols != NUM_POLS {
        return Err(AveragingError::InvalidPolarizationCount { num_pols });
    }

    let weight = weight.into_dyn();
    let shape_mismatch = || AveragingError::ShapeMismatch {
        data: data.shape().to_vec(),
        weight: weight.shape().to_vec(),
    };

    let unchannelised;
    let full_weight: ArrayViewD<f64> = match (data.ndim(), weight.ndim()) {
        (d, w) if d == w => {
            if data.shape() != weight.shape() {
                return Err(shape_mismatch());
            }
            weight.view()
        }

        (3, 2) => {
            // The weights are [npol, nvis]; the visibility axis is last, so
            // the channel axis is whichever of the first two isn't the
            // polarization axis.
            let chan_axis = match polarization_axis.index() {
                POL_AXIS => Axis(CHAN_AXIS),
                CHAN_AXIS => Axis(POL_AXIS),
                _ => return Err(shape_mismatch()),
            };
            let mut expected = data.shape().to_vec();
            expected.remove(chan_axis.index());
            if weight.shape() != expected.as_slice() {
                return Err(shape_mismatch());
            }
            unchannelised = weight.view().insert_axis(chan_axis);
            unchannelised
                .broadcast(data.shape())
                .ok_or_else(shape_mismatch)?
        }

        _ => return Err(shape_mismatch()),
    };
    let full_weight = full_weight
        .into_dimensionality::<D>()
        .map_err(|_| shape_mismatch())?;

    let norm = full_weight.sum_axis(polarization_axis);
    let mut averaged = Zip::from(&data)
        .and(&full_weight)
        .map_collect(|&d, &w| d * w)
        .sum_axis(polarization_axis);
    Zip::from(&mut averaged)
        .and(&norm)
        .for_each(|a, &n| *a /= n);
    Ok(averaged)
}
