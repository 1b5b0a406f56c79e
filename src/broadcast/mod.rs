// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Broadcasting of per-baseline quantities across spectral channels.
//!
//! Measurement sets store a single weight and UVW per visibility row, whereas
//! data and flags are channelised. These functions give the former the shape
//! of the latter.

mod error;

pub use error::BroadcastError;

use ndarray::{prelude::*, DimMax};

use crate::{
    constants::{KILO, VEL_C},
    math::co_broadcast_shape,
};

/// Broadcast non-channelised weights across the channels of some data. The
/// last axis of `weight` is taken to be the visibility axis, and the new
/// channel axis is inserted directly before it; `[nvis]` becomes `[nchan,
/// nvis]` and `[npol, nvis]` becomes `[npol, nchan, nvis]`. The number of
/// channels is `data_shape[chan_axis]`.
///
/// When `data_shape` has one more dimension than `weight`, every other axis of
/// `weight` must match it, otherwise the shapes are incompatible. No unit
/// conversion is done; every channel gets the same weight.
pub fn broadcast_weights<D: Dimension>(
    weight: ArrayView<f64, D>,
    data_shape: &[usize],
    chan_axis: Axis,
) -> Result<Array<f64, D::Larger>, BroadcastError> {
    let ndim = weight.ndim();
    if ndim == 0 {
        return Err(BroadcastError::NoVisAxis);
    }
    let num_chans = *data_shape
        .get(chan_axis.index())
        .ok_or(BroadcastError::BadChannelAxis {
            axis: chan_axis.index(),
            ndim: data_shape.len(),
        })?;

    let vis_axis = ndim - 1;
    let weight_shape = weight.shape().to_vec();
    // Weights without a channel axis must otherwise match the data exactly.
    if data_shape.len() == ndim + 1 {
        let mut expected = weight_shape.clone();
        expected.insert(vis_axis, num_chans);
        if expected != data_shape {
            return Err(BroadcastError::IncompatibleShapes {
                a: weight_shape,
                b: data_shape.to_vec(),
            });
        }
    }

    let expanded = weight.insert_axis(Axis(vis_axis));
    let mut shape = expanded.raw_dim();
    shape[vis_axis] = num_chans;
    let broadcast = expanded
        .broadcast(shape)
        .ok_or_else(|| BroadcastError::IncompatibleShapes {
            a: weight_shape,
            b: data_shape.to_vec(),
        })?;
    Ok(broadcast.to_owned())
}

/// Convert a single baseline length \[metres\] to kilo-wavelengths at the given
/// frequency \[Hz\].
pub fn convert_baseline(baseline_m: f64, freq_hz: f64) -> f64 {
    let wavelength = VEL_C / freq_hz;
    baseline_m / wavelength / KILO
}

/// Convert baselines \[metres\] to kilo-wavelengths \[kλ\] using the wavelengths
/// of `freqs_hz`. Either argument may be an array of any dimensionality, as
/// long as their shapes can be broadcast together (e.g. a `[1, nvis]` array of
/// baselines against a `[nchan, 1]` array of frequencies gives `[nchan,
/// nvis]`).
pub fn convert_baselines<D, E>(
    baselines_m: ArrayView<f64, D>,
    freqs_hz: ArrayView<f64, E>,
) -> Result<Array<f64, <D as DimMax<E>>::Output>, BroadcastError>
where
    D: Dimension + DimMax<E>,
    E: Dimension,
{
    if co_broadcast_shape(baselines_m.shape(), freqs_hz.shape()).is_none() {
        return Err(BroadcastError::IncompatibleShapes {
            a: baselines_m.shape().to_vec(),
            b: freqs_hz.shape().to_vec(),
        });
    }

    let wavelengths = freqs_hz.mapv(|f| VEL_C / f);
    Ok(&baselines_m / &wavelengths / KILO)
}

/// Convert u and v baselines \[metres\] into kilo-wavelengths for each channel
/// frequency \[Hz\]. Each returned array has shape `[nchan, nvis]`.
pub fn broadcast_and_convert_baselines(
    u: ArrayView1<f64>,
    v: ArrayView1<f64>,
    chan_freq: ArrayView1<f64>,
) -> Result<(Array2<f64>, Array2<f64>), BroadcastError> {
    if u.len() != v.len() {
        return Err(BroadcastError::IncompatibleShapes {
            a: u.shape().to_vec(),
            b: v.shape().to_vec(),
        });
    }

    let freqs = chan_freq.insert_axis(Axis(1));
    let uu = convert_baselines(u.insert_axis(Axis(0)), freqs.view())?;
    let vv = convert_baselines(v.insert_axis(Axis(0)), freqs.view())?;
    Ok((uu, vv))
}
