// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Spectral-channel ordering.
//!
//! Processed visibilities are always stored in decreasing frequency order
//! (i.e. blueshifted to redshifted). Measurement sets may store channels in
//! either order, so all channel-indexed arrays are reversed together when
//! necessary.

mod error;

pub use error::ChannelOrderError;

use itertools::Itertools;
use log::debug;
use ndarray::prelude::*;

use crate::{c64, constants::CHAN_AXIS};

/// Channel frequencies and channel-indexed arrays, in decreasing frequency
/// order.
#[derive(Debug, Clone)]
pub struct ChannelSortedData {
    /// \[Hz\]
    pub chan_freq: Array1<f64>,

    /// `[npol, nchan, nvis]`
    pub data: Array3<c64>,

    /// `[npol, nchan, nvis]`
    pub model_data: Option<Array3<c64>>,

    /// `[npol, nchan, nvis]`
    pub flag: Array3<bool>,
}

/// Are the channel frequencies stored in decreasing order? A single channel
/// (or no channels) counts as decreasing.
///
/// Frequencies that are neither strictly decreasing nor strictly increasing
/// indicate corrupt input and are an error.
pub fn is_decreasing(chan_freq: ArrayView1<f64>) -> Result<bool, ChannelOrderError> {
    if chan_freq.len() <= 1 {
        return Ok(true);
    }

    let diffs = chan_freq
        .iter()
        .tuple_windows()
        .map(|(a, b)| b - a)
        .collect::<Vec<_>>();
    if diffs.iter().all(|&d| d < 0.0) {
        Ok(true)
    } else if diffs.iter().all(|&d| d > 0.0) {
        Ok(false)
    } else {
        Err(ChannelOrderError::NonMonotonicChannels {
            chan_freq: chan_freq.to_vec(),
        })
    }
}

/// Reverse the order of elements along `channel_axis`. This is used
/// identically on frequencies, data, model data and flags to keep them
/// consistent.
pub fn reverse_array<A: Clone, D: Dimension>(
    array: ArrayView<A, D>,
    channel_axis: Axis,
) -> Result<Array<A, D>, ChannelOrderError> {
    if channel_axis.index() >= array.ndim() {
        return Err(ChannelOrderError::BadChannelAxis {
            axis: channel_axis.index(),
            ndim: array.ndim(),
        });
    }

    let mut reversed = array;
    reversed.invert_axis(channel_axis);
    Ok(reversed.to_owned())
}

/// Put the channel frequencies and `[npol, nchan, nvis]` arrays into
/// decreasing frequency order.
pub fn get_channel_sorted_data(
    chan_freq: ArrayView1<f64>,
    data: ArrayView3<c64>,
    model_data: Option<ArrayView3<c64>>,
    flag: ArrayView3<bool>,
) -> Result<ChannelSortedData, ChannelOrderError> {
    if is_decreasing(chan_freq)? {
        return Ok(ChannelSortedData {
            chan_freq: chan_freq.to_owned(),
            data: data.to_owned(),
            model_data: model_data.map(|m| m.to_owned()),
            flag: flag.to_owned(),
        });
    }

    debug!(
        "{} channels are in increasing frequency order; reversing them",
        chan_freq.len()
    );
    let chan_axis = Axis(CHAN_AXIS);
    Ok(ChannelSortedData {
        chan_freq: reverse_array(chan_freq, Axis(0))?,
        data: reverse_array(data, chan_axis)?,
        model_data: model_data
            .map(|m| reverse_array(m, chan_axis))
            .transpose()?,
        flag: reverse_array(flag, chan_axis)?,
    })
}
