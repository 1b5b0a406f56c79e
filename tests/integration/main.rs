// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod continuum;
mod cube;

use ndarray::prelude::*;

use visread::{c64, VisibilityQuery};

/// All antenna pairs of an array, including auto-correlations, in the usual
/// measurement-set order (0-0, 0-1, ..., 1-1, 1-2, ...).
fn get_antenna_pairs(num_antennas: i32) -> (Vec<i32>, Vec<i32>) {
    let mut ant1 = vec![];
    let mut ant2 = vec![];
    for a1 in 0..num_antennas {
        for a2 in a1..num_antennas {
            ant1.push(a1);
            ant2.push(a2);
        }
    }
    (ant1, ant2)
}

/// Synthesise a spectral window. Each visibility's value encodes its
/// polarization, channel and baseline so that reordering can be checked.
/// Baselines are `(a2 - a1) * 10` metres long in u and `a1` metres in v.
fn synthesise_spw(chan_freq: Array1<f64>, num_antennas: i32) -> VisibilityQuery {
    let (antenna1, antenna2) = get_antenna_pairs(num_antennas);
    let num_vis = antenna1.len();
    let num_chans = chan_freq.len();

    let uvw = Array2::from_shape_fn((3, num_vis), |(i, v)| match i {
        0 => f64::from(antenna2[v] - antenna1[v]) * 10.0,
        1 => f64::from(antenna1[v]),
        _ => 0.0,
    });
    let data = Array3::from_shape_fn((2, num_chans, num_vis), |(p, c, v)| {
        c64::new(chan_freq[c] / 1e9, (v + p) as f64)
    });
    let model_data = data.mapv(|d| d * 0.5);
    let flag = Array3::from_shape_fn((2, num_chans, num_vis), |(p, c, v)| {
        p == 1 && (c + v) % 7 == 0
    });
    let weight = Array2::from_shape_fn((2, num_vis), |(p, v)| (1 + p + v % 3) as f64);

    VisibilityQuery {
        chan_freq,
        uvw,
        data,
        model_data: Some(model_data),
        flag,
        weight,
        antenna1,
        antenna2,
    }
}
