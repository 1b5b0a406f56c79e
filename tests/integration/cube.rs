// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests on a spectral cube with channels stored in increasing frequency
//! order.

use approx::assert_abs_diff_eq;
use ndarray::prelude::*;

use super::*;
use visread::{
    broadcast::convert_baseline, channels::is_decreasing, get_processed_visibilities,
    InMemoryVis, ProcessingParams,
};

fn get_cube() -> InMemoryVis {
    let chan_freq = Array1::linspace(230.0e9, 230.1e9, 16);
    [(0, synthesise_spw(chan_freq, 5))].into_iter().collect()
}

#[test]
fn test_cube() {
    let vis = get_cube();
    let params = ProcessingParams {
        model_data: true,
        ..Default::default()
    };
    let processed = get_processed_visibilities(&vis, 0, &params).unwrap();

    // 5 antennas: 15 baselines, 5 of which are auto-correlations.
    assert_eq!(processed.num_chans(), 16);
    assert_eq!(processed.num_vis(), 10);
    assert!(is_decreasing(processed.frequencies.view()).unwrap());
    assert_abs_diff_eq!(processed.frequencies[0], 230.1e9);
    assert_abs_diff_eq!(processed.frequencies[15], 230.0e9);

    // Real parts encode the channel frequency; they must follow the
    // frequencies through the reversal.
    for (c, &freq) in processed.frequencies.iter().enumerate() {
        for d in processed.data.row(c) {
            assert_abs_diff_eq!(d.re, freq / 1e9, epsilon = 1e-9);
        }
        for uu in processed.uu.row(c) {
            // All u are multiples of 10 m.
            let metres = uu / convert_baseline(1.0, freq);
            assert_abs_diff_eq!(metres / 10.0, (metres / 10.0).round(), epsilon = 1e-6);
        }
    }

    // No auto-correlation (zero-length u) survives.
    assert!(processed.uu.iter().all(|&u| u != 0.0));

    // Data are conjugated; imaginary parts are never positive here.
    assert!(processed.data.iter().all(|d| d.im <= 0.0));
    let model_data = processed.model_data.as_ref().unwrap();
    for (m, d) in model_data.iter().zip(processed.data.iter()) {
        assert_abs_diff_eq!(m.re, 0.5 * d.re, epsilon = 1e-12);
        assert_abs_diff_eq!(m.im, 0.5 * d.im, epsilon = 1e-12);
    }
}

#[test]
fn test_cube_weights_and_flags() {
    let vis = get_cube();
    let processed = get_processed_visibilities(&vis, 0, &ProcessingParams::default()).unwrap();
    let query = visread::VisQuery::query_datadescid(&vis, 0).unwrap();
    let xc = visread::correlations::get_crosscorrelation_indexes(&query.antenna1, &query.antenna2)
        .unwrap();

    for (i_out, &i_in) in xc.iter().enumerate() {
        let expected = query.weight[[0, i_in]] + query.weight[[1, i_in]];
        for c in 0..processed.num_chans() {
            assert_abs_diff_eq!(processed.weight[[c, i_out]], expected);
            // Output channel c is input channel 15 - c.
            assert_eq!(
                processed.flag[[c, i_out]],
                query.flag[[1, 15 - c, i_in]]
            );
        }
    }
    assert!(processed.flag.iter().any(|&f| f));
}
