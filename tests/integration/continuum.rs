// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Tests on continuum spectral windows (few channels, several windows).

use approx::assert_abs_diff_eq;
use ndarray::prelude::*;

use super::*;
use visread::{
    get_all_processed_visibilities, weights::weight_to_sigma, InMemoryVis, ProcessError,
    ProcessingParams, VisQuery,
};

fn get_continuum() -> InMemoryVis {
    (0..4)
        .map(|i| {
            let first = 226e9 + 2e9 * i as f64;
            // Alternate the channel order between windows.
            let chan_freq = if i % 2 == 0 {
                array![first, first + 0.5e9]
            } else {
                array![first + 0.5e9, first]
            };
            (i, synthesise_spw(chan_freq, 4))
        })
        .collect()
}

#[test]
fn test_continuum_all_windows() {
    let vis = get_continuum();
    let params = ProcessingParams {
        sigma_rescale: 2.0,
        model_data: false,
    };
    let all = get_all_processed_visibilities(&vis, &vis.get_datadescids(), &params).unwrap();
    assert_eq!(all.len(), 4);

    for (i, processed) in all.iter().enumerate() {
        let first = 226e9 + 2e9 * i as f64;
        assert_eq!(processed.frequencies, array![first + 0.5e9, first]);
        // 4 antennas: 6 cross-correlations.
        assert_eq!(processed.num_vis(), 6);
        assert!(processed.model_data.is_none());

        // Rescaling weights by 2 in sigma quarters them.
        let query = vis.query_datadescid(i).unwrap();
        let raw_sum = &query.weight.row(0) + &query.weight.row(1);
        let xc_weights = raw_sum.select(Axis(0), &[1, 2, 3, 5, 6, 8]);
        assert_abs_diff_eq!(processed.weight.row(0), &xc_weights / 4.0);
        assert_abs_diff_eq!(processed.sigma(), weight_to_sigma(processed.weight.view()));
    }
}

#[test]
fn test_continuum_corrupt_window_fails() {
    let mut vis = get_continuum();
    let mut query = vis.query_datadescid(2).unwrap();
    query.chan_freq = array![1e9, 1e9];
    vis.insert(2, query);

    let result =
        get_all_processed_visibilities(&vis, &[0, 1, 2, 3], &ProcessingParams::default());
    assert!(matches!(result, Err(ProcessError::ChannelOrder(_))));

    // The other windows are still fine on their own.
    assert!(get_all_processed_visibilities(&vis, &[0, 1, 3], &ProcessingParams::default()).is_ok());
}
