// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Turn the raw columns of a measurement-set spectral window into
//! polarization-averaged, channel-sorted cross-correlation visibilities.

mod error;
mod params;

pub use error::ProcessError;
pub use params::ProcessingParams;

use log::{debug, trace};
use ndarray::prelude::*;
use rayon::prelude::*;

use crate::{
    averaging::{average_data_polarization, average_flag_polarization, average_weight_polarization},
    broadcast::{broadcast_and_convert_baselines, broadcast_weights},
    c64,
    channels::{get_channel_sorted_data, ChannelSortedData},
    constants::{CHAN_AXIS, POL_AXIS},
    correlations::{contains_autocorrelations, get_crosscorrelation_indexes},
    vis_io::read::{VisQuery, VisibilityQuery},
    weights::{rescale_weights, weight_to_sigma},
};

/// Visibilities from a single spectral window, ready for modelling. All
/// two-dimensional arrays have shape `[nchan, nvis]`, where `nvis` only counts
/// cross-correlations.
#[derive(Debug, Clone)]
pub struct ProcessedVisibilities {
    /// Channel frequencies in decreasing order \[Hz\].
    pub frequencies: Array1<f64>,

    /// \[kλ\]
    pub uu: Array2<f64>,

    /// \[kλ\]
    pub vv: Array2<f64>,

    /// Polarization-averaged visibilities. These have been complex conjugated.
    pub data: Array2<c64>,

    /// Polarization-averaged, complex-conjugated model visibilities. Only
    /// present if they were requested.
    pub model_data: Option<Array2<c64>>,

    /// `true` if any polarization of the sample was flagged.
    pub flag: Array2<bool>,

    /// The sum of the (rescaled) polarization weights.
    pub weight: Array2<f64>,
}

impl ProcessedVisibilities {
    pub fn num_chans(&self) -> usize {
        self.frequencies.len()
    }

    pub fn num_vis(&self) -> usize {
        self.data.len_of(Axis(1))
    }

    /// The uncertainty of each visibility, derived from its weight.
    pub fn sigma(&self) -> Array2<f64> {
        weight_to_sigma(self.weight.view())
    }

    /// Keep only the visibilities at the given indices.
    fn select_visibilities(self, indices: &[usize]) -> ProcessedVisibilities {
        let vis_axis = Axis(1);
        ProcessedVisibilities {
            frequencies: self.frequencies,
            uu: self.uu.select(vis_axis, indices),
            vv: self.vv.select(vis_axis, indices),
            data: self.data.select(vis_axis, indices),
            model_data: self.model_data.map(|m| m.select(vis_axis, indices)),
            flag: self.flag.select(vis_axis, indices),
            weight: self.weight.select(vis_axis, indices),
        }
    }
}

/// Get all of the visibilities from a data description ID (spectral window),
/// averaging over polarizations and discarding auto-correlations.
pub fn get_processed_visibilities<Q: VisQuery + ?Sized>(
    vis: &Q,
    datadescid: usize,
    params: &ProcessingParams,
) -> Result<ProcessedVisibilities, ProcessError> {
    debug!("Processing data description ID {datadescid}");
    let query = vis.query_datadescid(datadescid)?;
    process_visibility_query(&query, params)
}

/// Process several data description IDs in parallel. The results are in the
/// same order as `datadescids`. If any spectral window fails, an error is
/// returned.
pub fn get_all_processed_visibilities<Q: VisQuery + ?Sized>(
    vis: &Q,
    datadescids: &[usize],
    params: &ProcessingParams,
) -> Result<Vec<ProcessedVisibilities>, ProcessError> {
    datadescids
        .par_iter()
        .map(|&datadescid| get_processed_visibilities(vis, datadescid, params))
        .collect()
}

/// Process the raw columns of a single spectral window.
pub fn process_visibility_query(
    query: &VisibilityQuery,
    params: &ProcessingParams,
) -> Result<ProcessedVisibilities, ProcessError> {
    query.check_consistency()?;
    trace!(
        "{} polarizations, {} channels, {} visibilities",
        query.num_pols(),
        query.num_chans(),
        query.num_vis()
    );

    let model_data = if params.model_data {
        match query.model_data.as_ref() {
            Some(m) => Some(m.view()),
            None => return Err(ProcessError::NoModelData),
        }
    } else {
        None
    };
    let ChannelSortedData {
        chan_freq,
        data,
        model_data,
        flag,
    } = get_channel_sorted_data(
        query.chan_freq.view(),
        query.data.view(),
        model_data,
        query.flag.view(),
    )?;

    let (uu, vv) =
        broadcast_and_convert_baselines(query.uvw.row(0), query.uvw.row(1), chan_freq.view())?;

    // Weights are shared by all channels.
    let weight = broadcast_weights(query.weight.view(), data.shape(), Axis(CHAN_AXIS))?;
    let weight = rescale_weights(weight.view(), params.sigma_rescale)?;

    let pol_axis = Axis(POL_AXIS);
    let data = average_data_polarization(data.view(), weight.view(), pol_axis)?;
    let model_data = model_data
        .map(|m| average_data_polarization(m.view(), weight.view(), pol_axis))
        .transpose()?;
    let flag = average_flag_polarization(flag.view(), pol_axis)?;
    let weight = average_weight_polarization(weight.view(), pol_axis)?;

    let mut processed = ProcessedVisibilities {
        frequencies: chan_freq,
        uu,
        vv,
        data,
        model_data,
        flag,
        weight,
    };

    if contains_autocorrelations(&query.antenna1, &query.antenna2)? {
        let xc = get_crosscorrelation_indexes(&query.antenna1, &query.antenna2)?;
        debug!(
            "Discarding {} auto-correlations",
            query.num_vis() - xc.len()
        );
        processed = processed.select_visibilities(&xc);
    }

    // Conjugate to match the sign convention of downstream Fourier code.
    processed.data.mapv_inplace(|d| d.conj());
    if let Some(model_data) = processed.model_data.as_mut() {
        model_data.mapv_inplace(|d| d.conj());
    }

    Ok(processed)
}
