// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The interface to measurement-set readers.
//!
//! Nothing here parses measurement sets; readers implement [`VisQuery`] and
//! hand over the raw columns of a single spectral window.

mod error;
mod memory;

pub use error::QueryError;
pub use memory::InMemoryVis;

use ndarray::prelude::*;

use crate::{c64, constants::POL_AXIS};

/// Something that can supply the raw contents of a measurement set, one
/// spectral window (data description ID) at a time.
pub trait VisQuery: Sync + Send {
    /// The data description IDs available to be queried, ascendingly sorted.
    fn get_datadescids(&self) -> Vec<usize>;

    /// Get all of the raw columns associated with a data description ID.
    fn query_datadescid(&self, datadescid: usize) -> Result<VisibilityQuery, QueryError>;

    /// Get the channel frequencies \[Hz\] of a data description ID.
    fn get_channels(&self, datadescid: usize) -> Result<Array1<f64>, QueryError> {
        Ok(self.query_datadescid(datadescid)?.chan_freq)
    }
}

/// The raw contents of a single spectral window.
#[derive(Debug, Clone)]
pub struct VisibilityQuery {
    /// The channel frequencies \[Hz\]. These may be in increasing or decreasing
    /// order.
    pub chan_freq: Array1<f64>,

    /// The u, v and w coordinates of each visibility \[metres\]. The shape is
    /// `[3, nvis]`.
    pub uvw: Array2<f64>,

    /// The observed visibilities. The shape is `[npol, nchan, nvis]`.
    pub data: Array3<c64>,

    /// The model visibilities, if the measurement set has them. The shape is
    /// the same as `data`.
    pub model_data: Option<Array3<c64>>,

    /// Visibility flags. The shape is the same as `data`.
    pub flag: Array3<bool>,

    /// The statistical weight of each visibility. These are not channelised;
    /// the shape is `[npol, nvis]`.
    pub weight: Array2<f64>,

    pub antenna1: Vec<i32>,

    pub antenna2: Vec<i32>,
}

impl VisibilityQuery {
    pub fn num_pols(&self) -> usize {
        self.data.len_of(Axis(POL_AXIS))
    }

    pub fn num_chans(&self) -> usize {
        self.chan_freq.len()
    }

    /// The number of visibilities, including any auto-correlations.
    pub fn num_vis(&self) -> usize {
        self.data.len_of(Axis(2))
    }

    /// Check that every column has a shape consistent with the data column.
    pub fn check_consistency(&self) -> Result<(), QueryError> {
        fn check(column: &'static str, expected: &[usize], got: &[usize]) -> Result<(), QueryError> {
            if expected != got {
                return Err(QueryError::BadArraySize {
                    column,
                    expected: expected.to_vec(),
                    got: got.to_vec(),
                });
            }
            Ok(())
        }

        let (num_pols, num_chans, num_vis) = self.data.dim();
        check("CHAN_FREQ", &[num_chans], self.chan_freq.shape())?;
        check("UVW", &[3, num_vis], self.uvw.shape())?;
        if let Some(model_data) = &self.model_data {
            check("MODEL_DATA", self.data.shape(), model_data.shape())?;
        }
        check("FLAG", self.data.shape(), self.flag.shape())?;
        check("WEIGHT", &[num_pols, num_vis], self.weight.shape())?;
        check("ANTENNA1", &[num_vis], &[self.antenna1.len()])?;
        check("ANTENNA2", &[num_vis], &[self.antenna2.len()])?;
        Ok(())
    }
}
