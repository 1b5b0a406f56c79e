// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AveragingError {
    #[error("Not recognised as a dual-polarization dataset; the polarization axis has {num_pols} elements")]
    InvalidPolarizationCount { num_pols: usize },

    #[error("Don't know what to do with data and weight arrays with shapes {data:?} and {weight:?}, respectively")]
    ShapeMismatch {
        data: Vec<usize>,
        weight: Vec<usize>,
    },

    #[error("Polarization axis {axis} doesn't exist for an array with {ndim} dimensions")]
    BadPolarizationAxis { axis: usize, ndim: usize },
}
