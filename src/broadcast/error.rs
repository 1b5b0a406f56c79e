// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BroadcastError {
    #[error("Arrays with shapes {a:?} and {b:?} cannot be broadcast together")]
    IncompatibleShapes { a: Vec<usize>, b: Vec<usize> },

    #[error("Channel axis {axis} doesn't exist for data with {ndim} dimensions")]
    BadChannelAxis { axis: usize, ndim: usize },

    #[error("Weights must have at least one (visibility) axis to be broadcast")]
    NoVisAxis,
}
