// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChannelOrderError {
    #[error("Channel frequencies are neither strictly decreasing nor strictly increasing: {chan_freq:?}")]
    NonMonotonicChannels { chan_freq: Vec<f64> },

    #[error("Channel axis {axis} doesn't exist for an array with {ndim} dimensions")]
    BadChannelAxis { axis: usize, ndim: usize },
}
