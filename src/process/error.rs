// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all errors related to processing visibilities.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("Model visibilities were requested, but the spectral window has no model data")]
    NoModelData,

    #[error("{0}")]
    ArgFile(String),

    #[error(transparent)]
    Query(#[from] crate::vis_io::read::QueryError),

    #[error(transparent)]
    Weight(#[from] crate::weights::WeightError),

    #[error(transparent)]
    Broadcast(#[from] crate::broadcast::BroadcastError),

    #[error(transparent)]
    Averaging(#[from] crate::averaging::AveragingError),

    #[error(transparent)]
    ChannelOrder(#[from] crate::channels::ChannelOrderError),

    #[error(transparent)]
    Correlation(#[from] crate::correlations::CorrelationError),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
