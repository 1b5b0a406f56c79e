// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors associated with querying measurement sets.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Data description ID {datadescid} is not available")]
    UnknownDataDescId { datadescid: usize },

    #[error("Column {column} was expected to have shape {expected:?}, but it has shape {got:?}")]
    BadArraySize {
        column: &'static str,
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    #[error("Error when trying to query the measurement set: {0}")]
    Reader(#[from] Box<dyn std::error::Error + Send + Sync>),
}
