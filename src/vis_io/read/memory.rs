// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Visibilities that have already been read into memory.

use std::collections::BTreeMap;

use super::{QueryError, VisQuery, VisibilityQuery};

/// A [`VisQuery`] over spectral windows held in memory, keyed by data
/// description ID.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVis {
    spectral_windows: BTreeMap<usize, VisibilityQuery>,
}

impl InMemoryVis {
    pub fn new() -> InMemoryVis {
        InMemoryVis::default()
    }

    /// Add a spectral window. If the data description ID was already present,
    /// the old spectral window is returned.
    pub fn insert(&mut self, datadescid: usize, query: VisibilityQuery) -> Option<VisibilityQuery> {
        self.spectral_windows.insert(datadescid, query)
    }

    pub fn len(&self) -> usize {
        self.spectral_windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spectral_windows.is_empty()
    }
}

impl FromIterator<(usize, VisibilityQuery)> for InMemoryVis {
    fn from_iter<I: IntoIterator<Item = (usize, VisibilityQuery)>>(iter: I) -> Self {
        InMemoryVis {
            spectral_windows: iter.into_iter().collect(),
        }
    }
}

impl VisQuery for InMemoryVis {
    fn get_datadescids(&self) -> Vec<usize> {
        self.spectral_windows.keys().copied().collect()
    }

    fn query_datadescid(&self, datadescid: usize) -> Result<VisibilityQuery, QueryError> {
        self.spectral_windows
            .get(&datadescid)
            .cloned()
            .ok_or(QueryError::UnknownDataDescId { datadescid })
    }

    fn get_channels(&self, datadescid: usize) -> Result<ndarray::Array1<f64>, QueryError> {
        self.spectral_windows
            .get(&datadescid)
            .map(|spw| spw.chan_freq.clone())
            .ok_or(QueryError::UnknownDataDescId { datadescid })
    }
}
