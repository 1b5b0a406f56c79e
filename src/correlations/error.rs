// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CorrelationError {
    #[error("The antenna1 and antenna2 columns have different lengths ({ant1} vs {ant2})")]
    AntennaLengthMismatch { ant1: usize, ant2: usize },
}
