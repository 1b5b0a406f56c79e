// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeightError {
    #[error("Cannot rescale weights by a sigma factor of {sigma_rescale}; it must be finite and non-zero")]
    DegenerateRescale { sigma_rescale: f64 },
}
