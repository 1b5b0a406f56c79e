// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Processing of radio-interferometric visibilities read from measurement sets.

Raw measurement-set columns for a spectral window are put into decreasing
frequency order, have their baselines converted to kilo-wavelengths, are
averaged over (dual) polarizations and have their auto-correlations removed.
 */

pub mod averaging;
pub mod broadcast;
pub mod channels;
pub mod constants;
pub mod correlations;
pub(crate) mod math;
pub mod process;
pub mod vis_io;
pub mod weights;

// Re-exports.
pub use process::{
    get_all_processed_visibilities, get_processed_visibilities, process_visibility_query,
    ProcessError, ProcessedVisibilities, ProcessingParams,
};
pub use vis_io::read::{InMemoryVis, QueryError, VisQuery, VisibilityQuery};

/// Double-precision complex numbers.
#[allow(non_camel_case_types)]
pub type c64 = num_complex::Complex<f64>;
