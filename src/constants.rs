// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
Useful constants.

All constants *must* be double precision. Visibility processing should be done
in double precision; lower precisions are a concern for the caller.
 */

/// Speed of light \[metres/second\]
pub const VEL_C: f64 = 299_792_458.0;

/// Wavelengths per kilo-wavelength.
pub const KILO: f64 = 1e3;

/// The number of polarizations a dataset must have to be averaged.
pub const NUM_POLS: usize = 2;

/// The default factor by which sigmas are rescaled (i.e. no rescaling).
pub const DEFAULT_SIGMA_RESCALE: f64 = 1.0;

/// The polarization axis of measurement-set arrays `[npol, nchan, nvis]`.
pub const POL_AXIS: usize = 0;

/// The channel axis of measurement-set arrays `[npol, nchan, nvis]`.
pub const CHAN_AXIS: usize = 1;
