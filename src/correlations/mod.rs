// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Separating cross-correlation baselines from auto-correlations.

mod error;

pub use error::CorrelationError;

fn check_lengths(ant1: &[i32], ant2: &[i32]) -> Result<(), CorrelationError> {
    if ant1.len() != ant2.len() {
        return Err(CorrelationError::AntennaLengthMismatch {
            ant1: ant1.len(),
            ant2: ant2.len(),
        });
    }
    Ok(())
}

/// Do the antenna pairs contain any auto-correlations (antenna1 ==
/// antenna2)?
pub fn contains_autocorrelations(ant1: &[i32], ant2: &[i32]) -> Result<bool, CorrelationError> {
    check_lengths(ant1, ant2)?;
    Ok(ant1.iter().zip(ant2).any(|(a1, a2)| a1 == a2))
}

/// Get the indices of the cross-correlation baselines (antenna1 !=
/// antenna2). The indices are ascending, so the relative order of the
/// baselines is preserved.
pub fn get_crosscorrelation_indexes(
    ant1: &[i32],
    ant2: &[i32],
) -> Result<Vec<usize>, CorrelationError> {
    check_lengths(ant1, ant2)?;
    Ok(ant1
        .iter()
        .zip(ant2)
        .enumerate()
        .filter(|(_, (a1, a2))| a1 != a2)
        .map(|(i, _)| i)
        .collect())
}
