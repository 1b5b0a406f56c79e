// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Some helper mathematics.

#[cfg(test)]
mod tests;

/// Given two array shapes, return the shape that results from broadcasting
/// them together, following the usual rules: shapes are aligned on their last
/// axis, and an axis of length 1 is stretched to match the other. If the
/// shapes can't be broadcast together, `None` is returned.
///
/// ndarray's arithmetic operators do the same thing, but panic on
/// incompatible shapes.
pub(crate) fn co_broadcast_shape(a: &[usize], b: &[usize]) -> Option<Vec<usize>> {
    let ndim = a.len().max(b.len());
    let mut out = vec![0; ndim];
    for (i, out_len) in out.iter_mut().rev().enumerate() {
        let a_len = a.len().checked_sub(i + 1).map(|j| a[j]).unwrap_or(1);
        let b_len = b.len().checked_sub(i + 1).map(|j| b[j]).unwrap_or(1);
        *out_len = match (a_len, b_len) {
            (x, y) if x == y => x,
            (1, y) => y,
            (x, 1) => x,
            _ => return None,
        };
    }
    Some(out)
}
