// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use super::*;

#[test]
fn test_co_broadcast_shape() {
    assert_eq!(co_broadcast_shape(&[], &[]), Some(vec![]));
    assert_eq!(co_broadcast_shape(&[], &[4]), Some(vec![4]));
    assert_eq!(co_broadcast_shape(&[3], &[3]), Some(vec![3]));
    assert_eq!(co_broadcast_shape(&[1, 5], &[3, 1]), Some(vec![3, 5]));
    assert_eq!(co_broadcast_shape(&[2, 1, 5], &[3, 1]), Some(vec![2, 3, 5]));
    assert_eq!(co_broadcast_shape(&[5], &[4, 1]), Some(vec![4, 5]));
}

#[test]
fn test_co_broadcast_shape_incompatible() {
    assert_eq!(co_broadcast_shape(&[3], &[4]), None);
    assert_eq!(co_broadcast_shape(&[2, 3], &[3, 3]), None);
    // Zero-length axes only broadcast against zero or one.
    assert_eq!(co_broadcast_shape(&[0], &[1]), Some(vec![0]));
    assert_eq!(co_broadcast_shape(&[0], &[2]), None);
}
