// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Straight detection.
//!
//! An Ace has value 14 everywhere else in the evaluator, only here it also
//! plays low with value 1 so that `A-2-3-4-5` (the wheel) is a straight.

/// The Ace value.
const ACE: u8 = 14;

/// The Ace value when played low.
const ACE_LOW: u8 = 1;

/// Number of consecutive values in a straight.
const STRAIGHT_LEN: usize = 5;

/// Returns the high card of the highest straight in `values`.
///
/// The values should be distinct, duplicates are skipped. The high card is
/// taken from the run of consecutive values so the wheel returns 5 and not 14.
/// Returns `None` when there are less than 5 values.
///
/// ```
/// # use handrank_eval::straight::straight_high;
/// assert_eq!(straight_high(&[14, 13, 12, 11, 10]), Some(14));
/// assert_eq!(straight_high(&[14, 5, 4, 3, 2]), Some(5));
/// assert_eq!(straight_high(&[14, 13, 12, 11, 9]), None);
/// ```
pub fn straight_high(values: &[u8]) -> Option<u8> {
    if values.len() < STRAIGHT_LEN {
        return None;
    }

    let mut vals = values.to_vec();
    if vals.contains(&ACE) {
        vals.push(ACE_LOW);
    }

    vals.sort_unstable_by(|a, b| b.cmp(a));

    let mut head = vals[0];
    let mut run = 1;
    for pair in vals.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        if current == next {
            continue;
        }

        if current == next + 1 {
            run += 1;
            if run == STRAIGHT_LEN {
                return Some(head);
            }
        } else {
            head = next;
            run = 1;
        }
    }

    None
}

/// Checks if `values` contain 5 consecutive values.
#[inline]
pub fn is_straight(values: &[u8]) -> bool {
    straight_high(values).is_some()
}
