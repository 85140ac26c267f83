//! Cartesian tuple generation: the second stage of the expansion
//! pipeline.
//!
//! Given the normalized axes, this module materializes the full
//! N-dimensional cross product as a flat, ordered sequence of tuples
//! without recursion, by stride arithmetic over precomputed axis
//! lengths. The enumeration order is fixed and load-bearing: the
//! template renderer numbers its output by flat tuple index, so two
//! runs over equal input must produce byte-identical sequences.

use crate::axis::Axis;
use crate::errors::SweepError;

/// One complete combination: one value per axis, in axis order.
pub type Tuple = Vec<String>;

/// Expand the axes into the full cross product.
///
/// Returns `Ok(None)` when `axes` is empty: the caller asked for no
/// expansion at all. This is distinct from a one-tuple product, and
/// downstream treats it as "use the request body verbatim".
///
/// Fails with [`SweepError::EmptyAxis`] if any axis has zero values,
/// naming the offending axis index.
///
/// Enumeration order: axis 0 varies slowest, the last axis varies
/// fastest, like the digits of a mixed-radix counter. Equivalently,
/// the output is in lexicographic order over
/// `(axis_0_value, axis_1_value, ..)` by value index.
pub fn generate(axes: &[Axis]) -> Result<Option<Vec<Tuple>>, SweepError> {
    if axes.is_empty() {
        return Ok(None);
    }

    let mut total: usize = 1;
    for (i, axis) in axes.iter().enumerate() {
        if axis.is_empty() {
            return Err(SweepError::EmptyAxis { axis: i });
        }
        total = total
            .checked_mul(axis.len())
            .ok_or_else(|| SweepError::ProductOverflow {
                lengths: axes.iter().map(Vec::len).collect(),
            })?;
    }

    let mut tuples = vec![vec![String::new(); axes.len()]; total];

    // Fill position i of every tuple in one pass over axis i. For axis
    // i, `suffix` is how many consecutive tuples share one value before
    // it advances, `block` is one full cycle through the axis's values,
    // and that cycle repeats `total / block` times across the output.
    let mut suffix = total;
    for (i, axis) in axes.iter().enumerate() {
        suffix /= axis.len();
        let block = axis.len() * suffix;
        let repeats = total / block;
        for (x, value) in axis.iter().enumerate() {
            for z in 0..repeats {
                let base = z * block + x * suffix;
                for slot in &mut tuples[base..base + suffix] {
                    slot[i] = value.clone();
                }
            }
        }
    }

    Ok(Some(tuples))
}
