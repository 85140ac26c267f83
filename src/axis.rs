//! Axis normalization: the first stage of the expansion pipeline.
//!
//! A suite file declares each substitution dimension either as an
//! explicit list of values or as an inclusive numeric range. This
//! module turns both forms into the one shape the tuple generator
//! consumes: an ordered sequence of strings. Normalization runs over
//! every axis before any tuple is generated, since the generator needs
//! the final length of every axis to size its output and compute
//! strides.

use serde::Deserialize;

use crate::errors::{RangeFault, SweepError};

/// A fully-normalized axis: an ordered sequence of string values.
///
/// Non-emptiness is deliberately NOT enforced here; the tuple generator
/// rejects empty axes with an error naming the axis index.
pub type Axis = Vec<String>;

/// One substitution dimension as written in a suite file.
///
/// The variant is decided once, at deserialization time: a YAML
/// sequence is an explicit value list, a `{start, step, stop}` mapping
/// is a numeric range. No per-element type sniffing happens after this
/// point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawAxis {
    /// Inclusive integer range, expanded to decimal strings.
    Range { start: i64, step: i64, stop: i64 },
    /// Explicit value list. Elements may still be non-strings at this
    /// stage; `normalize` rejects them without coercion.
    Values(Vec<AxisValue>),
}

/// A scalar as it appears inside an explicit axis list.
///
/// Only `Str` survives normalization. The other variants exist so the
/// normalizer can say exactly what was wrong instead of failing deep in
/// deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AxisValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl AxisValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            AxisValue::Bool(_) => "a boolean",
            AxisValue::Int(_) => "an integer",
            AxisValue::Float(_) => "a float",
            AxisValue::Str(_) => "a string",
        }
    }
}

/// Safety caps for range expansion.
///
/// Passed explicitly into [`normalize`] per invocation; there is no
/// process-wide cap state.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    /// Maximum number of elements a single range may expand to.
    pub max_axis_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_axis_len: 100_000,
        }
    }
}

/// Normalize every axis of a test case.
///
/// Explicit lists pass through unchanged provided every element is a
/// string; a non-string element fails the whole normalization with
/// [`SweepError::InvalidValue`]. Ranges expand to the inclusive
/// sequence `start, start+step, ...` up to the last value `<= stop`,
/// rendered as canonical base-10 strings.
///
/// Pure function: no I/O, integer arithmetic only.
pub fn normalize(raw: &[RawAxis], limits: &Limits) -> Result<Vec<Axis>, SweepError> {
    raw.iter()
        .enumerate()
        .map(|(axis, r)| match r {
            RawAxis::Values(values) => normalize_values(axis, values),
            RawAxis::Range { start, step, stop } => {
                expand_range(axis, *start, *step, *stop, limits)
            }
        })
        .collect()
}

fn normalize_values(axis: usize, values: &[AxisValue]) -> Result<Axis, SweepError> {
    values
        .iter()
        .enumerate()
        .map(|(position, value)| match value {
            AxisValue::Str(s) => Ok(s.clone()),
            other => Err(SweepError::InvalidValue {
                axis,
                position,
                found: other.type_name(),
            }),
        })
        .collect()
}

fn expand_range(
    axis: usize,
    start: i64,
    step: i64,
    stop: i64,
    limits: &Limits,
) -> Result<Axis, SweepError> {
    let fault = |fault| SweepError::InvalidRange {
        axis,
        start,
        step,
        stop,
        fault,
    };

    if step <= 0 {
        return Err(fault(RangeFault::NonPositiveStep));
    }
    if start > stop {
        // Empty expansion; the generator reports this as an empty axis.
        return Ok(Vec::new());
    }

    // Element count up front, with checked arithmetic, so a runaway
    // range is rejected before the product stage can blow up on it.
    let span = stop.checked_sub(start).ok_or_else(|| fault(RangeFault::Overflow))?;
    let len = (span / step) as u64 + 1;
    if len > limits.max_axis_len as u64 {
        return Err(fault(RangeFault::CapExceeded {
            len,
            cap: limits.max_axis_len,
        }));
    }

    let mut values = Vec::with_capacity(len as usize);
    let mut n = start;
    while n <= stop {
        values.push(n.to_string());
        match n.checked_add(step) {
            Some(next) => n = next,
            // The next value would exceed i64::MAX, and therefore stop.
            None => break,
        }
    }
    Ok(values)
}
