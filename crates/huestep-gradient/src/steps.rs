//! Step interpolation between two colors.

use huestep_common::{GradientError, Magnitudes};
use tracing::debug;

use crate::hex::{from_magnitudes, from_magnitudes_prefixed, to_magnitudes};

/// Return `steps` colors strictly between `start` and `end`.
///
/// The endpoints are never part of the result. Each channel moves by
/// `(end - start) / (steps + 1)` per step, so the sequence runs from the
/// sample nearest `start` to the one nearest `end`. Zero steps yields an
/// empty vector without looking at either color.
///
/// A count too large to allocate fails with `InvalidArgument` instead of
/// aborting.
pub fn interpolate(start: &str, end: &str, steps: usize) -> Result<Vec<String>, GradientError> {
    if steps == 0 {
        return Ok(Vec::new());
    }

    let (from, increment) = step_increment(start, end, steps)?;
    let mut colors = reserve(steps, 0)?;
    colors.extend((1..=steps).map(|i| from_magnitudes(from.step(increment, i))));
    Ok(colors)
}

/// The printable gradient: `start` verbatim, the interior steps, then `end`
/// verbatim. With `include_endpoints` off this is just the interior steps.
pub fn gradient(
    start: &str,
    end: &str,
    steps: usize,
    hash_prefix: bool,
    include_endpoints: bool,
) -> Result<Vec<String>, GradientError> {
    let endpoints = if include_endpoints { 2 } else { 0 };

    let mut lines = if steps == 0 {
        Vec::with_capacity(endpoints)
    } else {
        let (from, increment) = step_increment(start, end, steps)?;
        let mut lines = reserve(steps, endpoints)?;
        if include_endpoints {
            lines.push(start.to_string());
        }
        lines.extend(
            (1..=steps).map(|i| from_magnitudes_prefixed(from.step(increment, i), hash_prefix)),
        );
        lines
    };

    if include_endpoints {
        if steps == 0 {
            lines.push(start.to_string());
        }
        lines.push(end.to_string());
    }
    Ok(lines)
}

/// Validate a signed step count from the command line.
pub fn step_count(steps: i64) -> Result<usize, GradientError> {
    usize::try_from(steps).map_err(|_| {
        GradientError::InvalidArgument(format!("steps must not be negative, got {steps}"))
    })
}

/// Start magnitudes and the signed per-step increment for `steps > 0`.
fn step_increment(
    start: &str,
    end: &str,
    steps: usize,
) -> Result<(Magnitudes, Magnitudes), GradientError> {
    let from = to_magnitudes(start)?;
    let to = to_magnitudes(end)?;

    let divisor = steps.checked_add(1).ok_or_else(|| too_many(steps))? as f64;
    let increment = Magnitudes::new(
        (to.r - from.r) / divisor,
        (to.g - from.g) / divisor,
        (to.b - from.b) / divisor,
    );
    debug!(start, end, steps, ?increment, "interpolating");

    Ok((from, increment))
}

fn reserve(steps: usize, extra: usize) -> Result<Vec<String>, GradientError> {
    let len = steps.checked_add(extra).ok_or_else(|| too_many(steps))?;
    let mut lines = Vec::new();
    lines.try_reserve_exact(len).map_err(|_| too_many(steps))?;
    Ok(lines)
}

fn too_many(steps: usize) -> GradientError {
    GradientError::InvalidArgument(format!("too many steps: {steps}"))
}
