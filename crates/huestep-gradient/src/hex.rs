//! Hex triplet parsing and encoding.
//!
//! Decoding goes string → normalized string → [`Color`] → [`Magnitudes`].
//! Encoding goes the other way with `trunc(magnitude * 255)` per channel.

use std::sync::LazyLock;

use huestep_common::{Color, GradientError, Magnitudes};
use regex::Regex;

/// `RGB` or `RRGGBB`, optional leading `#`.
static HEX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color regex is valid")
});

/// Return the six-digit form of a hex color, without `#`.
///
/// Shorthand is expanded by doubling each digit, so `#c0b` becomes
/// `cc00bb`. Letter case is kept as given.
pub fn normalize(color: &str) -> Result<String, GradientError> {
    if !HEX_RE.is_match(color) {
        return Err(GradientError::InvalidFormat(color.to_string()));
    }

    let digits = color.strip_prefix('#').unwrap_or(color);
    if digits.len() == 3 {
        Ok(digits.chars().flat_map(|c| [c, c]).collect())
    } else {
        Ok(digits.to_string())
    }
}

/// [`normalize`], optionally with a leading `#`.
pub fn normalize_prefixed(color: &str, hash_prefix: bool) -> Result<String, GradientError> {
    let digits = normalize(color)?;
    Ok(with_prefix(digits, hash_prefix))
}

/// Parse a (possibly shorthand) hex color into its channel bytes.
pub fn parse(color: &str) -> Result<Color, GradientError> {
    let digits = normalize(color)?;
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|_| GradientError::InvalidFormat(color.to_string()))
    };
    Ok(Color::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Decode a hex color into per-channel magnitudes (`byte / 255.0`).
pub fn to_magnitudes(color: &str) -> Result<Magnitudes, GradientError> {
    Ok(parse(color)?.magnitudes())
}

/// Encode magnitudes as a lowercase six-digit hex string.
///
/// Each channel becomes `trunc(magnitude * 255)`. Values outside
/// `[0.0, 1.0]` are not clamped; the truncated integer is written out
/// as-is, so `1.5` renders as `17e`. Negative values get a leading `-`
/// and keep the two-digit padding, so `-0.5` renders as `-7f` and
/// `-0.01` as `-02`.
pub fn from_magnitudes(magnitudes: Magnitudes) -> String {
    magnitudes
        .channels()
        .into_iter()
        .map(|m| hex_byte((m * 255.0) as i64))
        .collect()
}

/// [`from_magnitudes`], optionally with a leading `#`.
pub fn from_magnitudes_prefixed(magnitudes: Magnitudes, hash_prefix: bool) -> String {
    with_prefix(from_magnitudes(magnitudes), hash_prefix)
}

fn hex_byte(value: i64) -> String {
    if value < 0 {
        format!("-{:02x}", value.unsigned_abs())
    } else {
        format!("{value:02x}")
    }
}

fn with_prefix(digits: String, hash_prefix: bool) -> String {
    if hash_prefix {
        format!("#{digits}")
    } else {
        digits
    }
}
