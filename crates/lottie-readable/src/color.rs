//! Hex coding of Lottie color channels.
//!
//! Lottie stores colors as `[r, g, b, a]` floats in `0..=1`. The readable form
//! is `#rrggbb`; alpha is never part of the string.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("expected at least 3 color channels, got {0}")]
    TooFewChannels(usize),
    #[error("invalid color length {0}, expected 6 hex digits")]
    InvalidLength(usize),
    #[error("invalid hex character '{0}'")]
    InvalidHex(char),
}

/// Encodes the first three channels as lowercase hex, two digits each.
///
/// Channels are scaled by 255 and rounded; negative values count by their
/// magnitude and anything past 255 is clamped. Extra channels are ignored.
pub fn encode_hex(channels: &[f64], prefixed: bool) -> Result<String, ColorError> {
    if channels.len() < 3 {
        return Err(ColorError::TooFewChannels(channels.len()));
    }

    let mut out = String::with_capacity(7);
    if prefixed {
        out.push('#');
    }
    for channel in &channels[..3] {
        out.push_str(&format!("{:02x}", channel_byte(*channel)));
    }
    Ok(out)
}

fn channel_byte(channel: f64) -> u8 {
    // NaN saturates to 0 in the cast
    (channel * 255.0).round().abs().min(255.0) as u8
}

/// Parses `#rrggbb` (the `#` is optional) back into channels in `0..=1`.
pub fn decode_hex(hex: &str) -> Result<[f64; 3], ColorError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(c));
    }
    if digits.len() != 6 {
        return Err(ColorError::InvalidLength(digits.len()));
    }

    let mut channels = [0.0; 3];
    for (i, channel) in channels.iter_mut().enumerate() {
        let byte = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|_| ColorError::InvalidLength(digits.len()))?;
        *channel = f64::from(byte) / 255.0;
    }
    Ok(channels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_ignores_alpha() {
        assert_eq!(
            encode_hex(&[0.525490224361, 0.262745112181, 0.262745112181, 1.0], true).unwrap(),
            "#864343"
        );
        assert_eq!(encode_hex(&[1.0, 0.0, 0.0, 0.25], false).unwrap(), "ff0000");
    }

    #[test]
    fn test_encode_pads_single_digits() {
        assert_eq!(encode_hex(&[0.0, 0.02, 0.04], true).unwrap(), "#00050a");
    }

    #[test]
    fn test_encode_takes_magnitude_and_clamps() {
        assert_eq!(encode_hex(&[-0.4, 1.5, -3.0], true).unwrap(), "#66ffff");
    }

    #[test]
    fn test_encode_rejects_short_input() {
        assert_eq!(
            encode_hex(&[1.0, 0.5], true),
            Err(ColorError::TooFewChannels(2))
        );
    }

    #[test]
    fn test_encoded_length_and_digits() {
        let steps = [0.0, 0.001, 0.1, 0.25, 0.333, 0.5, 0.75, 0.999, 1.0];
        for r in steps {
            for g in steps {
                for b in steps {
                    let hex = encode_hex(&[r, g, b], true).unwrap();
                    assert_eq!(hex.len(), 7, "{hex}");
                    assert!(hex[1..]
                        .chars()
                        .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
                }
            }
        }
    }

    #[test]
    fn test_decode_is_inverse_on_byte_values() {
        let channels = decode_hex("#864343").unwrap();
        assert_eq!(channels, [134.0 / 255.0, 67.0 / 255.0, 67.0 / 255.0]);
        assert_eq!(encode_hex(&channels, true).unwrap(), "#864343");
        assert_eq!(decode_hex("FF0000").unwrap(), [1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode_hex("#fff"), Err(ColorError::InvalidLength(3)));
        assert_eq!(decode_hex("#ggg000"), Err(ColorError::InvalidHex('g')));
        assert_eq!(decode_hex(""), Err(ColorError::InvalidLength(0)));
    }
}
