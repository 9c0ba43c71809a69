//! Conversions between the textual hex notations

use log::trace;

/// Convert `"#rrggbb"` to `"0xrrggbb"`
///
/// The text after `#` is read as a base-16 number and re-rendered with six
/// lowercase digits. Returns `None` when it is not a hex number that fits
/// in 24 bits.
pub fn pound_to_hex(color: &str) -> Option<String> {
    let digits = color.strip_prefix('#').unwrap_or(color);
    match u32::from_str_radix(digits, 16) {
        Ok(value) if value <= 0xFF_FFFF => Some(format!("0x{value:06x}")),
        _ => {
            trace!("pound_to_hex: rejected {color:?}");
            None
        }
    }
}

/// Convert `"0xrrggbb"` to `"#rrggbb"` by replacing the first two characters
pub fn hex_to_pound(color: &str) -> String {
    let rest = color.char_indices().nth(2).map_or("", |(i, _)| &color[i..]);
    format!("#{rest}")
}

/// Render a packed value as `#` plus its hex digits
///
/// The output is not zero-padded: `0x5` renders as `"#5"`. Use
/// [`Rgb::to_pound`](crate::Rgb::to_pound) for a fixed-width result.
pub fn value_to_pound(color: u32) -> String {
    format!("#{color:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pound_to_hex() {
        assert_eq!(pound_to_hex("#FF8000").as_deref(), Some("0xff8000"));
        assert_eq!(pound_to_hex("#000001").as_deref(), Some("0x000001"));
        assert_eq!(pound_to_hex("#nothex"), None);
        assert_eq!(pound_to_hex("#1000000"), None);
    }

    #[test]
    fn test_hex_to_pound() {
        assert_eq!(hex_to_pound("0x123456"), "#123456");
        assert_eq!(hex_to_pound("0xABCDEF"), "#ABCDEF");
        assert_eq!(hex_to_pound("0x"), "#");
        assert_eq!(hex_to_pound(""), "#");
    }

    #[test]
    fn test_value_to_pound_is_unpadded() {
        assert_eq!(value_to_pound(0x5), "#5");
        assert_eq!(value_to_pound(0x00_ff00), "#ff00");
        assert_eq!(value_to_pound(0xabcdef), "#abcdef");
    }
}
