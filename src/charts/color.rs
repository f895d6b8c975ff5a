//! Random series colors.

use rand::Rng;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Random `#RRGGBB` color from the thread RNG.
pub fn random_color() -> String {
    random_color_with(&mut rand::rng())
}

/// Random `#RRGGBB` color; each digit is drawn independently and
/// uniformly. No attempt is made to avoid repeats.
pub fn random_color_with<R: Rng>(rng: &mut R) -> String {
    let mut color = String::with_capacity(7);
    color.push('#');
    for _ in 0..6 {
        color.push(HEX_DIGITS[rng.random_range(0..16)] as char);
    }
    color
}

/// Parse `#RRGGBB` (either case) into its channels.
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
