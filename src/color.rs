//! Color parsing for embed accent colors.
//!
//! Accepted inputs:
//!   - `#rgb` / `#rrggbb` hex
//!   - `rrr,ggg,bbb`, `rrr ggg bbb` or any other non-digit separator
//!
//! Result is the packed 24-bit value `r << 16 | g << 8 | b`.

use std::sync::OnceLock;

use regex::Regex;

static RGB_PATTERN: OnceLock<Regex> = OnceLock::new();

fn rgb_pattern() -> &'static Regex {
    RGB_PATTERN.get_or_init(|| {
        Regex::new(r"^([0-9]{1,3})[^0-9]+([0-9]{1,3})[^0-9]+([0-9]{1,3})$")
            .expect("RGB pattern is a valid regex")
    })
}

/// Parse a hex or RGB color into its 24-bit integer form.
///
/// Returns `None` when no color can be extracted or a channel exceeds 255.
pub fn parse_color(input: &str) -> Option<u32> {
    let (r, g, b) = match input.strip_prefix('#') {
        Some(hex) => parse_hex(hex)?,
        None => parse_rgb(input)?,
    };
    Some(pack(r, g, b))
}

/// Render a packed color as `#RRGGBB`.
pub fn to_hex(color: u32) -> String {
    format!("#{:06X}", color & crate::constants::MAX_COLOR)
}

fn pack(r: u32, g: u32, b: u32) -> u32 {
    (r << 16) + (g << 8) + b
}

fn parse_hex(hex: &str) -> Option<(u32, u32, u32)> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let digits: Vec<char> = hex.chars().collect();
    let channel = |hi: char, lo: char| u32::from_str_radix(&format!("{hi}{lo}"), 16).ok();
    match digits.as_slice() {
        [r, g, b] => Some((channel(*r, *r)?, channel(*g, *g)?, channel(*b, *b)?)),
        [r1, r2, g1, g2, b1, b2] => {
            Some((channel(*r1, *r2)?, channel(*g1, *g2)?, channel(*b1, *b2)?))
        }
        _ => None,
    }
}

fn parse_rgb(input: &str) -> Option<(u32, u32, u32)> {
    let caps = rgb_pattern().captures(input)?;
    let channel = |i: usize| caps.get(i)?.as_str().parse::<u32>().ok();
    let (r, g, b) = (channel(1)?, channel(2)?, channel(3)?);
    if r > 255 || g > 255 || b > 255 {
        return None;
    }
    Some((r, g, b))
}
