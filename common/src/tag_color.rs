//! Colors for free-form tags, derived from the tag text itself.
//!
//! The same tag gets the same color in every session without any palette
//! or lookup table.

/// Polynomial rolling hash (base 31) over UTF-16 code units, wrapping in 32 bits.
fn tag_hash(tag: &str) -> i32 {
    tag.encode_utf16().fold(0_i32, |hash, unit| {
        (unit as i32).wrapping_add((hash << 5).wrapping_sub(hash))
    })
}

/// `#rrggbb`, red taken from the lowest byte of the hash.
pub fn color_for(tag: &str) -> String {
    let hash = tag_hash(tag);
    let mut color = String::from("#");
    for i in 0..3 {
        let channel = (hash >> (i * 8)) & 0xff;
        color.push_str(&format!("{channel:02x}"));
    }
    color
}

fn parse_hex_color(color: &str) -> Option<[u8; 3]> {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if !hex.is_ascii() {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let mut rgb = [0; 3];
            for (i, c) in hex.chars().enumerate() {
                let v = channel(&c.to_string())?;
                rgb[i] = v * 17;
            }
            Some(rgb)
        }
        6 => Some([channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?]),
        _ => None,
    }
}

/// HSL lightness in `[0, 1]`.
pub fn lightness(color: &str) -> Option<f64> {
    let rgb = parse_hex_color(color)?;
    let max = *rgb.iter().max()? as f64 / 255.0;
    let min = *rgb.iter().min()? as f64 / 255.0;
    Some((max + min) / 2.0)
}

/// Text color readable on top of `background`. Lightness of exactly 0.5
/// counts as light. Unparseable backgrounds are treated as dark.
pub fn legible_color(background: &str) -> &'static str {
    match lightness(background) {
        Some(l) if l >= 0.5 => "#000",
        _ => "#fff",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_tag_is_black() {
        assert_eq!(color_for(""), "#000000");
    }

    #[test]
    fn colors_are_deterministic() {
        assert_eq!(color_for("oak"), color_for("oak"));
        assert_ne!(color_for("oak"), color_for("ash"));
    }

    #[test]
    fn known_values() {
        // "a" hashes to 97 -> red channel 0x61
        assert_eq!(color_for("a"), "#610000");
        // "ab": 98 + 97 * 31 = 3105 = 0x0c21
        assert_eq!(color_for("ab"), "#210c00");
    }

    #[test]
    fn long_tags_wrap_around() {
        let tag = "invasive alien species of union concern";
        let color = color_for(tag);
        assert_eq!(color.len(), 7);
        assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn text_color_follows_lightness() {
        assert_eq!(legible_color("#ffffff"), "#000");
        assert_eq!(legible_color("#000000"), "#fff");
        assert_eq!(legible_color("#fff"), "#000");
        assert_eq!(legible_color("#1e3a8a"), "#fff");
        assert_eq!(legible_color("not a color"), "#fff");
    }

    #[test]
    fn boundary_lightness_counts_as_light() {
        // max 0xff, min 0x00 -> lightness exactly 0.5
        assert_eq!(lightness("#ff0000"), Some(0.5));
        assert_eq!(legible_color("#ff0000"), "#000");
        assert_eq!(legible_color("#00ff00"), "#000");
    }
}
