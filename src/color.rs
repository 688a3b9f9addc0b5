use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Lighten, Srgb};

// ---------------------------------------------------------------------------
// Chart colours
// ---------------------------------------------------------------------------

/// Parse a `#rrggbb` string into an egui colour, falling back to grey.
pub fn hex_color(hex: &str) -> Color32 {
    match hex.parse::<Srgb<u8>>() {
        Ok(rgb) => Color32::from_rgb(rgb.red, rgb.green, rgb.blue),
        Err(e) => {
            log::warn!("invalid colour '{hex}': {e}");
            Color32::GRAY
        }
    }
}

/// A lighter tint of `color`, used for the area under a line.
pub fn tint(color: Color32, amount: f32, alpha: u8) -> Color32 {
    let rgb = Srgb::new(color.r(), color.g(), color.b()).into_format::<f32>();
    let hsl: Hsl = rgb.into_color();
    let light: Srgb = hsl.lighten(amount).into_color();
    let light = light.into_format::<u8>();
    Color32::from_rgba_unmultiplied(light.red, light.green, light.blue, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_chart_hex_colours() {
        assert_eq!(hex_color("#17B897"), Color32::from_rgb(0x17, 0xB8, 0x97));
        assert_eq!(hex_color("#E12D39"), Color32::from_rgb(0xE1, 0x2D, 0x39));
    }

    #[test]
    fn invalid_hex_falls_back_to_grey() {
        assert_eq!(hex_color("not a colour"), Color32::GRAY);
    }

    #[test]
    fn tint_is_lighter() {
        let base = hex_color("#E12D39");
        let light = tint(base, 0.3, 255);
        let sum = |c: Color32| c.r() as u32 + c.g() as u32 + c.b() as u32;
        assert!(sum(light) > sum(base));
    }
}
