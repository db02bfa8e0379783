use crate::error::ColorError;

/// RGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value.
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }

    /// Parse `#rrggbb`, `#rgb` or a handful of CSS color names.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        if let Some(digits) = s.strip_prefix('#') {
            let invalid = || ColorError::InvalidHex(s.to_string());
            if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
            return match digits.len() {
                6 => Ok(Self::from_hex(value)),
                3 => {
                    // #abc -> #aabbcc
                    let r = (value >> 8) & 0xF;
                    let g = (value >> 4) & 0xF;
                    let b = value & 0xF;
                    Ok(Self::from_hex((r * 17) << 16 | (g * 17) << 8 | b * 17))
                }
                _ => Err(invalid()),
            };
        }

        let hex = match s.to_ascii_lowercase().as_str() {
            "white" => 0xFFFFFF,
            "black" => 0x000000,
            "gray" | "grey" => 0x808080,
            "red" => 0xFF0000,
            "green" => 0x008000,
            "blue" => 0x0000FF,
            "yellow" => 0xFFFF00,
            "orange" => 0xFFA500,
            "purple" => 0x800080,
            _ => return Err(ColorError::UnknownName(s.to_string())),
        };
        Ok(Self::from_hex(hex))
    }

    /// Parse a color, falling back to white (with a warning) when malformed.
    pub fn parse_or_white(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|err| {
            log::warn!("{err}, using white");
            Self::WHITE
        })
    }

    /// Linear interpolation toward `other`; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}
