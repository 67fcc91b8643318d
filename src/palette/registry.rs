//! Seven-color palettes and name lookup

/// A named seven-color palette; index 0 is the background
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Registry key used by the CLI and API
    pub name: &'static str,
    /// Hex color strings as published in chart legends
    pub hex: [&'static str; 7],
}

impl Palette {
    /// RGB triples decoded from the hex entries
    pub fn colors(&self) -> Vec<[u8; 3]> {
        self.hex.iter().map(|entry| hex_to_rgb(entry)).collect()
    }

    /// The first `count` colors of the palette
    ///
    /// # Errors
    ///
    /// Returns `PaletteBound` if `count` exceeds the palette length.
    pub fn slice(&self, count: usize) -> crate::io::error::Result<Vec<[u8; 3]>> {
        if count > self.hex.len() {
            return Err(crate::io::error::ChartError::PaletteBound {
                index: count - 1,
                colors: self.hex.len(),
            });
        }
        Ok(self.colors().into_iter().take(count).collect())
    }
}

/// Decode a `#RRGGBB` string into an RGB triple
///
/// Malformed components decode to zero rather than failing; registry
/// entries are compile-time constants checked by tests.
pub fn hex_to_rgb(hex: &str) -> [u8; 3] {
    let digits = hex.trim_start_matches('#');
    let component = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
            .unwrap_or(0)
    };
    [component(0..2), component(2..4), component(4..6)]
}

/// Every registered palette in display order
pub static PALETTES: &[Palette] = &[
    Palette {
        name: "jewel_bazaar",
        hex: [
            "#F7F0E8", "#1B4F72", "#7D3C98", "#117A65", "#B03A2E", "#AF601A", "#5D4037",
        ],
    },
    Palette {
        name: "forest_copper",
        hex: [
            "#FBF6EF", "#1E2D24", "#2E6B4F", "#7A8F3A", "#B76E3A", "#6B3E26", "#2A7FAA",
        ],
    },
    Palette {
        name: "ocean_coral",
        hex: [
            "#F5FBFF", "#0B3954", "#087E8B", "#BFD7EA", "#FF5A5F", "#C81D25", "#4E8098",
        ],
    },
    Palette {
        name: "night_neon",
        hex: [
            "#0A0A0B", "#00E5FF", "#FF2EEA", "#FFD400", "#00FF6A", "#7C4DFF", "#FFFFFF",
        ],
    },
    Palette {
        name: "antique_sampler",
        hex: [
            "#FAF5EA", "#2E2A24", "#6C4B3B", "#A77B5A", "#C2A46B", "#6E7F63", "#9B4F4F",
        ],
    },
];

/// Look up a palette by registry key
pub fn find(name: &str) -> Option<&'static Palette> {
    PALETTES.iter().find(|palette| palette.name == name)
}

/// Registry keys in display order
pub fn names() -> Vec<&'static str> {
    PALETTES.iter().map(|palette| palette.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_decoding() {
        assert_eq!(hex_to_rgb("#F7F0E8"), [0xF7, 0xF0, 0xE8]);
        assert_eq!(hex_to_rgb("#000000"), [0, 0, 0]);
        assert_eq!(hex_to_rgb("#FFFFFF"), [255, 255, 255]);
    }

    #[test]
    fn test_every_registry_entry_decodes() {
        for palette in PALETTES {
            let colors = palette.colors();
            assert_eq!(colors.len(), 7);
            // A zero triple for a non-black entry would mean a bad constant
            for (hex, rgb) in palette.hex.iter().zip(&colors) {
                if !hex.eq_ignore_ascii_case("#000000") && *hex != "#0A0A0B" {
                    assert_ne!(*rgb, [0, 0, 0], "palette {} entry {hex}", palette.name);
                }
            }
        }
    }

    #[test]
    fn test_find_and_order() {
        assert!(find("jewel_bazaar").is_some());
        assert!(find("no_such_palette").is_none());
        assert_eq!(names().first().copied(), Some("jewel_bazaar"));
    }
}
