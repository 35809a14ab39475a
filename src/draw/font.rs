//! Font descriptor for sticker text rendering.

/// Font configuration for sticker symbols.
///
/// Passed to the drawing surface so committed stickers, the ghost preview and
/// export replays all measure and draw glyphs with the same face.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Sans", "Noto Color Emoji")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light")
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self::for_family("Sans")
    }
}

impl FontDescriptor {
    /// Creates a new font descriptor with the specified parameters.
    pub fn new(family: String, weight: String, style: String) -> Self {
        Self {
            family,
            weight,
            style,
        }
    }

    /// Regular upright face of the given family.
    pub fn for_family(family: &str) -> Self {
        Self::new(family.to_string(), "normal".to_string(), "normal".to_string())
    }

    /// Converts this font descriptor to a Pango font description string.
    ///
    /// Format: "Family Style Weight Size"
    /// Example: "Sans 32" or "Monospace Italic Bold 24"
    pub fn to_pango_string(&self, size: f64) -> String {
        let mut parts = vec![self.family.clone()];

        if self.style.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.style));
        }

        if self.weight.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.weight));
        }

        parts.push(format!("{}", size.round() as i32));

        parts.join(" ")
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
