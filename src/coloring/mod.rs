//! Greedy colouring of vertices and edges.
//!
//! Both colourers walk their elements in a fixed order and give each one the
//! first palette colour not already used by a conflicting element. The number
//! of colours used is an upper bound on the chromatic number (or index), not
//! the optimum.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

pub mod edge;
pub mod vertex;

pub use self::edge::{EdgeColoring, color_edges};
pub use self::vertex::{VertexColoring, color_vertices};

/// Built-in palette: category10 followed by further distinct hues.
pub const DEFAULT_PALETTE: [&str; 56] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf", "#393b79", "#ffbb78", "#98df8a", "#c49c94", "#f7b6d2", "#c7c7c7",
    "#dbdb8d", "#9edae5", "#c5b0d5", "#aec7e8", "#ff9896", "#d9d9d9", "#ffddc1", "#f2a900",
    "#e9c46a", "#6a4c93", "#2a9d8f", "#264653", "#e76f51", "#f8b400", "#2a2d34", "#6a0572",
    "#ab83c1", "#f5cac3", "#ffe156", "#00b2a9", "#ff6f61", "#7b2d67", "#f1c40f", "#e74c3c",
    "#3498db", "#2ecc71", "#9b59b6", "#34495e", "#16a085", "#27ae60", "#2980b9", "#8e44ad",
    "#2c3e50", "#95a5a6", "#d35400", "#e67e22", "#f39c12", "#c0392b", "#7f8c8d", "#bdc3c7",
];

/// Odd multiplier, so `k * SYNTHETIC_STRIDE mod 2^24` never repeats.
const SYNTHETIC_STRIDE: u32 = 0x9e_3779;

/// An opaque colour value handed to the renderer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered list of distinct colours.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Palette {
    colors: Vec<Color>,
    synthesized: u32,
}

impl Palette {
    /// Builds a palette, dropping repeated entries. Fails on an empty list.
    pub fn new<I, S>(colors: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let colors: Vec<Color> = colors
            .into_iter()
            .map(|c| c.as_ref().trim().to_lowercase())
            .filter(|c| !c.is_empty() && seen.insert(c.clone()))
            .map(Color)
            .collect();

        if colors.is_empty() {
            return Err(GraphError::InvalidConfig {
                reason: "palette must contain at least one colour".to_string(),
            });
        }

        Ok(Self {
            colors,
            synthesized: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Color> {
        self.colors.get(index)
    }

    /// Appends a synthesised `#rrggbb` colour distinct from every existing
    /// entry and returns its index.
    fn grow(&mut self) -> usize {
        loop {
            self.synthesized += 1;
            let rgb = self.synthesized.wrapping_mul(SYNTHETIC_STRIDE) & 0xff_ffff;
            let candidate = Color(format!("#{rgb:06x}"));
            if !self.colors.contains(&candidate) {
                self.colors.push(candidate);
                return self.colors.len() - 1;
            }
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.iter().map(|c| Color::new(*c)).collect(),
            synthesized: 0,
        }
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = GraphError;

    fn try_from(colors: Vec<String>) -> Result<Self> {
        Palette::new(colors)
    }
}

impl From<Palette> for Vec<String> {
    fn from(palette: Palette) -> Self {
        palette.colors.into_iter().map(|c| c.0).collect()
    }
}

/// What to do when every palette colour conflicts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteGrowth {
    /// Report [`ColoringOutcome::PaletteExhausted`].
    #[default]
    Fixed,
    /// Synthesise further colours on demand.
    Extend,
}

/// Palette and overflow policy shared by both colourers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColoringConfig {
    pub palette: Palette,
    pub growth: PaletteGrowth,
}

impl ColoringConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| GraphError::InvalidConfig {
            reason: err.to_string(),
        })
    }

    pub fn with_palette(palette: Palette) -> Self {
        Self {
            palette,
            ..Default::default()
        }
    }
}

/// Result of a colouring run. Running out of colours is reported, never
/// silently skipped.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ColoringOutcome<T, E> {
    Colored(T),
    /// `element` is the first vertex or edge that could not be coloured.
    PaletteExhausted { element: E, palette_size: usize },
}

impl<T, E> ColoringOutcome<T, E> {
    pub fn colored(self) -> Option<T> {
        match self {
            ColoringOutcome::Colored(coloring) => Some(coloring),
            ColoringOutcome::PaletteExhausted { .. } => None,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        matches!(self, ColoringOutcome::PaletteExhausted { .. })
    }
}

/// Picks the lowest palette index outside `forbidden`, growing the palette
/// if the policy allows.
fn first_free(palette: &mut Palette, forbidden: &HashSet<usize>, growth: PaletteGrowth) -> Option<usize> {
    (0..palette.len())
        .find(|index| !forbidden.contains(index))
        .or_else(|| match growth {
            PaletteGrowth::Fixed => None,
            PaletteGrowth::Extend => Some(palette.grow()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_is_distinct() {
        let palette = Palette::default();
        let distinct: HashSet<_> = DEFAULT_PALETTE.iter().collect();
        assert_eq!(palette.len(), distinct.len());
        assert_eq!(palette.get(0), Some(&Color::new("#1f77b4")));
    }

    #[test]
    fn palette_deduplicates_and_rejects_empty() {
        let palette = Palette::new(["#FFF", "#fff", "#000"]).unwrap();
        assert_eq!(palette.len(), 2);
        assert!(Palette::new(Vec::<String>::new()).is_err());
        assert!(Palette::new([" "]).is_err());
    }

    #[test]
    fn first_free_respects_policy() {
        let mut palette = Palette::new(["red", "green"]).unwrap();
        let forbidden: HashSet<usize> = [0].into_iter().collect();
        assert_eq!(first_free(&mut palette, &forbidden, PaletteGrowth::Fixed), Some(1));

        let forbidden: HashSet<usize> = [0, 1].into_iter().collect();
        assert_eq!(first_free(&mut palette, &forbidden, PaletteGrowth::Fixed), None);
        assert_eq!(first_free(&mut palette, &forbidden, PaletteGrowth::Extend), Some(2));
        assert_eq!(palette.len(), 3);
        assert!(palette.get(2).unwrap().as_str().starts_with('#'));
    }

    #[test]
    fn synthesised_colours_are_unique() {
        let mut palette = Palette::default();
        for _ in 0..500 {
            palette.grow();
        }
        let distinct: HashSet<_> = palette.colors.iter().collect();
        assert_eq!(distinct.len(), palette.len());
    }

    #[test]
    fn config_from_json() {
        let config =
            ColoringConfig::from_json(r#"{"palette": ["red", "blue"], "growth": "extend"}"#).unwrap();
        assert_eq!(config.palette.len(), 2);
        assert_eq!(config.growth, PaletteGrowth::Extend);

        let config = ColoringConfig::from_json("{}").unwrap();
        assert_eq!(config, ColoringConfig::default());

        assert!(matches!(
            ColoringConfig::from_json(r#"{"palette": []}"#),
            Err(GraphError::InvalidConfig { .. })
        ));
    }
}
