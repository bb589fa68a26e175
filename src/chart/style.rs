//! Per-algorithm series styling
//!
//! Symbols and strokes are looked up in ordered keyphrase tables, first match
//! wins. Colours come from the configured palette in sorted algorithm order,
//! except that a variant recognised by the stroke table reuses the colour of
//! the algorithm it is a variant of.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::config::ChartConfig;

/// Marker drawn at each data point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Square,
    Circle,
    Cross,
    Triangle,
    Asterisk,
    Pentagon,
}

impl Symbol {
    /// Single-character stand-in for terminal output
    pub fn glyph(self) -> char {
        match self {
            Self::Square => '■',
            Self::Circle => '●',
            Self::Cross => '✚',
            Self::Triangle => '▲',
            Self::Asterisk => '✱',
            Self::Pentagon => '⬟',
        }
    }
}

/// How a keyphrase must appear in an algorithm label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyphrase {
    EndsWith(&'static str),
    Contains(&'static str),
}

impl Keyphrase {
    pub fn matches(self, label: &str) -> bool {
        match self {
            Self::EndsWith(phrase) => label.ends_with(phrase),
            Self::Contains(phrase) => label.contains(phrase),
        }
    }

    /// The label with the keyphrase removed
    pub fn strip(self, label: &str) -> String {
        match self {
            Self::EndsWith(phrase) => label.strip_suffix(phrase).unwrap_or(label).to_string(),
            Self::Contains(phrase) => label.replace(phrase, ""),
        }
    }
}

const SYMBOL_RULES: [(Keyphrase, Symbol); 6] = [
    (Keyphrase::EndsWith("N-pass via replace"), Symbol::Square),
    (Keyphrase::EndsWith("N-pass via replacing"), Symbol::Square),
    (Keyphrase::Contains("replacingOccurrences"), Symbol::Circle),
    (
        Keyphrase::Contains("character enumeration & concatenation"),
        Symbol::Cross,
    ),
    (Keyphrase::Contains("firstIndex(where:)"), Symbol::Triangle),
    (Keyphrase::Contains("map & join"), Symbol::Asterisk),
];

const DEFAULT_SYMBOL: Symbol = Symbol::Pentagon;

/// Variants that swap the replacement table for a dictionary are drawn dashed
const DASHED_RULES: [Keyphrase; 1] = [Keyphrase::Contains(
    " (Dictionary of replacements instead of Array)",
)];

/// First symbol rule matching the label
pub fn symbol_for(algorithm: &str) -> Symbol {
    SYMBOL_RULES
        .iter()
        .find(|(keyphrase, _)| keyphrase.matches(algorithm))
        .map(|(_, symbol)| *symbol)
        .unwrap_or(DEFAULT_SYMBOL)
}

fn dashed_rule_for(algorithm: &str) -> Option<Keyphrase> {
    DASHED_RULES.iter().copied().find(|k| k.matches(algorithm))
}

/// Line stroke. An empty dash pattern is a solid line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub width: f32,
    pub dash: Vec<f32>,
}

impl Stroke {
    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesStyle {
    pub colour: [u8; 3],
    pub symbol: Symbol,
    pub stroke: Stroke,
}

impl SeriesStyle {
    /// `#rrggbb`
    pub fn hex_colour(&self) -> String {
        let [r, g, b] = self.colour;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }
}

/// Styles for every algorithm of a dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleTable {
    styles: BTreeMap<String, SeriesStyle>,
    #[serde(skip)]
    line_width: f32,
}

impl StyleTable {
    /// Assign styles in sorted label order so colours are stable across imports
    pub fn build<S: AsRef<str>>(algorithms: &[S], config: &ChartConfig) -> Self {
        let mut sorted: Vec<&str> = algorithms.iter().map(|a| a.as_ref()).collect();
        sorted.sort_unstable();
        sorted.dedup();

        let mut styles: BTreeMap<String, SeriesStyle> = BTreeMap::new();
        let mut colour_index = 0;

        for algorithm in sorted {
            let dashed = dashed_rule_for(algorithm);

            let base_colour = dashed
                .and_then(|keyphrase| styles.get(&keyphrase.strip(algorithm)))
                .map(|style| style.colour);

            let colour = match base_colour {
                Some(colour) => colour,
                None => {
                    let colour = palette_colour(&config.palette, colour_index);
                    colour_index += 1;
                    colour
                }
            };

            let stroke = Stroke {
                width: config.line_width,
                dash: if dashed.is_some() {
                    config.dash.clone()
                } else {
                    Vec::new()
                },
            };

            styles.insert(
                algorithm.to_string(),
                SeriesStyle {
                    colour,
                    symbol: symbol_for(algorithm),
                    stroke,
                },
            );
        }

        Self {
            styles,
            line_width: config.line_width,
        }
    }

    /// Style for an algorithm; unknown labels get black, pentagon and a solid line
    pub fn get(&self, algorithm: &str) -> SeriesStyle {
        self.styles.get(algorithm).cloned().unwrap_or(SeriesStyle {
            colour: [0, 0, 0],
            symbol: DEFAULT_SYMBOL,
            stroke: Stroke {
                width: self.line_width,
                dash: Vec::new(),
            },
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SeriesStyle)> {
        self.styles.iter().map(|(a, s)| (a.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

fn palette_colour(palette: &[[u8; 3]], index: usize) -> [u8; 3] {
    if palette.is_empty() {
        return [0, 0, 0];
    }
    palette[index % palette.len()]
}
