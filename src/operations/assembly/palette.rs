use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors handed out to panel names, in order.
pub const PALETTE: [Rgb; 27] = [
    Rgb::new(255, 0, 0),
    Rgb::new(255, 128, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(128, 255, 0),
    Rgb::new(128, 255, 0),
    Rgb::new(0, 255, 128),
    Rgb::new(0, 255, 255),
    Rgb::new(0, 128, 255),
    Rgb::new(0, 0, 255),
    Rgb::new(127, 0, 255),
    Rgb::new(127, 0, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(255, 0, 127),
    Rgb::new(128, 128, 128),
    Rgb::new(255, 20, 20),
    Rgb::new(255, 128, 20),
    Rgb::new(255, 255, 20),
    Rgb::new(128, 255, 20),
    Rgb::new(128, 255, 20),
    Rgb::new(20, 255, 128),
    Rgb::new(20, 255, 255),
    Rgb::new(20, 128, 255),
    Rgb::new(20, 20, 255),
    Rgb::new(127, 20, 255),
    Rgb::new(127, 20, 255),
    Rgb::new(255, 20, 255),
    Rgb::new(255, 20, 127),
];

/// Assigns palette colors to panel names in first-seen order.
///
/// The palette wraps around once every color has been used.
#[derive(Debug, Clone, Default)]
pub struct PanelPalette {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl PanelPalette {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the color of `name`, assigning the next one on first sight.
    pub fn color_for(&mut self, name: &str) -> Rgb {
        let slot = match self.index.get(name) {
            Some(slot) => *slot,
            None => {
                let slot = self.names.len();
                self.names.push(name.to_owned());
                self.index.insert(name.to_owned(), slot);
                slot
            }
        };
        PALETTE[slot % PALETTE.len()]
    }

    /// Distinct names with their colors, in first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, Rgb)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(slot, name)| (name.as_str(), PALETTE[slot % PALETTE.len()]))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
