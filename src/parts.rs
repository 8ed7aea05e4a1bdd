//! Part mode: guess the five parts of a sword.
//!
//! Every sword is split into the same five slots, in order: end, handle,
//! hilt, blade, tip. A part is identified by its slot category and the asset
//! file it was cut into, so `handle:3.png` and `hilt:3.png` are different
//! symbols even though they come from the same sword.

use crate::error::GameError;
use crate::variant::Variant;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

pub const NUM_SWORDS: usize = 5;
pub const PART_COUNT: usize = Category::ALL.len();
const ASSET_EXTENSION: &str = ".png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    End,
    Handle,
    Hilt,
    Blade,
    Tip,
}

impl Category {
    /// Slot order
    pub const ALL: [Category; 5] = [
        Category::End,
        Category::Handle,
        Category::Hilt,
        Category::Blade,
        Category::Tip,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::End => "end",
            Self::Handle => "handle",
            Self::Hilt => "hilt",
            Self::Blade => "blade",
            Self::Tip => "tip",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Part {
    pub category: Category,
    pub file: String,
}

impl Part {
    pub fn new(category: Category, file: impl Into<String>) -> Self {
        Self {
            category,
            file: file.into(),
        }
    }

    /// File name without its extension
    pub fn stem(&self) -> &str {
        self.file
            .strip_suffix(ASSET_EXTENSION)
            .unwrap_or(&self.file)
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category, self.file)
    }
}

fn asset_file(token: &str) -> String {
    if token.ends_with(ASSET_EXTENSION) {
        token.to_string()
    } else {
        format!("{token}{ASSET_EXTENSION}")
    }
}

/// Available asset files per category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartCatalogue {
    assets: [Vec<String>; PART_COUNT],
}

impl PartCatalogue {
    /// Catalogue for `swords` swords, each cut into `1.png`, `2.png`, ...
    pub fn with_swords(swords: usize) -> Self {
        let files: Vec<String> = (1..=swords).map(|i| asset_file(&i.to_string())).collect();
        Self {
            assets: std::array::from_fn(|_| files.clone()),
        }
    }

    pub fn assets(&self, category: Category) -> &[String] {
        &self.assets[category.index()]
    }

    pub fn contains(&self, part: &Part) -> bool {
        self.assets(part.category).contains(&part.file)
    }
}

impl Default for PartCatalogue {
    fn default() -> Self {
        Self::with_swords(NUM_SWORDS)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PartVariant {
    catalogue: PartCatalogue,
}

impl PartVariant {
    pub fn new(catalogue: PartCatalogue) -> Self {
        Self { catalogue }
    }

    pub fn catalogue(&self) -> &PartCatalogue {
        &self.catalogue
    }

    fn tokens(input: &str) -> Vec<String> {
        let tokens: Vec<&str> = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();
        // Compact form: "13254"
        if let [single] = tokens.as_slice()
            && single.len() == PART_COUNT
            && single.chars().all(|c| c.is_ascii_digit())
        {
            return single.chars().map(|c| c.to_string()).collect();
        }
        tokens.into_iter().map(str::to_string).collect()
    }
}

impl Variant for PartVariant {
    type Symbol = Part;

    fn name(&self) -> &'static str {
        "parts"
    }

    fn length(&self) -> usize {
        PART_COUNT
    }

    fn input_hint(&self) -> String {
        format!("{PART_COUNT} parts, one per slot: e.g. 1 3 2 5 4")
    }

    fn parse_guess(&self, input: &str) -> Result<Vec<Part>, GameError> {
        let tokens = Self::tokens(input);
        if tokens.len() < PART_COUNT {
            return Err(GameError::IncompleteGuess);
        }
        if tokens.len() > PART_COUNT {
            return Err(GameError::InvalidInput(format!(
                "Expected {PART_COUNT} parts, got {}",
                tokens.len()
            )));
        }
        Ok(Category::ALL
            .iter()
            .zip(tokens)
            .map(|(&category, token)| Part::new(category, asset_file(&token)))
            .collect())
    }

    fn parse_key(&self, slot: usize, key: char) -> Option<Part> {
        let category = *Category::ALL.get(slot)?;
        if !key.is_ascii_digit() {
            return None;
        }
        let part = Part::new(category, asset_file(&key.to_string()));
        self.catalogue.contains(&part).then_some(part)
    }

    fn validate(&self, guess: &[Part]) -> Result<(), GameError> {
        for (slot, part) in Category::ALL.iter().zip(guess) {
            if part.category != *slot || !self.catalogue.contains(part) {
                return Err(GameError::UnknownPart {
                    category: slot.to_string(),
                    file: part.file.clone(),
                });
            }
        }
        Ok(())
    }

    fn pick_secret<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Part>, GameError> {
        Category::ALL
            .iter()
            .map(|&category| {
                self.catalogue
                    .assets(category)
                    .choose(rng)
                    .map(|file| Part::new(category, file.clone()))
                    .ok_or(GameError::EmptyAnswerList)
            })
            .collect()
    }

    fn describe(&self, sequence: &[Part]) -> String {
        sequence
            .iter()
            .map(Part::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn label(&self, symbol: &Part) -> String {
        symbol.stem().to_string()
    }

    fn keyboard_rows(&self) -> Vec<Vec<Part>> {
        Category::ALL
            .iter()
            .map(|&category| {
                self.catalogue
                    .assets(category)
                    .iter()
                    .map(|file| Part::new(category, file.clone()))
                    .collect()
            })
            .collect()
    }

    fn keyboard_caption(&self, row: usize) -> Option<String> {
        Category::ALL.get(row).map(|c| c.to_string())
    }
}
