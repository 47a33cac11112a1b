//! Plate grammars as a closed set of static descriptors: one character
//! class per position plus separator positions for the canonical rendering.

/// Character class for a single plate position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Uppercase Latin letter A-Z.
    Letter,
    /// Digit 0-9.
    Digit,
    /// Digit 1-9. Zero is excluded; this is what separates Type A from
    /// otherwise similar 7-character strings.
    DigitNonZero,
}

impl CharClass {
    pub fn accepts(self, c: char) -> bool {
        match self {
            CharClass::Letter => c.is_ascii_uppercase(),
            CharClass::Digit => c.is_ascii_digit(),
            CharClass::DigitNonZero => ('1'..='9').contains(&c),
        }
    }
}

/// An immutable plate format: fixed-length pattern, vehicle category
/// label, and the positions after which a separator is inserted.
#[derive(Debug, Clone)]
pub struct PlateGrammar {
    pub name: &'static str,
    pub category: &'static str,
    pattern: &'static [CharClass],
    /// Indices (exclusive) where a '-' goes in the formatted rendering.
    separators: &'static [usize],
}

impl PlateGrammar {
    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    /// True when `text` has exactly the pattern's length and every
    /// character satisfies its position's class.
    pub fn matches(&self, text: &str) -> bool {
        text.chars().count() == self.pattern.len()
            && text.chars().zip(self.pattern).all(|(c, class)| class.accepts(c))
    }

    /// Canonical rendering with separators, e.g. "ABC-123-D".
    pub fn format(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len() + self.separators.len());
        for (i, c) in text.chars().enumerate() {
            if self.separators.contains(&i) {
                out.push('-');
            }
            out.push(c);
        }
        out
    }
}

use CharClass::{Digit, DigitNonZero, Letter};

/// Type A: 3 letters, 3 digits 1-9, 1 letter -> "LLL-DDD-L".
const TYPE_A: PlateGrammar = PlateGrammar {
    name: "Type A",
    category: "Automóvil",
    pattern: &[Letter, Letter, Letter, DigitNonZero, DigitNonZero, DigitNonZero, Letter],
    separators: &[3, 6],
};

/// Type B: 2 letters, 4 digits 0-9, 1 letter -> "LL-DDDD-L".
const TYPE_B: PlateGrammar = PlateGrammar {
    name: "Type B",
    category: "Camioneta",
    pattern: &[Letter, Letter, Digit, Digit, Digit, Digit, Letter],
    separators: &[2, 6],
};

/// Successful grammar match for a cleaned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlateMatch {
    pub formatted: String,
    pub category: &'static str,
    /// Region-lookup key: always the first two characters of the cleaned
    /// text, for both grammars. Fixed convention inherited from the
    /// dataset (Type A's alphabetic block is 3 letters, but the directory
    /// is keyed on 2) -- confirm with the dataset owners before changing.
    pub prefix: String,
}

/// Ordered grammar table. Grammars are tried first to last and the first
/// match wins; Type A is checked before Type B.
#[derive(Debug, Clone)]
pub struct GrammarMatcher {
    grammars: Vec<PlateGrammar>,
}

impl GrammarMatcher {
    pub fn new() -> Self {
        Self {
            grammars: vec![TYPE_A, TYPE_B],
        }
    }

    pub fn grammars(&self) -> &[PlateGrammar] {
        &self.grammars
    }

    /// Match `cleaned` against the table. `cleaned` must already be
    /// uppercase alphanumeric (see [`crate::pipeline::clean_text`]);
    /// anything else simply fails to match.
    pub fn find_match(&self, cleaned: &str) -> Option<PlateMatch> {
        let grammar = self.grammars.iter().find(|g| g.matches(cleaned))?;
        Some(PlateMatch {
            formatted: grammar.format(cleaned),
            category: grammar.category,
            prefix: cleaned.chars().take(2).collect(),
        })
    }
}

impl Default for GrammarMatcher {
    fn default() -> Self {
        Self::new()
    }
}
