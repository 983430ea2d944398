//! # Synonym Tables Module
//!
//! This module contains the keyword tables and regex patterns used by the local
//! item parser. Tables are ordered slices: the first entry that matches wins, so
//! entries must stay in their declared order.

use lazy_static::lazy_static;
use regex::Regex;

use crate::item_model::{Category, Unit};

// First decimal number in an item ("2", "1.5"); ASCII digits only
pub const QUANTITY_PATTERN: &str = r"[0-9]+(?:\.[0-9]+)?";

lazy_static! {
    pub static ref QUANTITY_REGEX: Regex =
        Regex::new(QUANTITY_PATTERN).expect("Quantity pattern should be valid");
}

/// Surface tokens (Hebrew and English) mapped to canonical units
pub static UNIT_SYNONYMS: &[(&str, Unit)] = &[
    // Weight units
    ("קילו", Unit::Kilogram),
    ("קילוגרם", Unit::Kilogram),
    ("ק״ג", Unit::Kilogram),
    ("קג", Unit::Kilogram),
    ("kg", Unit::Kilogram),
    ("גרם", Unit::Gram),
    ("gram", Unit::Gram),
    ("g", Unit::Gram),
    // Volume units
    ("ליטר", Unit::Liter),
    ("liter", Unit::Liter),
    ("l", Unit::Liter),
    ("מיליליטר", Unit::Milliliter),
    ("מ״ל", Unit::Milliliter),
    ("ml", Unit::Milliliter),
    // Package units
    ("חבילה", Unit::Package),
    ("חבילות", Unit::Package),
    ("package", Unit::Package),
    ("pack", Unit::Package),
    ("חפיסה", Unit::Package),
    ("חפיסות", Unit::Package),
    // Bottle units
    ("בקבוק", Unit::Bottle),
    ("בקבוקים", Unit::Bottle),
    ("bottle", Unit::Bottle),
    ("bottles", Unit::Bottle),
    // Box units
    ("קופסה", Unit::Box),
    ("קופסאות", Unit::Box),
    ("box", Unit::Box),
    ("boxes", Unit::Box),
    // Pair units
    ("זוג", Unit::Pair),
    ("זוגות", Unit::Pair),
    ("pair", Unit::Pair),
    ("pairs", Unit::Pair),
    // Piece units
    ("יחידה", Unit::Piece),
    ("יחידות", Unit::Piece),
    ("חתיכה", Unit::Piece),
    ("חתיכות", Unit::Piece),
    ("פרוסה", Unit::Piece),
    ("פרוסות", Unit::Piece),
    ("פיסה", Unit::Piece),
    ("פיסות", Unit::Piece),
    ("piece", Unit::Piece),
    ("pieces", Unit::Piece),
    ("unit", Unit::Piece),
    ("units", Unit::Piece),
];

/// Product-name fragments mapped to categories, matched against lowercased text
pub static CATEGORY_KEYWORDS: &[(&str, Category)] = &[
    // Dairy
    ("חלב", Category::Dairy),
    ("גבינה", Category::Dairy),
    ("יוגורט", Category::Dairy),
    ("milk", Category::Dairy),
    ("cheese", Category::Dairy),
    ("yogurt", Category::Dairy),
    // Meat
    ("בשר", Category::Meat),
    ("עוף", Category::Meat),
    ("הודו", Category::Meat),
    ("beef", Category::Meat),
    ("chicken", Category::Meat),
    // Produce ("עגבנ" covers every form of עגבניה)
    ("עגבנ", Category::Produce),
    ("מלפפון", Category::Produce),
    ("תפוח", Category::Produce),
    ("בננה", Category::Produce),
    ("ירק", Category::Produce),
    ("פרי", Category::Produce),
    ("tomato", Category::Produce),
    ("cucumber", Category::Produce),
    ("apple", Category::Produce),
    ("banana", Category::Produce),
    // Grains and bakery
    ("אורז", Category::Grains),
    ("פסטה", Category::Grains),
    ("לחם", Category::Bakery),
    ("rice", Category::Grains),
    ("pasta", Category::Grains),
    ("bread", Category::Bakery),
    // Beverages
    ("מים", Category::Beverages),
    ("משקה", Category::Beverages),
    ("מיץ", Category::Beverages),
    ("water", Category::Beverages),
    ("juice", Category::Beverages),
    ("drink", Category::Beverages),
    // Sweets
    ("שוקולד", Category::Sweets),
    ("ממתק", Category::Sweets),
    ("chocolate", Category::Sweets),
    ("candy", Category::Sweets),
    // Eggs are shelved with dairy
    ("ביצים", Category::Dairy),
    ("eggs", Category::Dairy),
];

/// Keyword tables consulted by the local parser
///
/// Injected rather than read from the statics directly so tests can swap in
/// fixture tables without touching shared state.
#[derive(Debug, Clone, Copy)]
pub struct SynonymTables {
    pub units: &'static [(&'static str, Unit)],
    pub categories: &'static [(&'static str, Category)],
}

impl SynonymTables {
    /// First unit whose surface token occurs in `text`, with the matched token
    pub fn find_unit(&self, text: &str) -> Option<(&'static str, Unit)> {
        self.units
            .iter()
            .find(|(token, _)| text.contains(*token))
            .copied()
    }

    /// First category whose keyword occurs in the lowercased `text`
    pub fn find_category(&self, text: &str) -> Option<Category> {
        let lowered = text.to_lowercase();
        self.categories
            .iter()
            .find(|(keyword, _)| lowered.contains(*keyword))
            .map(|(_, category)| *category)
    }
}

impl Default for SynonymTables {
    fn default() -> Self {
        Self {
            units: UNIT_SYNONYMS,
            categories: CATEGORY_KEYWORDS,
        }
    }
}
