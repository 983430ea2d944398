//! # Shopping Item Data Model
//!
//! This module defines the structured records produced by the free-text parser.
//! Units and categories are closed sets: anything outside them is coerced to
//! the base value before it can reach a `ParsedItem`.
//!
//! ## Core Concepts
//!
//! - **ParsedItem**: one shopping-list entry (name, quantity, unit, category)
//! - **Unit**: canonical measurement unit, labelled in Hebrew as stored by the app
//! - **Category**: product category tag shown in the shopping list
//!
//! ## Usage
//!
//! ```rust
//! use shopping_parser::item_model::{Category, ParsedItem, Unit};
//!
//! let milk = ParsedItem::new("חלב")
//!     .with_quantity(2.0)
//!     .with_unit(Unit::Liter)
//!     .with_category(Category::Dairy);
//!
//! assert_eq!(milk.unit.label(), "ליטר");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// A structured shopping item produced from free text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedItem {
    /// The item name (e.g., "חלב", "tomatoes")
    pub name: String,

    /// Strictly positive amount
    pub quantity: f64,

    /// Canonical unit from the allow-list
    pub unit: Unit,

    /// Category tag from the allow-list
    pub category: Category,
}

/// Canonical units accepted by the shopping list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Unit {
    /// Single piece (base unit)
    #[default]
    #[serde(rename = "יחידה")]
    Piece,
    /// Kilograms
    #[serde(rename = "ק״ג")]
    Kilogram,
    /// Grams
    #[serde(rename = "גרם")]
    Gram,
    /// Liters
    #[serde(rename = "ליטר")]
    Liter,
    /// Milliliters
    #[serde(rename = "מ״ל")]
    Milliliter,
    /// Packages
    #[serde(rename = "חבילה")]
    Package,
    /// Bottles
    #[serde(rename = "בקבוק")]
    Bottle,
    /// Boxes
    #[serde(rename = "קופסה")]
    Box,
    /// Pairs
    #[serde(rename = "זוג")]
    Pair,
}

/// Product categories accepted by the shopping list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Dairy,
    Meat,
    Fish,
    #[default]
    Produce,
    Bakery,
    Frozen,
    Beverages,
    Snacks,
    Sweets,
    #[serde(rename = "Canned Goods")]
    CannedGoods,
    Household,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    Grains,
}

impl Unit {
    /// Every allowed unit, in the order presented to the language model
    pub const ALL: [Unit; 9] = [
        Unit::Piece,
        Unit::Kilogram,
        Unit::Gram,
        Unit::Liter,
        Unit::Milliliter,
        Unit::Package,
        Unit::Bottle,
        Unit::Box,
        Unit::Pair,
    ];

    /// The stored label for this unit
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Piece => "יחידה",
            Unit::Kilogram => "ק״ג",
            Unit::Gram => "גרם",
            Unit::Liter => "ליטר",
            Unit::Milliliter => "מ״ל",
            Unit::Package => "חבילה",
            Unit::Bottle => "בקבוק",
            Unit::Box => "קופסה",
            Unit::Pair => "זוג",
        }
    }

    /// Look up a unit by its exact stored label
    ///
    /// Only canonical labels are accepted here; synonyms such as "בקבוקים"
    /// are resolved by the local parser's synonym table instead.
    pub fn from_label(label: &str) -> Option<Unit> {
        Unit::ALL.iter().copied().find(|unit| unit.label() == label)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Category {
    /// Every allowed category, in display order
    pub const ALL: [Category; 13] = [
        Category::Dairy,
        Category::Meat,
        Category::Fish,
        Category::Produce,
        Category::Bakery,
        Category::Frozen,
        Category::Beverages,
        Category::Snacks,
        Category::Sweets,
        Category::CannedGoods,
        Category::Household,
        Category::PersonalCare,
        Category::Grains,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Dairy => "Dairy",
            Category::Meat => "Meat",
            Category::Fish => "Fish",
            Category::Produce => "Produce",
            Category::Bakery => "Bakery",
            Category::Frozen => "Frozen",
            Category::Beverages => "Beverages",
            Category::Snacks => "Snacks",
            Category::Sweets => "Sweets",
            Category::CannedGoods => "Canned Goods",
            Category::Household => "Household",
            Category::PersonalCare => "Personal Care",
            Category::Grains => "Grains",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.label() == label)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl ParsedItem {
    /// Create an item with a name and all other fields at their defaults
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: 1.0,
            unit: Unit::default(),
            category: Category::default(),
        }
    }

    /// Set the quantity, keeping the default when the value is not strictly positive
    pub fn with_quantity(mut self, quantity: f64) -> Self {
        if quantity.is_finite() && quantity > 0.0 {
            self.quantity = quantity;
        }
        self
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }
}

impl fmt::Display for ParsedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} ({})", self.name, self.quantity, self.unit, self.category)
    }
}

/// Where a parse result came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ParseSource {
    /// The named language model produced the items
    Remote { model: String },
    /// The rule-based local parser produced the items
    LocalFallback,
}

/// The items parsed from one free-text input, with provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseOutcome {
    #[serde(rename = "parsed")]
    pub items: Vec<ParsedItem>,
    pub original_text: String,
    pub source: ParseSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_labels_round_trip() {
        for unit in Unit::ALL {
            assert_eq!(Unit::from_label(unit.label()), Some(unit));
        }
        assert_eq!(Unit::from_label("kg"), None);
        assert_eq!(Unit::from_label("בקבוקים"), None);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::from_label("Canned Goods"), Some(Category::CannedGoods));
        assert_eq!(Category::from_label("Personal Care"), Some(Category::PersonalCare));
        assert_eq!(Category::from_label("dairy"), None);
        assert_eq!(Category::ALL.len(), 13);
    }

    #[test]
    fn test_defaults() {
        let item = ParsedItem::new("לחם");
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.unit, Unit::Piece);
        assert_eq!(item.category, Category::Produce);
    }

    #[test]
    fn test_with_quantity_rejects_non_positive() {
        assert_eq!(ParsedItem::new("x").with_quantity(0.0).quantity, 1.0);
        assert_eq!(ParsedItem::new("x").with_quantity(-3.0).quantity, 1.0);
        assert_eq!(ParsedItem::new("x").with_quantity(f64::NAN).quantity, 1.0);
        assert_eq!(ParsedItem::new("x").with_quantity(2.5).quantity, 2.5);
    }

    #[test]
    fn test_serialization_uses_stored_labels() {
        let item = ParsedItem::new("שימורי תירס")
            .with_quantity(3.0)
            .with_unit(Unit::Box)
            .with_category(Category::CannedGoods);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["unit"], "קופסה");
        assert_eq!(json["category"], "Canned Goods");
        assert_eq!(json["quantity"], 3.0);
    }

    #[test]
    fn test_outcome_serialization_keys() {
        let outcome = ParseOutcome {
            items: vec![ParsedItem::new("חלב")],
            original_text: "חלב".to_string(),
            source: ParseSource::Remote {
                model: "gemini-2.0-flash".to_string(),
            },
        };
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["originalText"], "חלב");
        assert_eq!(json["parsed"][0]["name"], "חלב");
        assert_eq!(json["source"]["kind"], "remote");
        assert_eq!(json["source"]["model"], "gemini-2.0-flash");
    }
}
