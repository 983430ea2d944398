//! # Normalization Module
//!
//! Turns a raw candidate object (as emitted by the language model) into a
//! `ParsedItem`. Out-of-range values are coerced to defaults, never rejected.

use log::debug;
use serde_json::Value;

use crate::item_model::{Category, ParsedItem, Unit};

/// Coerce a raw candidate into a valid `ParsedItem`
///
/// - `quantity`: a finite positive number, or a string holding one; otherwise 1
/// - `unit`: an exact allow-listed label; otherwise the base unit
/// - `category`: an exact allow-listed tag; otherwise Produce
/// - `name`: trimmed; empty or missing falls back to `original_text`
///
/// A bare string candidate is taken as the item name.
///
/// # Examples
///
/// ```rust
/// use serde_json::json;
/// use shopping_parser::item_model::{Category, Unit};
/// use shopping_parser::normalization::normalize;
///
/// let item = normalize(
///     &json!({"name": " קולה ", "quantity": "6", "unit": "בקבוקים", "category": "Drinks"}),
///     "קולה 6 בקבוקים",
/// );
///
/// assert_eq!(item.name, "קולה");
/// assert_eq!(item.quantity, 6.0);
/// assert_eq!(item.unit, Unit::Piece);
/// assert_eq!(item.category, Category::Produce);
/// ```
pub fn normalize(candidate: &Value, original_text: &str) -> ParsedItem {
    let name = match candidate {
        Value::String(name) => name.trim(),
        _ => candidate
            .get("name")
            .and_then(Value::as_str)
            .map(str::trim)
            .unwrap_or(""),
    };
    let name = if name.is_empty() {
        original_text.trim()
    } else {
        name
    };

    let mut item = ParsedItem::new(name);

    match candidate.get("quantity").and_then(quantity_value) {
        Some(quantity) => item = item.with_quantity(quantity),
        None => debug!("Quantity missing or invalid for '{}', defaulting to 1", name),
    }

    let raw_unit = candidate.get("unit").and_then(Value::as_str).map(str::trim);
    match raw_unit.and_then(Unit::from_label) {
        Some(unit) => item = item.with_unit(unit),
        None => debug!("Unit {:?} not in allowed list, defaulting to '{}'", raw_unit, Unit::default()),
    }

    let raw_category = candidate.get("category").and_then(Value::as_str).map(str::trim);
    match raw_category.and_then(Category::from_label) {
        Some(category) => item = item.with_category(category),
        None => debug!(
            "Category {:?} not in allowed list, defaulting to '{}'",
            raw_category,
            Category::default()
        ),
    }

    item
}

fn quantity_value(value: &Value) -> Option<f64> {
    let quantity = match value {
        Value::Number(number) => number.as_f64()?,
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (quantity.is_finite() && quantity > 0.0).then_some(quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ORIGINAL: &str = "  milk 2 liter ";

    #[test]
    fn test_valid_candidate_is_kept() {
        let item = normalize(
            &json!({"name": "חלב", "quantity": 2, "unit": "ליטר", "category": "Dairy"}),
            ORIGINAL,
        );
        assert_eq!(
            item,
            ParsedItem::new("חלב")
                .with_quantity(2.0)
                .with_unit(Unit::Liter)
                .with_category(Category::Dairy)
        );
    }

    #[test]
    fn test_missing_fields_get_defaults() {
        let item = normalize(&json!({}), ORIGINAL);
        assert_eq!(item.name, "milk 2 liter");
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.unit, Unit::Piece);
        assert_eq!(item.category, Category::Produce);
    }

    #[test]
    fn test_invalid_quantities_default_to_one() {
        for quantity in [json!(0), json!(-2), json!("a few"), json!(null), json!([3]), json!("")] {
            let item = normalize(&json!({"name": "x", "quantity": quantity}), ORIGINAL);
            assert_eq!(item.quantity, 1.0, "quantity {:?} should default", quantity);
        }
    }

    #[test]
    fn test_numeric_string_quantity_is_accepted() {
        let item = normalize(&json!({"name": "x", "quantity": " 1.5 "}), ORIGINAL);
        assert_eq!(item.quantity, 1.5);
    }

    #[test]
    fn test_unknown_unit_and_category_fall_back() {
        let item = normalize(
            &json!({"name": "x", "unit": "kg", "category": "dairy"}),
            ORIGINAL,
        );
        assert_eq!(item.unit, Unit::Piece);
        assert_eq!(item.category, Category::Produce);

        let item = normalize(&json!({"name": "x", "unit": 5, "category": ["Dairy"]}), ORIGINAL);
        assert_eq!(item.unit, Unit::Piece);
        assert_eq!(item.category, Category::Produce);
    }

    #[test]
    fn test_multi_word_category_is_accepted() {
        let item = normalize(&json!({"name": "סבון", "category": "Personal Care"}), ORIGINAL);
        assert_eq!(item.category, Category::PersonalCare);
    }

    #[test]
    fn test_blank_name_uses_original_text() {
        let item = normalize(&json!({"name": "   ", "quantity": 2}), ORIGINAL);
        assert_eq!(item.name, "milk 2 liter");
        assert_eq!(item.quantity, 2.0);
    }

    #[test]
    fn test_string_candidate_becomes_name() {
        let item = normalize(&json!(" bread "), ORIGINAL);
        assert_eq!(item.name, "bread");
        assert_eq!(item.quantity, 1.0);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let candidates = [
            json!({"name": "עגבניות", "quantity": 3, "unit": "ק״ג", "category": "Produce"}),
            json!({"name": "", "quantity": "abc", "unit": "bottles", "category": "Canned Goods"}),
            json!({"quantity": 0.25, "unit": "מ״ל"}),
            json!(42),
        ];

        for candidate in candidates {
            let once = normalize(&candidate, ORIGINAL);
            let twice = normalize(&serde_json::to_value(&once).unwrap(), ORIGINAL);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_output_stays_in_allowed_domains() {
        let candidates = [
            json!({"name": "x", "quantity": -1.0, "unit": "", "category": ""}),
            json!({"name": "y", "quantity": 1e308, "unit": "זוג", "category": "Frozen"}),
            json!(null),
        ];

        for candidate in candidates {
            let item = normalize(&candidate, ORIGINAL);
            assert!(item.quantity > 0.0);
            assert!(Unit::ALL.contains(&item.unit));
            assert!(Category::ALL.contains(&item.category));
            assert!(!item.name.trim().is_empty());
        }
    }
}
