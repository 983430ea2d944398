//! # Local Parser Module
//!
//! This module provides the rule-based fallback used when the language model
//! cannot be reached or answers with nothing usable.
//!
//! ## Features
//!
//! - Splitting free text into item-sized substrings (lines first, then commas/semicolons)
//! - Quantity detection from the first decimal number in an item
//! - Unit detection via an ordered Hebrew/English synonym table
//! - Category inference via an ordered keyword table
//! - Output always satisfies the unit/category allow-lists and has a positive quantity

use log::{debug, info, trace};

use crate::item_model::ParsedItem;
use crate::synonym_tables::{SynonymTables, QUANTITY_REGEX};

/// Split shopping-list text into individual item substrings
///
/// Line breaks take priority: when the text has more than one non-blank line,
/// each line is one item. Otherwise the text is split on commas and semicolons.
/// A single line holding one item whose description contains a comma is
/// indistinguishable from two items and is split.
///
/// # Examples
///
/// ```rust
/// use shopping_parser::local_parser::split_items;
///
/// assert!(split_items("  ").is_empty());
/// assert_eq!(split_items("milk 2 liter"), vec!["milk 2 liter"]);
/// assert_eq!(
///     split_items("tomatoes 3 kg, bread; milk 1 liter"),
///     vec!["tomatoes 3 kg", "bread", "milk 1 liter"]
/// );
/// ```
pub fn split_items(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let lines: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if lines.len() > 1 {
        debug!("Split text into {} lines", lines.len());
        return lines;
    }

    let items: Vec<String> = text
        .split([',', ';'])
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();

    debug!("Split text into {} comma/semicolon separated items", items.len());
    items
}

/// Rule-based parser for a single item substring
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalItemParser {
    tables: SynonymTables,
}

impl LocalItemParser {
    /// Create a parser backed by the built-in synonym tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser backed by custom synonym tables
    pub fn with_tables(tables: SynonymTables) -> Self {
        Self { tables }
    }

    /// Parse one item substring into a `ParsedItem`
    ///
    /// Never fails. The first decimal number is the quantity; the text before it
    /// is the name, or the text after it when the number leads. The first unit
    /// synonym found anywhere in the item sets the unit and is removed from the
    /// name, and the first category keyword found sets the category.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shopping_parser::item_model::{Category, Unit};
    /// use shopping_parser::local_parser::LocalItemParser;
    ///
    /// let parser = LocalItemParser::new();
    /// let item = parser.parse("חלב 2 ליטר");
    ///
    /// assert_eq!(item.name, "חלב");
    /// assert_eq!(item.quantity, 2.0);
    /// assert_eq!(item.unit, Unit::Liter);
    /// assert_eq!(item.category, Category::Dairy);
    /// ```
    pub fn parse(&self, item_text: &str) -> ParsedItem {
        let input = item_text.trim();
        trace!("Parsing item locally: '{}'", input);

        let mut item = ParsedItem::new("");

        let mut name = match QUANTITY_REGEX.find(input) {
            Some(found) => {
                let quantity = found.as_str().parse::<f64>().unwrap_or(1.0);
                item = item.with_quantity(quantity);
                let before = input[..found.start()].trim();
                let after = input[found.end()..].trim();
                if before.is_empty() {
                    after.to_string()
                } else {
                    before.to_string()
                }
            }
            None => input.to_string(),
        };

        if let Some((token, unit)) = self.tables.find_unit(input) {
            debug!("Matched unit token '{}' -> '{}'", token, unit);
            item = item.with_unit(unit);
            name = name.replacen(token, "", 1).trim().to_string();
        }

        if let Some(category) = self.tables.find_category(input) {
            debug!("Inferred category '{}' for '{}'", category, input);
            item = item.with_category(category);
        }

        if name.trim().is_empty() {
            name = input.to_string();
        }
        item.name = name.trim().to_string();

        trace!("Local parse result: {}", item);
        item
    }

    /// Split free text into items and parse each one locally
    pub fn parse_all(&self, text: &str) -> Vec<ParsedItem> {
        let item_texts = split_items(text);
        info!("Parsing {} items locally", item_texts.len());
        item_texts.iter().map(|item_text| self.parse(item_text)).collect()
    }
}

/// Parse one item substring with the built-in tables
pub fn parse_local(item_text: &str) -> ParsedItem {
    LocalItemParser::new().parse(item_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item_model::{Category, Unit};

    fn create_parser() -> LocalItemParser {
        LocalItemParser::new()
    }

    #[test]
    fn test_split_empty_input() {
        assert!(split_items("").is_empty());
        assert!(split_items(" \n\t ").is_empty());
    }

    #[test]
    fn test_split_single_item() {
        assert_eq!(split_items("milk 2 liter"), vec!["milk 2 liter"]);
    }

    #[test]
    fn test_split_by_lines() {
        let items = split_items("tomatoes 3 kg\nbread\nmilk 1 liter");
        assert_eq!(items, vec!["tomatoes 3 kg", "bread", "milk 1 liter"]);
    }

    #[test]
    fn test_split_by_lines_keeps_commas_inside_lines() {
        let items = split_items("cheese, sliced\r\n\r\nbread\n");
        assert_eq!(items, vec!["cheese, sliced", "bread"]);
    }

    #[test]
    fn test_split_by_commas_and_semicolons() {
        let items = split_items("tomatoes 3 kg, bread, milk 1 liter");
        assert_eq!(items, vec!["tomatoes 3 kg", "bread", "milk 1 liter"]);

        let items = split_items("a;b,,c ;");
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_single_line_with_trailing_newline_splits_on_commas() {
        let items = split_items("apples, pears\n");
        assert_eq!(items, vec!["apples", "pears"]);
    }

    #[test]
    fn test_parse_hebrew_milk() {
        let item = create_parser().parse("חלב 2 ליטר");
        assert_eq!(item.name, "חלב");
        assert_eq!(item.quantity, 2.0);
        assert_eq!(item.unit, Unit::Liter);
        assert_eq!(item.category, Category::Dairy);
    }

    #[test]
    fn test_parse_leading_quantity() {
        let item = create_parser().parse("5 תפוחים");
        assert_eq!(item.name, "תפוחים");
        assert_eq!(item.quantity, 5.0);
        assert_eq!(item.unit, Unit::Piece);
        assert_eq!(item.category, Category::Produce);
    }

    #[test]
    fn test_parse_unit_synonym() {
        let item = create_parser().parse("שוקולד 3 חתיכות");
        assert_eq!(item.name, "שוקולד");
        assert_eq!(item.quantity, 3.0);
        assert_eq!(item.unit, Unit::Piece);
        assert_eq!(item.category, Category::Sweets);
    }

    #[test]
    fn test_parse_without_digits() {
        let item = create_parser().parse("לחם");
        assert_eq!(item.name, "לחם");
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.unit, Unit::Piece);
        assert_eq!(item.category, Category::Bakery);
    }

    #[test]
    fn test_parse_kilogram_with_gershayim() {
        let item = create_parser().parse("עגבניות 3 ק״ג");
        assert_eq!(item.name, "עגבניות");
        assert_eq!(item.quantity, 3.0);
        assert_eq!(item.unit, Unit::Kilogram);
        assert_eq!(item.category, Category::Produce);
    }

    #[test]
    fn test_parse_decimal_quantity() {
        let item = create_parser().parse("1.5 kg rice");
        assert_eq!(item.quantity, 1.5);
        assert_eq!(item.unit, Unit::Kilogram);
        assert_eq!(item.name, "rice");
        assert_eq!(item.category, Category::Grains);
    }

    #[test]
    fn test_unit_table_order_is_first_match() {
        // "בקבוק" is declared before "בקבוקים" and only its first occurrence is stripped
        let item = create_parser().parse("6 בקבוקים קולה");
        assert_eq!(item.unit, Unit::Bottle);
        assert_eq!(item.name, "ים קולה");
    }

    #[test]
    fn test_unit_only_item_keeps_original_text() {
        let item = create_parser().parse("2 ליטר");
        assert_eq!(item.unit, Unit::Liter);
        assert_eq!(item.quantity, 2.0);
        assert_eq!(item.name, "2 ליטר");
    }

    #[test]
    fn test_zero_quantity_is_coerced() {
        let item = create_parser().parse("0 bananas");
        assert_eq!(item.quantity, 1.0);
        assert_eq!(item.name, "bananas");
        assert_eq!(item.category, Category::Produce);
    }

    #[test]
    fn test_category_match_is_case_insensitive() {
        let item = create_parser().parse("CANDY 2");
        assert_eq!(item.category, Category::Sweets);
        assert_eq!(item.unit, Unit::Piece);
        assert_eq!(item.name, "CANDY");
    }

    #[test]
    fn test_parse_all_preserves_order() {
        let items = create_parser().parse_all("עגבניות 3 ק״ג, חלב 2 ליטר");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], create_parser().parse("עגבניות 3 ק״ג"));
        assert_eq!(items[1], create_parser().parse("חלב 2 ליטר"));
    }

    #[test]
    fn test_parse_all_empty() {
        assert!(create_parser().parse_all("").is_empty());
    }
}
