//! # Item Parsing Prompt
//!
//! Builds the instruction prompt sent to the language model. The allow-lists
//! are rendered from `Unit::ALL` and `Category::ALL` so the prompt can never
//! drift from what normalization accepts.

use crate::item_model::{Category, Unit};

const INSTRUCTIONS: &str = "\
Parse this shopping list text into a JSON array. Each element is an object with these fields:
- name: the item name in Hebrew (keep the user's wording for items without a Hebrew name)
- quantity: a number (default to 1 if not specified)
- unit: the unit in Hebrew - MUST be one of these exact values: {units} (default to יחידה if uncertain)
- category: MUST be one of these English categories: {categories}";

const RULES: &str = "\
You MUST map any non-standard units to the closest standard unit from the list above.
For example, \"חתיכות\", \"פיסות\", \"פרוסות\", etc. should all be mapped to \"יחידה\".
\"בקבוקים\" should be mapped to \"בקבוק\".
\"קופסאות\" should be mapped to \"קופסה\".

The text may describe several items. Items are separated by new lines, commas or semicolons.
Return one object per item, in the order they appear. Return an array even for a single item.
Respond with the JSON array only, without explanations.";

const EXAMPLES: &str = "\
For example:
If input is \"חלב 2 ליטר\", output: [{\"name\":\"חלב\",\"quantity\":2,\"unit\":\"ליטר\",\"category\":\"Dairy\"}]
If input is \"5 תפוחים\", output: [{\"name\":\"תפוחים\",\"quantity\":5,\"unit\":\"יחידה\",\"category\":\"Produce\"}]
If input is \"שוקולד 3 חתיכות\", output: [{\"name\":\"שוקולד\",\"quantity\":3,\"unit\":\"יחידה\",\"category\":\"Sweets\"}]
If input is \"עגבניות 3 ק״ג, קולה 6 בקבוקים\", output: [{\"name\":\"עגבניות\",\"quantity\":3,\"unit\":\"ק״ג\",\"category\":\"Produce\"},{\"name\":\"קולה\",\"quantity\":6,\"unit\":\"בקבוק\",\"category\":\"Beverages\"}]";

/// Build the full prompt for one free-text input
pub fn build_item_prompt(text: &str) -> String {
    let units = Unit::ALL.map(|unit| unit.label()).join(", ");
    let categories = Category::ALL.map(|category| category.label()).join(", ");
    let instructions = INSTRUCTIONS
        .replace("{units}", &units)
        .replace("{categories}", &categories);

    format!("{instructions}\n\n{RULES}\n\n{EXAMPLES}\n\nInput: \"{text}\"")
}
