//! # Shopping List Item Parser
//!
//! Turns free-text shopping input (Hebrew, English or mixed, one or many
//! items) into structured items with a name, quantity, unit and category.
//! A language model is asked first; a rule-based local parser takes over
//! whenever the model is unreachable or returns nothing usable.

pub mod completion;
pub mod item_model;
pub mod item_text_parser;
pub mod local_parser;
pub mod normalization;
pub mod parser_config;
pub mod parser_errors;
pub mod prompt;
pub mod response_extraction;
pub mod synonym_tables;
