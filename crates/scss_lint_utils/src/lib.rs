//! Normalization helpers shared by individual scss-lint rules.
//!
//! Rules look at selectors, color literals, property values and the parsed
//! syntax tree. Each of these arrives in a shape that is awkward to match
//! against directly, so this crate turns them into canonical forms:
//!
//! * [`extract_string_selectors`] drops interpolation from a selector and
//!   splits it into plain selector words
//! * [`shortest_hex_form`] / [`can_be_condensed`] shorten `#rrggbb` colors
//! * [`remove_quoted_strings`] masks string literals out of a value so keyword
//!   scans do not match inside them
//! * [`previous_node`] finds what structurally precedes a node in the tree
//! * [`pluralize`] formats count phrases for messages
//!
//! # Example
//!
//! ```rust
//! use scss_lint_utils::{extract_string_selectors, shortest_hex_form, SelectorToken};
//!
//! let selectors = extract_string_selectors(&[
//!   SelectorToken::literal(".selector-one, .selector-"),
//!   SelectorToken::Interpolation,
//!   SelectorToken::literal("-two"),
//! ]);
//! assert_eq!(selectors, vec![".selector-one,", ".selector--two"]);
//!
//! assert_eq!(shortest_hex_form("#FF0066"), "#f06");
//! ```
//!
//! # The syntax tree
//!
//! The tree belongs to the parser. This crate only reads it through the
//! [`SyntaxTree`] trait, which exposes a node's parent and its ordered
//! children. [`NodeArena`] is a small owned implementation, useful for
//! parsers that do not already have one and for tests.
//!
//! Nothing here mutates its input or keeps state between calls.

pub use color::*;
pub use error::*;
pub use pluralize::*;
pub use selector::*;
pub use string::*;
pub use tree::*;

mod color;
mod error;
mod pluralize;
mod selector;
mod string;
mod tree;
