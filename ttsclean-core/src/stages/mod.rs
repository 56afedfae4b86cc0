//! Concrete `TextStage` implementations, one file per pipeline position.
//!
//! Each stage also exposes its transformation as a free function so it can be
//! used without building a sanitizer.

pub mod emoticons;
pub mod markdown;
pub mod operators;
pub mod whitespace;

pub use emoticons::{clean_emoticons, EmoticonCleaner};
pub use markdown::MarkdownStripper;
pub use operators::{add_spaces_around_operators, OperatorSpacer};
pub use whitespace::{normalize_whitespace, WhitespaceNormalizer};
