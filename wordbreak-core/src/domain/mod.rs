//! Pure word-boundary domain logic
//!
//! Classification tables, the context cursor and the rule engine. Nothing
//! in this module allocates per call or performs I/O.

pub mod category;
pub mod classifier;
pub mod cursor;
pub mod rules;
pub mod tables;
pub mod types;

pub use category::{CharProps, WordBreakCategory};
pub use classifier::{
    classify, is_extended_pictographic, is_hiragana, is_ideographic, UnicodeClassifier,
    WordBreakClassifier,
};
pub use cursor::ContextCursor;
pub use rules::{BoundaryDecision, BoundaryRules, BreakRule, RegionalRun};
pub use types::{CodePoint, Segment, SegmentKind};
