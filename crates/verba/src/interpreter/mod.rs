//! Evaluation engine: locales, plural rules, `:match` selection, tag
//! inheritance and transforms.

mod error;
mod evaluator;
mod lint;
mod locale;
mod matcher;
mod plural;
mod registry;
mod tags;
mod transforms;

pub use error::{EvalError, LoadError, LoadWarning};
pub use lint::lint_definitions;
pub use locale::Locale;
pub use plural::{PluralCategory, PluralRule, cldr_category};
pub use tags::TagGroups;
pub use transforms::{TransformFn, TransformRegistry};
