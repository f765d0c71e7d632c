mod phrase;
mod phrase_id;
mod tag;
mod value;
mod variant;

pub use phrase::Phrase;
pub use phrase_id::PhraseId;
pub use tag::{Tag, TagSet};
pub use value::Value;
pub use variant::{VariantError, VariantKey, VariantTable};
