mod class_label;
mod classification;
mod income_bracket;
mod perceived_class;

pub use class_label::ClassLabel;
pub use classification::ClassificationResult;
pub use income_bracket::IncomeBracket;
pub use perceived_class::{PERCEIVED_CLASS_OPTIONS, is_known_perception};
