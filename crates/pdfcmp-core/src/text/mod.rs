pub mod normalize;
pub mod similarity;

pub use normalize::normalize_text;
pub use similarity::{char_edit_distance, similarity};
