//! Text utilities: name normalization and fuzzy similarity.

mod normalize;
mod similarity;

pub use normalize::{display_name, normalize_key};
pub use similarity::{close_matches, ratio};
