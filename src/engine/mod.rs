//! Message generation engine
//!
//! A pure, synchronous pipeline: parse the template, resolve each position's
//! candidate values, expand the Cartesian product, assemble and score every
//! combination against the 70-character SMS budget.

mod assemble;
mod combine;
mod encoding;
mod generator;
mod resolver;
mod template;

pub use assemble::assemble;
pub use combine::{combination_at, cartesian_product, total_combinations};
pub use encoding::count_chars;
pub use generator::MessageGenerator;
pub use resolver::{expand_range, resolve_position, PhraseLookup};
pub use template::{parse_template, ParsedTemplate};
