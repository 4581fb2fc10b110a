pub mod lift;
pub mod rule;
pub mod search;

pub use lift::filter_by_lift;
pub use rule::Rule;
pub use search::generate_rules;
