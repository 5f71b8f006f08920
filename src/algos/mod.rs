pub mod caesar;
pub mod substitution;
