pub mod geo;
pub mod parse;
