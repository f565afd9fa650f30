pub mod factors;
pub mod limit;
pub mod parse;
