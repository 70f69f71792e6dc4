pub mod catalog;
pub mod parse;
pub mod price;
pub mod rules;
