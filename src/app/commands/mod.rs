pub mod catalog;
pub mod generate;
