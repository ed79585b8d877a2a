pub mod garden_parser;

pub use garden_parser::{format_flowers, GardenParser, Parser};
