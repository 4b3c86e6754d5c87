//! Core module - date parsing, validation, and age arithmetic

mod age;
mod date;
mod parser;

pub(crate) use age::{AgeReport, evaluate, next_birthday};
pub(crate) use date::{BirthDate, format_mdy, parse_mdy};
pub(crate) use parser::{Validation, parse_input, validate_input};
