//! Small shared helpers.

pub mod code_generator;
