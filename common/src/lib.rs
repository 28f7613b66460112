pub mod algebra;
pub mod config;
mod macros;
