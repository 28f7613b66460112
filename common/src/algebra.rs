pub mod judgment;
pub mod system;
