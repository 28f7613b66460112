pub mod generator;
pub mod judge;
pub mod session;
