//! Command handlers. Each translates parsed arguments into calls on the core.

pub mod generate;
