//! Helper functions shared by the validator and the scaffolder

mod date;

pub use date::*;
