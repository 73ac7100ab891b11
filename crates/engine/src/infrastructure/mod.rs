//! Infrastructure layer - the rule data port and its adapters.

pub mod cache;
pub mod ports;
pub mod rule_data;
pub mod settings;
