//! Game rules.

pub mod win;
