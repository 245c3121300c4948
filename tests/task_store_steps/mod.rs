//! Step definitions for task store BDD scenarios.

pub mod then;
pub mod when;
pub mod world;
