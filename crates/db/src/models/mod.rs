//! Domain model structs.

pub mod video;
