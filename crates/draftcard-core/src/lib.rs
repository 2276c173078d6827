// Library root: draft-history statistics, tendencies and achievements for
// league member profiles, plus the loading and rendering stages around them.

pub mod config;
pub mod loader;
pub mod model;
pub mod render;
pub mod stats;
