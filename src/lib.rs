//! Decision Matrix - weighted decision scoring
//!
//! Options are scored against weighted criteria; the option with the highest
//! weighted sum wins once every cell of the matrix is filled in.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
