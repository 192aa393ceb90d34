// Main library file for molecular analysis

pub mod app;
pub mod config;
pub mod elements;
pub mod error;
pub mod geometry;
pub mod io;
pub mod properties;
