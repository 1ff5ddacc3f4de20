//! different utility modules used throughout the project
/// terminal logger set up by name of the level
pub mod logger;
/// pretty-printing of node sets and operator matrices
pub mod tables;
