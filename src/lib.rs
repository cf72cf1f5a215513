pub mod config;
pub mod grouper;
pub mod model;
pub mod wikipedia;
