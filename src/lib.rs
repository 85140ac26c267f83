pub use crate::errors::SweepError;

pub mod axis;
pub mod cli;
pub mod config;
pub mod errors;
pub mod product;
pub mod runner;
pub mod service;
pub mod session;
pub mod template;
