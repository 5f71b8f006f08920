#[macro_use]
extern crate lazy_static;

pub mod algos;
pub mod config;
pub mod constants;
pub mod error;
pub mod prompt;
pub mod session;
pub mod structs;
pub mod traits;
pub mod utils;
