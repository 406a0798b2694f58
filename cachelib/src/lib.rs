#[macro_use]
extern crate log;

pub mod cache;
pub mod store;
