// Library interface for benchmarks and tests
#[macro_use]
extern crate actix_web;

pub mod address;
pub mod allow_list;
pub mod config;
pub mod constants;
pub mod deny_uri;
pub mod errors;
pub mod handlers;
pub mod maintenance;
pub mod middleware;
pub mod trigger;
pub mod types;
pub mod utils;
