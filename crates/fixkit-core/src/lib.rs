pub mod config;
pub mod logging;

pub mod arith;
pub mod fetch;
pub mod locate;
pub mod retry;
pub mod user;
