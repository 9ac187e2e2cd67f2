pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod guard;
pub mod handlers;
pub mod middleware;
pub mod proxy;
pub mod state;
pub mod upstream;

#[cfg(test)]
pub mod testing;
