pub mod guard;
pub mod ping;
pub mod routes;
