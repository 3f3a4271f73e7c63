pub mod extra;
pub mod routes;
pub mod state;
