pub mod handlers;
pub mod password;
pub mod protocol;
pub mod routes;
pub mod state;
