pub mod articles;
pub mod connection;
pub mod models;
pub mod query;
pub mod setup;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use models::*;
pub use query::SelectQuery;
