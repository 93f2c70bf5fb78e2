pub mod connection;
pub mod nullable;
pub mod rows;
pub mod setup;

pub use connection::{create_memory_pool, create_pool, get_connection, DbConn, DbPool};
pub use nullable::{
    null_int64, null_string, null_time, to_optional, wrap_nullable, NullInt64, NullString,
    NullTime, Nullable,
};
pub use rows::FromRow;
