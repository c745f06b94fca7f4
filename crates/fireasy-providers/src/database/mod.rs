//! Database Provider Implementations
//!
//! | Provider | Name | Featured | Connection string |
//! |----------|------|----------|-------------------|
//! | [`OdbcProvider`] | `Odbc` | by `Driver` | `key=value;` pairs |
//! | [`OleDbProvider`] | `OleDb` | by `Provider` | `key=value;` pairs (parameters not implemented) |
//! | [`MongoDbProvider`] | `MongoDB` | no | `mongodb://` URL |
//!
//! Each provider registers itself in `DATABASE_PROVIDERS` and
//! `TYPE_DESCRIPTORS`, so linking this crate is enough to make it
//! resolvable by name.

pub mod mongodb;
pub mod odbc;
pub mod oledb;

pub use mongodb::MongoDbProvider;
pub use odbc::OdbcProvider;
pub use oledb::OleDbProvider;
