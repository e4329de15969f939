//! Interface to a [MySQL](https://www.mysql.com/) server for the tuner.

pub(crate) mod server;

pub use self::server::{MySqlServer, MySqlServerBuilder};

/// Host used when none is given.
pub const DEFAULT_HOST: &str = "localhost";

/// Port used when none (or `0`) is given.
pub const DEFAULT_PORT: u16 = 3306;
