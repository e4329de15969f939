//! # mysqltuner
//!
//! Connection parameters and the live connection to the MySQL server
//! examined by the tuner.
//!
//! ```no_run
//! use mysqltuner::{ErrorLevel, MySqlServer};
//!
//! let mut server = MySqlServer::with_credentials("root", "secret", "127.0.0.1", 3306);
//! server.error_level(ErrorLevel::AlwaysOk);
//!
//! server.open().unwrap();
//! match server.connection() {
//!     Some(_conn) => { /* run advisory queries */ }
//!     None => eprintln!("cannot connect: {}", server.last_error()),
//! }
//! server.close();
//! ```

mod error;
pub mod mysql;

pub use crate::error::{Error, ErrorLevel};
pub use crate::mysql::{MySqlServer, MySqlServerBuilder, DEFAULT_HOST, DEFAULT_PORT};

pub mod prelude {
    //! Re-exports important traits and types.

    pub use crate::error::{Error, ErrorLevel};
    pub use crate::mysql::{MySqlServer, MySqlServerBuilder};
}

/// A typedef of the result returned by many methods.
pub type Result<T, E = crate::error::Error> = std::result::Result<T, E>;
