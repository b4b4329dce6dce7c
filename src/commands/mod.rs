pub mod auth;
pub mod connection;
pub mod report;
pub mod whoami;

pub use auth::handle_auth;
pub use connection::handle_test_connection;
pub use report::handle_report;
pub use whoami::handle_whoami;
