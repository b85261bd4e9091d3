//! Storage layer
//!
//! JSON snapshot of the budget session with atomic writes.

pub mod file_io;
pub mod session;

pub use file_io::{read_json_optional, write_json_atomic};
pub use session::SessionRepository;
