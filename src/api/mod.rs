pub mod error;
pub mod models;
pub mod songs;

pub use error::*;
pub use models::*;
pub use songs::*;
