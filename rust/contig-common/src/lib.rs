//! Common error taxonomy and validation machinery shared by the `contig`
//! collection crates.

pub mod error;
pub mod result;

pub use error::{Error, ErrorKind};
pub use result::Result;
