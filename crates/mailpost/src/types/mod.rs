//! Validated value types that make up a request.

mod address;
mod content;
mod recipients;

pub use address::Address;
pub use content::{Content, TEXT_HTML, TEXT_PLAIN, assemble};
pub use recipients::{MAX_RECIPIENTS, Recipients};
