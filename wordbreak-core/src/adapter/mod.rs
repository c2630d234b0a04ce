//! Buffer adapter: decoding and zero-copy slicing of encoded input

mod buffer;
pub mod encoding;

pub use buffer::TextBuffer;
pub use encoding::{Encoding, MalformedPolicy};
