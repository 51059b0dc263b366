mod writer;

pub use writer::{DEFAULT_TITLE, write};
