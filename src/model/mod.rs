pub mod frame;
pub mod structure;
