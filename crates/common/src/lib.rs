pub mod hex;
pub mod log;
