#[cfg(feature = "dev")]
pub mod debug;
pub mod pad;
