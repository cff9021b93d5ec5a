pub mod direction;
pub mod pad;
