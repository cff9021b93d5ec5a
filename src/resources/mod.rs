pub mod drag_session;
pub mod pad_config;
pub mod pad_output;
