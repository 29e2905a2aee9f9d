pub mod attendance;
pub mod backup;
pub mod export;
pub mod grid;
pub mod lists;
pub mod log;
pub mod session;
