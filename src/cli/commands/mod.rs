pub mod checkpoint;
pub mod config;
pub mod end;
pub mod init;
pub mod list;
pub mod start;
