pub mod config;
pub mod error;
pub mod format;
pub mod name;
pub mod pinyin;
pub mod romanize;
pub mod server;
