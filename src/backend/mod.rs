pub mod database;
pub mod error;
pub mod filemanager;
pub mod music;
pub mod settings;
pub mod sql;
