pub mod codec;
pub mod config;
pub mod consts;
pub mod distance;
pub mod error;
pub mod optimizer;
pub mod scorer;
pub mod table;
// cmd and reports are binary modules (in main.rs or distinct files).
