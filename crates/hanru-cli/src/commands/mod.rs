pub mod config_ops;
pub mod console;
pub mod convert_ops;
