mod command_result;
pub mod generate;
pub mod helper;
pub mod list;

pub use command_result::*;
