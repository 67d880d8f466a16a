pub mod import;
pub mod reader;
pub mod verify;
