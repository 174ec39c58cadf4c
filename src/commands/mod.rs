pub mod generate;
pub mod list;
pub mod verify;
