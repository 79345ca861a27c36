pub mod generate;
pub mod merge;
pub mod verify;
