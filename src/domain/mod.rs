pub mod catalog;
pub mod phenomenon;
