pub mod catalog;
pub mod demo;
pub mod search;
