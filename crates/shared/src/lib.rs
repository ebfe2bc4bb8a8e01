pub mod blocks;
pub mod domain;
pub mod error;
pub mod path;
