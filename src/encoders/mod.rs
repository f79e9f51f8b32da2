pub mod algorithms;
pub mod codec;
pub mod tables;

pub use codec::{decode, encode, transform};
