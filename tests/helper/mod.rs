#![allow(dead_code)]

pub mod feed;
pub mod messages;

#[allow(unused_imports)]
pub use feed::*;
#[allow(unused_imports)]
pub use messages::*;
