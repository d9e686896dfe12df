//! External scan API clients

pub mod client;
pub mod recommend;
pub mod upload;
