pub mod artist;
pub mod demo;
pub mod evaluation;
pub mod user;
