pub mod artist;
pub mod casting;
pub mod demo;
pub mod evaluation;
pub mod shared;
pub mod stats;
pub mod upload;
pub mod user;
