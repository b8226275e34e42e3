mod artist;
mod casting;
mod common;
mod evaluation;
mod stats;
mod user;
