//! Business operations. Each takes the storage seam (`&dyn Store` or
//! `&dyn FileStore`) plus already-validated input, so they run unchanged
//! against SQL, the in-memory store, or a temp directory.

pub mod artist;
pub mod casting;
pub mod demo;
pub mod evaluation;
pub mod ranking;
pub mod stats;
pub mod upload;
pub mod user;
