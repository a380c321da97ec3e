pub mod kv;
pub mod stores;
