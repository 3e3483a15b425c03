//! Driven adapters: the reqwest REST clients and the snapshot store.

pub mod http;
pub mod storage;
