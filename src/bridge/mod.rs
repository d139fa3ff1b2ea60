//! # Bridge
//!
//! Bridges to third-party storage engines

pub mod leveldb;
