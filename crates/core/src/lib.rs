//! Core domain types and store contracts for profilesync.
//!
//! This crate defines the canonical customer record shape, the field and
//! projection vocabulary used by partial reads, and the two capability
//! traits the hybrid access layer is built on:
//!
//! - [`storage::AuthoritativeStore`]: the system of record, always correct
//!   for every field at the instant of read.
//! - [`cache::CacheStore`]: a low-latency secondary store that may lag the
//!   authoritative one and is populated lazily.
//!
//! Nothing in this crate performs I/O; concrete adapters live in the
//! `profilesync` crate.

pub mod cache;
pub mod customer;
pub mod storage;
