//! Supertodolists - multi-user to-do lists.
//!
//! Users sign up with an email and password, keep lists of items, and share
//! lists with other registered users. Anonymous visitors may keep unowned
//! lists that anyone with the URL can use.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
