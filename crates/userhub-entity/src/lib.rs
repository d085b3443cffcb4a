//! # userhub-entity
//!
//! Domain entity models for UserHub. `User` mirrors a row of the `users`
//! table and derives `sqlx::FromRow`; the remaining types describe the
//! data handed to the record store for inserts and updates.

pub mod user;
