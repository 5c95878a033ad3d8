// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: checked wrappers and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Checked values** (`ValidatedFragments`, `verify_accessor_set`) that prove a
//!    chunk plan or a generated accessor set is well-formed, returning an
//!    `InvariantError` otherwise. `litsplit generate --verify` runs these on every
//!    declaration.
//!
//! 2. **Runtime contracts** that panic in debug builds when the codec breaks one of
//!    its own postconditions. Free in release, but catch bugs while tests run.

mod types;
pub mod contracts;

pub use types::*;
