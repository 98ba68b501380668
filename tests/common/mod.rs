//! Consolidated test utilities for git-shorthand
//!
//! Provides unified helpers for integration tests, focused on real git
//! repository scenarios for reliable testing.

pub mod assertions;
pub mod repository;
