//! Property-based tests for carousel paging.
