//! Property-based tests for record persistence
