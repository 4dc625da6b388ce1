//! Property-based tests for core types and the status resolver.
