//! Mocks for the harness seams.
