//! Shared support code for the in-crate test modules.
