//! Embedded word lists
//!
//! Word lists compiled into the binary at build time.

include!(concat!(env!("OUT_DIR"), "/vocabulary.rs"));
include!(concat!(env!("OUT_DIR"), "/answers.rs"));
