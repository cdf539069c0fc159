//! Line-level text primitives for scanned book content.

pub mod fragment;
