//! Custom hooks shared by the pages.

pub mod use_mounted;

pub use use_mounted::use_mounted;
