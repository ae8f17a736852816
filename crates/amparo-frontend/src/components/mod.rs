//! Reusable components shared across pages.

pub mod nav;

pub use nav::Nav;
