//! Page components for different routes in the application.

pub mod activities;
pub mod beneficiaries;
pub mod center_detail;
pub mod centers;
pub mod invoices;
pub mod login;
pub mod staff;

pub use activities::*;
pub use beneficiaries::*;
pub use center_detail::*;
pub use centers::*;
pub use invoices::*;
pub use login::*;
pub use staff::*;
