//! Request guards for the private API.
//!
//! - `auth` - Encrypted cookie handling and the `CurrentUser` extractor
//! - `permission` - Route authorization against the caller's role permissions

pub mod auth;
pub mod permission;

#[cfg(test)]
mod test;
