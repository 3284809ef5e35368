//! Page bodies. Each view builds a fresh tree on every navigation.

pub mod code;
pub mod error;
pub mod home;
pub mod info;
pub mod layout;
