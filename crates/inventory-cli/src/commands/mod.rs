//! Command implementations.

pub mod categories;
pub mod items;
pub mod login;
pub mod logout;
pub mod register;
pub mod whoami;
