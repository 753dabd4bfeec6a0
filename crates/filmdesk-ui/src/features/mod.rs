//! Feature slices of the admin front end.

pub mod users;
