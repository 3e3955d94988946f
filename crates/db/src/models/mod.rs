//! Row structs read back from the database.

pub mod product;
