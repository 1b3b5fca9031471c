//! Role repositories.
//!
//! Both stores keep their rows in a [`RoleTable`], which owns the id
//! sequence and the uniqueness rule. They differ only in where the table
//! lives between calls.

mod json_file;
mod memory;
mod table;

pub use json_file::JsonFileRoleRepository;
pub use memory::InMemoryRoleRepository;
