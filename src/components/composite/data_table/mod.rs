//! DataTable Component
//!
//! A reusable paginated table with a sticky header and a pagination footer.

pub mod data_table;
pub mod pagination;

pub use data_table::{data_table, DataTable};
pub use pagination::Pagination;
