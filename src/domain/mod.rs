//! Domain - Pure Data Structures
//!
//! Column definitions, row values and table configuration. Nothing here
//! touches a window or an app context.

pub mod column;
pub mod config;
pub mod row;

pub use column::{CellAlign, ColumnDef};
pub use config::{PaginationMode, TableConfig};
pub use row::{CellValue, Row, SortDirection};
