//! State Management Layer
//!
//! Table state is plain data; the DataTable view owns it and notifies GPUI
//! after each mutation.
//!
//! ```text
//! User Action → TableState method → TableEvent → cx.emit → owner subscription
//! ```

mod pagination;
mod settings;
mod table;

pub use pagination::*;
pub use settings::*;
pub use table::*;
