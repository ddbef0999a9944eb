//! UI Constants
//!
//! Centralized layout constants for the table and the demo window.

/// Page sizes offered by the rows-per-page selector
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [5, 10, 25, 50, 100];

/// Page size a fresh table starts with
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Height of one body row in pixels, also the unit of filler rows
pub const ROW_HEIGHT: f32 = 53.0;

/// Header row height
pub const HEADER_HEIGHT: f32 = 56.0;

/// Footer (pagination) height
pub const FOOTER_HEIGHT: f32 = 52.0;

/// Table container constraints
pub const TABLE_MAX_HEIGHT: f32 = 440.0;
pub const TABLE_MIN_WIDTH: f32 = 700.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1000.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 640.0;

/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "paged-table.toml";
