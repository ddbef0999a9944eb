//! Typography - Font Sizes

/// Typography constants
pub struct Typography;

impl Typography {
    /// Header and body cells
    pub const TEXT_SM: f32 = 14.0;
}
