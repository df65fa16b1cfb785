//! Output mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Show both report sections and status messages.
    #[default]
    Normal,
    /// Show only missing variables and errors.
    Quiet,
    /// Show nothing except errors.
    Silent,
}

impl OutputMode {
    /// Check if this mode shows status messages and the missing section.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Silent)
    }

    /// Check if this mode shows the optional section and success messages.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Normal)
    }
}
