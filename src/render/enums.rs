use strum_macros::{Display, EnumIter};

/// The different ways to fill a disc
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Display, EnumIter)]
pub enum DiscDrawMode {
    /// Hard edge, a pixel is either inside or not
    Solid,
    /// One pixel wide blended edge
    #[default]
    AntiAliased,
}

impl DiscDrawMode {
    /// The other mode, used by the toggle key
    pub fn toggled(self) -> Self {
        match self {
            DiscDrawMode::Solid => DiscDrawMode::AntiAliased,
            DiscDrawMode::AntiAliased => DiscDrawMode::Solid,
        }
    }
}
