use glam::Vec2;

/// Cursor shape requested by the rig.
///
/// The rig does not own textures or talk to the windowing system; it
/// publishes the glyph it wants and the host maps it to an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CursorGlyph {
    /// Pointer shown while no drag is active.
    #[default]
    Idle,
    /// Shown while panning.
    Move,
    /// Shown while orbiting.
    Rotate,
}

impl CursorGlyph {
    /// Click point in normalized texture coordinates.
    #[must_use]
    pub fn hotspot(self) -> Vec2 {
        match self {
            Self::Idle => Vec2::ZERO,
            Self::Move | Self::Rotate => Vec2::splat(0.5),
        }
    }
}

#[cfg(feature = "viewer")]
impl From<CursorGlyph> for winit::window::CursorIcon {
    fn from(glyph: CursorGlyph) -> Self {
        match glyph {
            CursorGlyph::Idle => Self::Default,
            CursorGlyph::Move => Self::Move,
            CursorGlyph::Rotate => Self::Grabbing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_hotspot_is_top_left() {
        assert_eq!(CursorGlyph::Idle.hotspot(), Vec2::ZERO);
    }

    #[test]
    fn drag_glyphs_are_centered() {
        assert_eq!(CursorGlyph::Move.hotspot(), Vec2::new(0.5, 0.5));
        assert_eq!(CursorGlyph::Rotate.hotspot(), Vec2::new(0.5, 0.5));
    }

    #[cfg(feature = "viewer")]
    #[test]
    fn glyphs_map_to_system_cursors() {
        use winit::window::CursorIcon;

        assert_eq!(CursorIcon::from(CursorGlyph::Idle), CursorIcon::Default);
        assert_eq!(CursorIcon::from(CursorGlyph::Move), CursorIcon::Move);
        assert_eq!(CursorIcon::from(CursorGlyph::Rotate), CursorIcon::Grabbing);
    }
}
