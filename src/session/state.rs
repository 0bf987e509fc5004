//! Lifecycle states shared by every content surface.

/// One UI surface's lifecycle. Surfaces are reusable: from `Loaded` or
/// `Failed`, the next triggering action moves back to `Loading`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> SurfaceState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, SurfaceState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SurfaceState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, SurfaceState::Loaded(_))
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            SurfaceState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            SurfaceState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for SurfaceState<T> {
    fn default() -> Self {
        SurfaceState::Idle
    }
}
