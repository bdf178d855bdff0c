/// Keys that rotate the camera while held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    Left,
    Right,
    Up,
    Down,
}

/// Held-key state for camera rotation, toggled on key press and release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewControls {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl ViewControls {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key press (`pressed = true`) or release.
    pub fn set(&mut self, key: ViewKey, pressed: bool) {
        match key {
            ViewKey::Left => self.left = pressed,
            ViewKey::Right => self.right = pressed,
            ViewKey::Up => self.up = pressed,
            ViewKey::Down => self.down = pressed,
        }
    }

    /// Releases every key.
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn any_held(&self) -> bool {
        self.left || self.right || self.up || self.down
    }
}
