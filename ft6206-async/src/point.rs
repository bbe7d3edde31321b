/// A single touch sample as handed to applications.
///
/// `z` is `1` while the slot is touched and `0` otherwise. It carries no
/// pressure information.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchPoint {
    /// The x-coordinate of the touch point.
    pub x: i16,
    /// The y-coordinate of the touch point.
    pub y: i16,
    /// Touch state.
    pub z: i16,
}

impl TouchPoint {
    /// The "no touch" sentinel.
    pub const NONE: Self = Self::new(0, 0, 0);

    pub const fn new(x: i16, y: i16, z: i16) -> Self {
        Self { x, y, z }
    }

    pub fn is_touched(&self) -> bool {
        self.z != 0
    }
}
