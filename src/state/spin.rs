use super::Direction;
use super::Direction::{Back, Down, Front, Left, Right, Up};

/// One of the three mutually orthogonal axes a layer can turn about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationAxis {
    /// About the vertical (y) axis.
    Yaw,
    /// About the left-right (x) axis.
    Pitch,
    /// About the front-back (z) axis.
    Roll,
}

impl RotationAxis {
    pub const ALL: [Self; 3] = [Self::Yaw, Self::Pitch, Self::Roll];
}

/// Relabeling tables, indexed by destination slot, holding the source slot.
///
/// Slot order is `Right, Front, Back, Left, Down, Up`.
const YAW_CW: [Direction; 6] = [Back, Right, Left, Front, Down, Up];
const YAW_CCW: [Direction; 6] = [Front, Left, Right, Back, Down, Up];
const PITCH_CW: [Direction; 6] = [Right, Up, Down, Left, Front, Back];
const PITCH_CCW: [Direction; 6] = [Right, Down, Up, Left, Back, Front];
const ROLL_CW: [Direction; 6] = [Up, Front, Back, Down, Right, Left];
const ROLL_CCW: [Direction; 6] = [Down, Front, Back, Up, Left, Right];

/// A 90° rotation about one axis in one direction.
///
/// The relabeling table says which source slot each destination slot takes its
/// color from. The same rotation drives both facelet relabeling and the motion
/// of positions around a layer, so the two always agree.
///
/// `Pitch` counter-clockwise is the inverse of `Pitch` clockwise. Earlier
/// revisions of this model applied the clockwise pitch table in both
/// directions, which made Red and Orange turns irreversible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spin {
    pub axis: RotationAxis,
    pub clockwise: bool,
}

impl Spin {
    #[must_use]
    pub const fn new(axis: RotationAxis, clockwise: bool) -> Self {
        Self { axis, clockwise }
    }

    /// The spin undoing this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self::new(self.axis, !self.clockwise)
    }

    /// Destination slot → source slot table.
    #[must_use]
    pub const fn table(self) -> &'static [Direction; 6] {
        match (self.axis, self.clockwise) {
            (RotationAxis::Yaw, true) => &YAW_CW,
            (RotationAxis::Yaw, false) => &YAW_CCW,
            (RotationAxis::Pitch, true) => &PITCH_CW,
            (RotationAxis::Pitch, false) => &PITCH_CCW,
            (RotationAxis::Roll, true) => &ROLL_CW,
            (RotationAxis::Roll, false) => &ROLL_CCW,
        }
    }

    /// The slot whose color ends up in `destination`.
    #[must_use]
    pub const fn source_of(self, destination: Direction) -> Direction {
        self.table()[destination.slot()]
    }

    /// The slot that the color currently in `source` moves to.
    #[must_use]
    pub fn destination_of(self, source: Direction) -> Direction {
        let table = self.table();
        Direction::ALL
            .into_iter()
            .find(|d| table[d.slot()] == source)
            .unwrap_or(source)
    }

    /// Rotates an integer vector (e.g. a centered lattice coordinate).
    #[must_use]
    pub fn rotate_vector(self, v: [i8; 3]) -> [i8; 3] {
        let images = [
            self.destination_of(Right).unit(),
            self.destination_of(Up).unit(),
            self.destination_of(Front).unit(),
        ];
        let mut out = [0i8; 3];
        for (component, image) in v.into_iter().zip(images) {
            for (o, i) in out.iter_mut().zip(image) {
                *o += component * i;
            }
        }
        out
    }
}
