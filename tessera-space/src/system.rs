//! Named axis conventions for 3D coordinate systems.

/// One of the three component slots of a 3D vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisLine {
    X,
    Y,
    Z,
}

impl AxisLine {
    /// Component index of this line within a vector (0, 1 or 2).
    pub const fn index(self) -> usize {
        match self {
            AxisLine::X => 0,
            AxisLine::Y => 1,
            AxisLine::Z => 2,
        }
    }
}

/// Direction along an axis line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Multiplier for this sign: `+1.0` or `-1.0`.
    pub const fn factor(self) -> f32 {
        match self {
            Sign::Positive => 1.0,
            Sign::Negative => -1.0,
        }
    }
}

/// An oriented axis: which component slot a physical direction occupies
/// and whether it points positively or negatively along that slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
    pub line: AxisLine,
    pub sign: Sign,
}

impl Axis {
    /// Axis pointing along the positive direction of `line`.
    pub const fn pos(line: AxisLine) -> Self {
        Axis {
            line,
            sign: Sign::Positive,
        }
    }

    /// Axis pointing along the negative direction of `line`.
    pub const fn neg(line: AxisLine) -> Self {
        Axis {
            line,
            sign: Sign::Negative,
        }
    }
}

/// The semantic directions of an observer at the origin looking along
/// forward. Right is always the physical right regardless of which axis
/// names it; likewise up and forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceDirection {
    Right,
    Up,
    Forward,
}

/// Names the axes a coordinate convention assigns to the physical
/// directions right, up and forward, as seen by an observer at the
/// origin looking along forward.
///
/// The three axis lines must form a permutation of {X, Y, Z}: no two
/// directions may share a component slot. This is a caller precondition;
/// [`SpaceConverter::new`](crate::SpaceConverter::new) asserts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateSystem3D {
    pub right: Axis,
    pub up: Axis,
    pub forward: Axis,
}

impl CoordinateSystem3D {
    /// GL-style convention: right is +X, up is +Y, forward is -Z.
    pub const Y_UP: Self = CoordinateSystem3D {
        right: Axis::pos(AxisLine::X),
        up: Axis::pos(AxisLine::Y),
        forward: Axis::neg(AxisLine::Z),
    };

    /// Y-down convention common in exported assets: right is +X,
    /// up is -Y, forward is -Z.
    pub const Y_DOWN: Self = CoordinateSystem3D {
        right: Axis::pos(AxisLine::X),
        up: Axis::neg(AxisLine::Y),
        forward: Axis::neg(AxisLine::Z),
    };

    pub const fn new(right: Axis, up: Axis, forward: Axis) -> Self {
        CoordinateSystem3D { right, up, forward }
    }

    /// Axis this system assigns to a semantic direction.
    pub const fn axis(&self, direction: SpaceDirection) -> Axis {
        match direction {
            SpaceDirection::Right => self.right,
            SpaceDirection::Up => self.up,
            SpaceDirection::Forward => self.forward,
        }
    }

    /// Which semantic direction this system puts on the given axis line,
    /// together with that direction's axis.
    pub fn direction_on_line(&self, line: AxisLine) -> (Axis, SpaceDirection) {
        if self.right.line == line {
            (self.right, SpaceDirection::Right)
        } else if self.forward.line == line {
            (self.forward, SpaceDirection::Forward)
        } else {
            (self.up, SpaceDirection::Up)
        }
    }

    /// True when right, up and forward occupy three distinct axis lines.
    pub fn is_permutation(&self) -> bool {
        self.right.line != self.up.line
            && self.right.line != self.forward.line
            && self.up.line != self.forward.line
    }
}
