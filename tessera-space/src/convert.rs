//! Vector remapping between two axis conventions.

use crate::system::{AxisLine, CoordinateSystem3D};
use glam::{Mat3, Vec3};

/// Recipe for one target component: read the source component at
/// `source_index` and multiply by `multiplier`.
#[derive(Debug, Clone, Copy)]
struct CompMove {
    source_index: usize,
    multiplier: f32,
}

/// Converts vectors expressed in a source [`CoordinateSystem3D`] to the
/// same physical vectors expressed in a target system.
///
/// The conversion is a signed component permutation (a rotation plus
/// possibly a reflection), so it applies equally to positions and to
/// normals. A converter is immutable once built; share one instance
/// across an entire mesh build.
#[derive(Debug, Clone)]
pub struct SpaceConverter {
    moves: [CompMove; 3],
    flips_handedness: bool,
}

impl SpaceConverter {
    /// Build the converter for a (source, target) pair.
    ///
    /// # Panics
    ///
    /// Panics when either system does not assign right, up and forward
    /// to three distinct axis lines. A non-permutation system has no
    /// meaningful conversion, and silent misconversion is worse than a
    /// crash at integration time.
    pub fn new(source: CoordinateSystem3D, target: CoordinateSystem3D) -> Self {
        assert!(
            source.is_permutation() && target.is_permutation(),
            "coordinate system must assign right/up/forward to three distinct axis lines"
        );

        let moves = [
            comp_move(&source, &target, AxisLine::X),
            comp_move(&source, &target, AxisLine::Y),
            comp_move(&source, &target, AxisLine::Z),
        ];

        let mut converter = SpaceConverter {
            moves,
            flips_handedness: false,
        };
        converter.flips_handedness = !converter.preserves_orientation();
        converter
    }

    /// Rewrite `vec` from the source convention into the target one.
    ///
    /// The input is snapshotted before any component is written: the
    /// permutation may cycle components, so reads must not observe
    /// freshly written values.
    pub fn convert_in_place(&self, vec: &mut Vec3) {
        let snapshot = *vec;
        *vec = Vec3::new(
            snapshot[self.moves[0].source_index] * self.moves[0].multiplier,
            snapshot[self.moves[1].source_index] * self.moves[1].multiplier,
            snapshot[self.moves[2].source_index] * self.moves[2].multiplier,
        );
    }

    /// True when the conversion contains an odd number of reflections.
    ///
    /// Triangle winding computed in the source convention must then be
    /// reversed to stay front-facing under the target convention's
    /// back-face culling.
    pub const fn flips_handedness(&self) -> bool {
        self.flips_handedness
    }

    /// Convert the standard basis and check the determinant sign of the
    /// resulting matrix. A signed permutation without reflection is a
    /// pure rotation with determinant +1; a reflection makes it -1.
    fn preserves_orientation(&self) -> bool {
        let mut basis_x = Vec3::X;
        let mut basis_y = Vec3::Y;
        let mut basis_z = Vec3::Z;
        self.convert_in_place(&mut basis_x);
        self.convert_in_place(&mut basis_y);
        self.convert_in_place(&mut basis_z);

        let det = Mat3::from_cols(basis_x, basis_y, basis_z).determinant();
        // A valid signed permutation always has |det| == 1.
        assert!(det != 0.0, "degenerate conversion basis");
        det > 0.0
    }
}

/// Derive the [`CompMove`] for one target axis line: find the semantic
/// direction the target puts on that line, look up the source axis for
/// the same direction, and combine the two signs.
fn comp_move(
    source: &CoordinateSystem3D,
    target: &CoordinateSystem3D,
    line: AxisLine,
) -> CompMove {
    let (target_axis, direction) = target.direction_on_line(line);
    let source_axis = source.axis(direction);

    CompMove {
        source_index: source_axis.line.index(),
        multiplier: target_axis.sign.factor() * source_axis.sign.factor(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::{Axis, AxisLine, CoordinateSystem3D};

    #[test]
    fn test_identity_when_source_equals_target() {
        let converter =
            SpaceConverter::new(CoordinateSystem3D::Y_UP, CoordinateSystem3D::Y_UP);
        let mut vec = Vec3::new(1.5, -2.25, 3.0);
        converter.convert_in_place(&mut vec);
        assert_eq!(vec, Vec3::new(1.5, -2.25, 3.0));
        assert!(!converter.flips_handedness());
    }

    #[test]
    fn test_single_sign_difference_flips_handedness() {
        // Differs from Y_UP only in the sign of up: one reflection.
        let converter =
            SpaceConverter::new(CoordinateSystem3D::Y_DOWN, CoordinateSystem3D::Y_UP);
        assert!(converter.flips_handedness());

        let mut vec = Vec3::new(1.0, 2.0, 3.0);
        converter.convert_in_place(&mut vec);
        assert_eq!(vec, Vec3::new(1.0, -2.0, 3.0));
    }

    #[test]
    fn test_two_sign_differences_preserve_handedness() {
        let source = CoordinateSystem3D::new(
            Axis::neg(AxisLine::X),
            Axis::neg(AxisLine::Y),
            Axis::neg(AxisLine::Z),
        );
        let converter = SpaceConverter::new(source, CoordinateSystem3D::Y_UP);
        assert!(!converter.flips_handedness());

        let mut vec = Vec3::new(1.0, 2.0, 3.0);
        converter.convert_in_place(&mut vec);
        assert_eq!(vec, Vec3::new(-1.0, -2.0, 3.0));
    }

    #[test]
    fn test_axis_swap_is_a_reflection() {
        // Swapping which lines name right and up is a single transposition.
        let swapped = CoordinateSystem3D::new(
            Axis::pos(AxisLine::Y),
            Axis::pos(AxisLine::X),
            Axis::neg(AxisLine::Z),
        );
        let converter = SpaceConverter::new(swapped, CoordinateSystem3D::Y_UP);
        assert!(converter.flips_handedness());

        let mut vec = Vec3::new(1.0, 2.0, 3.0);
        converter.convert_in_place(&mut vec);
        assert_eq!(vec, Vec3::new(2.0, 1.0, 3.0));
    }

    #[test]
    fn test_cyclic_permutation_aliases_safely() {
        // right on Y, up on Z, forward on -X: a 3-cycle of the lines.
        // Every component is both read and overwritten, which is exactly
        // the case the pre-write snapshot exists for.
        let source = CoordinateSystem3D::new(
            Axis::pos(AxisLine::Y),
            Axis::pos(AxisLine::Z),
            Axis::neg(AxisLine::X),
        );
        let converter = SpaceConverter::new(source, CoordinateSystem3D::Y_UP);
        assert!(!converter.flips_handedness());

        let mut vec = Vec3::new(1.0, 2.0, 3.0);
        converter.convert_in_place(&mut vec);
        // target x (right) reads source right = +Y slot; target y (up)
        // reads source up = +Z slot; target -z (forward) reads source
        // forward = -X slot.
        assert_eq!(vec, Vec3::new(2.0, 3.0, 1.0));
    }

    #[test]
    fn test_round_trip_restores_input() {
        let systems = [
            CoordinateSystem3D::Y_UP,
            CoordinateSystem3D::Y_DOWN,
            CoordinateSystem3D::new(
                Axis::neg(AxisLine::Z),
                Axis::pos(AxisLine::Y),
                Axis::pos(AxisLine::X),
            ),
            CoordinateSystem3D::new(
                Axis::pos(AxisLine::Z),
                Axis::neg(AxisLine::X),
                Axis::pos(AxisLine::Y),
            ),
        ];
        let samples = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.5, 0.0, 0.25),
            Vec3::new(0.0, -1.0, 7.75),
        ];

        for source in systems {
            for target in systems {
                let forward = SpaceConverter::new(source, target);
                let inverse = SpaceConverter::new(target, source);
                for sample in samples {
                    let mut vec = sample;
                    forward.convert_in_place(&mut vec);
                    inverse.convert_in_place(&mut vec);
                    assert_eq!(vec, sample, "{source:?} -> {target:?}");
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "distinct axis lines")]
    fn test_non_permutation_system_panics() {
        let broken = CoordinateSystem3D::new(
            Axis::pos(AxisLine::X),
            Axis::pos(AxisLine::X),
            Axis::neg(AxisLine::Z),
        );
        let _ = SpaceConverter::new(broken, CoordinateSystem3D::Y_UP);
    }
}
