use crate::error::{Error, Result};
use crate::Vector3;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the three body axes, numbered 1 through 3 as is customary for Euler sequences.
///
/// Integer indices become an `Axis` through [`TryFrom<u8>`], which is where out-of-range indices
/// are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub enum Axis {
    X = 1,
    Y = 2,
    Z = 3,
}

impl Axis {
    /// Zero-based index into vector and matrix components.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize - 1
    }

    /// The standard basis vector along this axis.
    #[must_use]
    pub fn unit_vector(self) -> Vector3 {
        let mut v = Vector3::zeros();
        v[self.index()] = 1.;
        v
    }
}

impl TryFrom<u8> for Axis {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Axis::X),
            2 => Ok(Axis::Y),
            3 => Ok(Axis::Z),
            other => Err(Error::InvalidAxis(other)),
        }
    }
}

impl From<Axis> for u8 {
    fn from(axis: Axis) -> Self {
        axis as u8
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Whether Euler angles describe rotations about the axes of the rotating body or about the
/// fixed axes of the space it rotates in.
///
/// - [`Body`](Convention::Body) (intrinsic): each rotation is about an axis of the frame produced
///   by the previous ones. The DCM is `R(s₃, a₃) · R(s₂, a₂) · R(s₁, a₁)`.
/// - [`Space`](Convention::Space) (extrinsic): each rotation is about a fixed axis. The DCM is
///   `R(s₁, a₁) · R(s₂, a₂) · R(s₃, a₃)`.
///
/// Here `R` is [`rot_mat`](crate::rot_mat) and `sᵢ`/`aᵢ` are the sequence's axes and angles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Convention {
    #[default]
    Body,
    Space,
}

/// The axes of three successive rotations, such as 3-1-3 ("classic" Euler) or 3-2-1 (yaw, pitch,
/// roll).
///
/// The middle axis must differ from both of its neighbours, otherwise two consecutive rotations
/// collapse into one and the sequence cannot reach every orientation. The first and last axes may
/// coincide ([proper Euler angles]) or not ([Tait-Bryan angles]).
///
/// ```
/// use angutils::{Axis, EulerSequence};
///
/// let zxz = EulerSequence::new(Axis::Z, Axis::X, Axis::Z).unwrap();
/// assert_eq!(EulerSequence::try_from([3, 1, 3]).unwrap(), zxz);
/// assert!(zxz.is_proper());
/// assert_eq!(zxz.to_string(), "3-1-3");
///
/// assert!(EulerSequence::try_from([3, 3, 1]).is_err());
/// ```
///
/// [proper Euler angles]: https://en.wikipedia.org/wiki/Euler_angles#Proper_Euler_angles
/// [Tait-Bryan angles]: https://en.wikipedia.org/wiki/Euler_angles#Tait%E2%80%93Bryan_angles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[u8; 3]", into = "[u8; 3]"))]
pub struct EulerSequence {
    axes: [Axis; 3],
}

impl EulerSequence {
    /// Every valid sequence: the six proper Euler ones followed by the six Tait-Bryan ones.
    pub const ALL: [EulerSequence; 12] = {
        use Axis::{X, Y, Z};
        [
            Self::new_unchecked(X, Y, X),
            Self::new_unchecked(X, Z, X),
            Self::new_unchecked(Y, X, Y),
            Self::new_unchecked(Y, Z, Y),
            Self::new_unchecked(Z, X, Z),
            Self::new_unchecked(Z, Y, Z),
            Self::new_unchecked(X, Y, Z),
            Self::new_unchecked(X, Z, Y),
            Self::new_unchecked(Y, X, Z),
            Self::new_unchecked(Y, Z, X),
            Self::new_unchecked(Z, X, Y),
            Self::new_unchecked(Z, Y, X),
        ]
    };

    /// Constructs a sequence that rotates about `first`, then `second`, then `third`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DegenerateSequence`] if `second` equals `first` or `third`.
    pub fn new(first: Axis, second: Axis, third: Axis) -> Result<Self> {
        if second == first || second == third {
            return Err(Error::DegenerateSequence([
                first.into(),
                second.into(),
                third.into(),
            ]));
        }
        Ok(Self::new_unchecked(first, second, third))
    }

    const fn new_unchecked(first: Axis, second: Axis, third: Axis) -> Self {
        Self {
            axes: [first, second, third],
        }
    }

    /// The three axes in the order their rotations are applied.
    #[must_use]
    pub fn axes(&self) -> [Axis; 3] {
        self.axes
    }

    /// True when the first and last axes coincide (eg, 3-1-3), false for Tait-Bryan sequences
    /// (eg, 3-2-1).
    #[must_use]
    pub fn is_proper(&self) -> bool {
        self.axes[0] == self.axes[2]
    }
}

impl TryFrom<[u8; 3]> for EulerSequence {
    type Error = Error;

    fn try_from([first, second, third]: [u8; 3]) -> Result<Self> {
        Self::new(first.try_into()?, second.try_into()?, third.try_into()?)
    }
}

impl From<EulerSequence> for [u8; 3] {
    fn from(sequence: EulerSequence) -> Self {
        sequence.axes.map(u8::from)
    }
}

impl Display for EulerSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [first, second, third] = self.axes;
        write!(f, "{first}-{second}-{third}")
    }
}

#[cfg(test)]
mod tests {
    use super::{Axis, Convention, EulerSequence};
    use crate::error::Error;
    use crate::Vector3;
    use rstest::rstest;

    #[rstest]
    #[case(1, Axis::X)]
    #[case(2, Axis::Y)]
    #[case(3, Axis::Z)]
    fn axis_from_index(#[case] index: u8, #[case] axis: Axis) {
        assert_eq!(Axis::try_from(index), Ok(axis));
        assert_eq!(u8::from(axis), index);
        assert_eq!(axis.index(), usize::from(index) - 1);
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    #[case(255)]
    fn axis_rejects_out_of_range(#[case] index: u8) {
        assert_eq!(Axis::try_from(index), Err(Error::InvalidAxis(index)));
    }

    #[test]
    fn unit_vectors() {
        assert_eq!(Axis::X.unit_vector(), Vector3::x());
        assert_eq!(Axis::Y.unit_vector(), Vector3::y());
        assert_eq!(Axis::Z.unit_vector(), Vector3::z());
    }

    #[rstest]
    #[case([1, 1, 2])]
    #[case([2, 3, 3])]
    #[case([3, 3, 3])]
    fn degenerate_sequences_are_rejected(#[case] axes: [u8; 3]) {
        assert_eq!(
            EulerSequence::try_from(axes),
            Err(Error::DegenerateSequence(axes))
        );
    }

    #[test]
    fn sequence_with_bad_axis_reports_the_axis() {
        assert_eq!(
            EulerSequence::try_from([3, 0, 3]),
            Err(Error::InvalidAxis(0))
        );
    }

    #[test]
    fn all_sequences_are_valid_and_distinct() {
        for (i, sequence) in EulerSequence::ALL.iter().enumerate() {
            let [first, second, third] = sequence.axes();
            assert_eq!(EulerSequence::new(first, second, third), Ok(*sequence));
            assert_eq!(sequence.is_proper(), i < 6, "{sequence}");
            assert!(!EulerSequence::ALL[..i].contains(sequence));
        }
    }

    #[test]
    fn display() {
        insta::assert_snapshot!(EulerSequence::try_from([3, 2, 1]).unwrap(), @"3-2-1");
        insta::assert_snapshot!(Axis::Y, @"2");
    }

    #[test]
    fn body_is_default() {
        assert_eq!(Convention::default(), Convention::Body);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn sequence_serde() {
        let sequence = EulerSequence::try_from([3, 1, 3]).unwrap();

        let ser = serde_yaml::to_string(&sequence).unwrap();
        assert_eq!(ser, "- 3\n- 1\n- 3\n");

        let de = serde_yaml::from_str::<EulerSequence>(&ser).unwrap();
        assert_eq!(sequence, de);

        assert!(serde_yaml::from_str::<EulerSequence>("[3, 3, 1]").is_err());
        assert!(serde_yaml::from_str::<Axis>("4").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn convention_serde() {
        let ser = serde_yaml::to_string(&Convention::Space).unwrap();
        let de = serde_yaml::from_str::<Convention>(&ser).unwrap();
        assert_eq!(de, Convention::Space);
    }
}
