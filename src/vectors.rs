//! Vector algebra underneath the rotation conversions.
//!
//! Anything that "looks like" a 3-vector (a flat slice, an array, a tuple, or a row or column
//! [`nalgebra`] matrix) is turned into a [`Vector3`] exactly once, by [`col_vec`]. Past that
//! boundary every function works on the canonical column form.

use crate::error::{Error, Result};
use crate::{Matrix3, Vector3};
use nalgebra::storage::RawStorage;
use nalgebra::{Dim, Matrix, Matrix3xX};

/// A value that can be read as a flat sequence of `f64` components.
///
/// Matrices are read in column-major order, which makes no difference for the 1×3 and 3×1 shapes
/// accepted by [`col_vec`].
pub trait VectorLike {
    /// Number of scalar components.
    fn component_count(&self) -> usize;

    /// The `i`th component. Only called with `i < self.component_count()`.
    fn component(&self, i: usize) -> f64;
}

impl VectorLike for [f64] {
    fn component_count(&self) -> usize {
        self.len()
    }

    fn component(&self, i: usize) -> f64 {
        self[i]
    }
}

impl<const N: usize> VectorLike for [f64; N] {
    fn component_count(&self) -> usize {
        N
    }

    fn component(&self, i: usize) -> f64 {
        self[i]
    }
}

impl VectorLike for Vec<f64> {
    fn component_count(&self) -> usize {
        self.len()
    }

    fn component(&self, i: usize) -> f64 {
        self[i]
    }
}

impl VectorLike for (f64, f64, f64) {
    fn component_count(&self) -> usize {
        3
    }

    fn component(&self, i: usize) -> f64 {
        match i {
            0 => self.0,
            1 => self.1,
            _ => self.2,
        }
    }
}

impl<R, C, S> VectorLike for Matrix<f64, R, C, S>
where
    R: Dim,
    C: Dim,
    S: RawStorage<f64, R, C>,
{
    fn component_count(&self) -> usize {
        self.len()
    }

    fn component(&self, i: usize) -> f64 {
        self[i]
    }
}

/// Canonicalizes a 3-element row, column, or flat sequence into a column [`Vector3`].
///
/// ```
/// use angutils::{col_vec, Vector3};
/// use nalgebra::RowVector3;
///
/// let expected = Vector3::new(1., 2., 3.);
/// assert_eq!(col_vec(&[1., 2., 3.]).unwrap(), expected);
/// assert_eq!(col_vec(&RowVector3::new(1., 2., 3.)).unwrap(), expected);
/// assert!(col_vec(&[1., 2.]).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::Shape`] if `v` does not have exactly three components.
#[doc(alias = "colVec")]
pub fn col_vec<V>(v: &V) -> Result<Vector3>
where
    V: VectorLike + ?Sized,
{
    let found = v.component_count();
    if found != 3 {
        return Err(Error::Shape { expected: 3, found });
    }
    Ok(Vector3::new(v.component(0), v.component(1), v.component(2)))
}

/// Checks that a (possibly dynamically sized) matrix is 3×3 and copies it into a [`Matrix3`].
///
/// # Errors
///
/// Returns [`Error::MatrixShape`] if `m` is any other shape.
pub fn mat3<R, C, S>(m: &Matrix<f64, R, C, S>) -> Result<Matrix3>
where
    R: Dim,
    C: Dim,
    S: RawStorage<f64, R, C>,
{
    let (rows, cols) = m.shape();
    if (rows, cols) != (3, 3) {
        return Err(Error::MatrixShape { rows, cols });
    }
    Ok(Matrix3::from_fn(|i, j| m[(i, j)]))
}

/// Scales `v` to unit length.
///
/// `v` must not be the zero vector; the result would be all NaN.
#[must_use]
pub fn vnorm(v: &Vector3) -> Vector3 {
    v / v.norm()
}

/// The cross-product matrix of `v`, ie, the `S` for which `S * x == v.cross(&x)`.
///
/// ```text
/// |  0  -v3   v2 |
/// |  v3   0  -v1 |
/// | -v2  v1    0 |
/// ```
///
/// `S + Sᵀ` is exactly zero for any finite `v`.
#[must_use]
pub fn skew(v: &Vector3) -> Matrix3 {
    v.cross_matrix()
}

/// Removes from every column of `v` its component along `n`, leaving each column in the plane
/// orthogonal to `n`.
///
/// `n` need not be a unit vector, but must not be zero.
#[doc(alias = "projplane")]
#[must_use]
pub fn proj_plane(v: &Matrix3xX<f64>, n: &Vector3) -> Matrix3xX<f64> {
    let n = vnorm(n);
    v - n * n.tr_mul(v)
}

#[cfg(test)]
mod tests {
    use super::{col_vec, mat3, proj_plane, skew, vnorm, VectorLike};
    use crate::error::Error;
    use crate::{Matrix3, Vector3};
    use approx::assert_relative_eq;
    use nalgebra::{DMatrix, Matrix3xX, RowVector3};
    use quickcheck::{quickcheck, Arbitrary, Gen};
    use rstest::rstest;

    /// A vector with components in [0, 1), like `numpy.random.rand`.
    #[derive(Debug, Clone)]
    struct Unitish(Vector3);

    fn unit_interval(g: &mut Gen) -> f64 {
        f64::from(u32::arbitrary(g)) / (f64::from(u32::MAX) + 1.)
    }

    impl Arbitrary for Unitish {
        fn arbitrary(g: &mut Gen) -> Self {
            Self(Vector3::new(
                unit_interval(g),
                unit_interval(g),
                unit_interval(g),
            ))
        }
    }

    #[test]
    fn col_vec_accepts_every_layout() {
        let expected = Vector3::new(0.25, -1.5, 3.);

        assert_eq!(col_vec(&[0.25, -1.5, 3.]).unwrap(), expected);
        assert_eq!(col_vec(&vec![0.25, -1.5, 3.]).unwrap(), expected);
        assert_eq!(col_vec(&[0.25, -1.5, 3.][..]).unwrap(), expected);
        assert_eq!(col_vec(&(0.25, -1.5, 3.)).unwrap(), expected);
        assert_eq!(col_vec(&RowVector3::new(0.25, -1.5, 3.)).unwrap(), expected);
        assert_eq!(col_vec(&expected).unwrap(), expected);
        assert_eq!(
            col_vec(&DMatrix::from_row_slice(1, 3, &[0.25, -1.5, 3.])).unwrap(),
            expected
        );
        assert_eq!(
            col_vec(&DMatrix::from_column_slice(3, 1, &[0.25, -1.5, 3.])).unwrap(),
            expected
        );
    }

    #[rstest]
    #[case(&[], 0)]
    #[case(&[1., 2.], 2)]
    #[case(&[1., 2., 3., 4.], 4)]
    fn col_vec_rejects_wrong_length(#[case] v: &[f64], #[case] found: usize) {
        assert_eq!(col_vec(v), Err(Error::Shape { expected: 3, found }));
    }

    #[test]
    fn col_vec_rejects_matrices() {
        assert_eq!(
            col_vec(&Matrix3::identity()),
            Err(Error::Shape {
                expected: 3,
                found: 9
            })
        );
    }

    #[test]
    fn tuple_components_are_in_order() {
        let t = (1., 2., 3.);
        assert_eq!(t.component_count(), 3);
        assert_eq!(
            [t.component(0), t.component(1), t.component(2)],
            [1., 2., 3.]
        );
    }

    #[test]
    fn mat3_checks_shape() {
        let m = DMatrix::from_row_slice(3, 3, &[1., 2., 3., 4., 5., 6., 7., 8., 9.]);
        assert_eq!(
            mat3(&m).unwrap(),
            Matrix3::new(1., 2., 3., 4., 5., 6., 7., 8., 9.)
        );

        assert_eq!(
            mat3(&DMatrix::<f64>::zeros(3, 2)),
            Err(Error::MatrixShape { rows: 3, cols: 2 })
        );
        assert_eq!(
            mat3(&DMatrix::<f64>::zeros(1, 9)),
            Err(Error::MatrixShape { rows: 1, cols: 9 })
        );
    }

    #[rstest]
    #[case(Vector3::new(3., 0., 4.), Vector3::new(0.6, 0., 0.8))]
    #[case(Vector3::new(0., -2., 0.), Vector3::new(0., -1., 0.))]
    fn vnorm_known_values(#[case] v: Vector3, #[case] expected: Vector3) {
        assert_relative_eq!(vnorm(&v), expected);
    }

    #[test]
    fn skew_is_cross_product() {
        let v = Vector3::new(1., 2., 3.);
        let x = Vector3::new(-4., 0.5, 2.);
        assert_eq!(skew(&v) * x, v.cross(&x));
        assert_eq!(
            skew(&v),
            Matrix3::new(0., -3., 2., 3., 0., -1., -2., 1., 0.)
        );
    }

    #[test]
    fn proj_plane_of_in_plane_vectors_is_identity() {
        let v = Matrix3xX::from_columns(&[Vector3::new(1., 2., 0.), Vector3::new(-3., 0.5, 0.)]);
        assert_relative_eq!(proj_plane(&v, &Vector3::new(0., 0., 7.)), v);
    }

    quickcheck! {
        fn skew_plus_transpose_is_exactly_zero(v: Unitish) -> () {
            let s = skew(&v.0);
            assert_eq!(s + s.transpose(), Matrix3::zeros());
        }

        fn vnorm_has_unit_length(v: Unitish) -> () {
            // all-zero draws are possible from the generator, but not a valid input
            if v.0.norm() == 0. {
                return;
            }
            assert!((vnorm(&v.0).norm() - 1.).abs() < 1e-15);
        }

        fn proj_plane_is_orthogonal_to_normal(n: Unitish, columns: Vec<Unitish>) -> () {
            if n.0.norm() == 0. || columns.is_empty() {
                return;
            }
            let columns: Vec<Vector3> = columns.into_iter().map(|c| c.0).collect();
            let v = Matrix3xX::from_columns(&columns);
            let normal = vnorm(&n.0);

            let projected = proj_plane(&v, &n.0);

            assert_eq!(projected.ncols(), columns.len());
            for column in projected.column_iter() {
                let residual = column.dot(&normal);
                assert!(residual.abs() < 1e-15, "{residual}");
            }
        }
    }
}
