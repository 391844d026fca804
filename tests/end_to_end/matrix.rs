use assert_approx_eq::assert_approx_eq;

use cute_linalg::{Backing, InverseSettings, LinearAlgebraError, Matrix};

use crate::end_to_end::BACKINGS;
use crate::init_logging;

fn assert_identity(m: &Matrix<f64>) {
    assert!(m.is_square());
    let identity = Matrix::<f64>::identity(m.width());
    for (computed, expected) in m.iter_values().zip(identity.iter_values()) {
        assert_approx_eq!(computed, expected);
    }
}

fn test_matrix(backing: Backing) -> Matrix<f64> {
    Matrix::from_rows(
        vec![
            vec![4f64, -2f64, 0f64, 1f64],
            vec![3f64, 6f64, -1f64, 0f64],
            vec![0f64, 1f64, 5f64, 2f64],
            vec![1f64, 0f64, -3f64, 7f64],
        ],
        backing,
    ).unwrap()
}

#[test]
fn built_by_coordinates() {
    init_logging();

    for backing in BACKINGS {
        let mut m = Matrix::<i32>::with_backing(2, 2, backing);
        m.set(1, 1, 25).unwrap();
        m.set(0, 0, 1).unwrap();
        m.set(0, 1, 2).unwrap();
        m.set(1, 0, 3).unwrap();
        assert_eq!(m.to_string(), "1 3\n2 25\n");

        let t = m.transpose();
        assert_eq!(t.to_string(), "1 2\n3 25\n");
        assert_eq!(t.get(1, 0), Ok(2));
        assert_eq!(t.get(0, 1), Ok(3));
        assert_eq!(t.transpose(), m);
    }
}

#[test]
fn invert_two_by_two() {
    init_logging();

    let expected = Matrix::from_rows(vec![vec![-2f64, 1f64], vec![1.5f64, -0.5f64]], Backing::Dense).unwrap();
    for backing in BACKINGS {
        let m = Matrix::from_rows(vec![vec![1f64, 2f64], vec![3f64, 4f64]], backing).unwrap();

        let inverse = m.inverse().unwrap();
        assert_eq!(inverse, expected);
        assert_eq!(inverse.backing(), backing);
        assert_eq!(inverse.inverse(), Ok(m));
    }
}

#[test]
fn inverse_is_two_sided() {
    init_logging();

    for backing in BACKINGS {
        let m = test_matrix(backing);
        let inverse = m.inverse().unwrap();

        assert_identity(&(&m * &inverse).unwrap());
        assert_identity(&(&inverse * &m).unwrap());
    }
}

#[test]
fn identity_is_neutral() {
    init_logging();

    for backing in BACKINGS {
        let m = test_matrix(backing);
        let identity = Matrix::identity_with_backing(4, backing);

        assert_eq!(&m * &identity, Ok(m.clone()));
        assert_eq!(&identity * &m, Ok(m.clone()));
    }
}

#[test]
fn backings_agree() {
    init_logging();

    let dense = test_matrix(Backing::Dense);
    let sparse = test_matrix(Backing::Sparse);
    assert_eq!(dense, sparse);
    assert!(sparse.stored_len() < dense.stored_len());

    assert_eq!(dense.transpose(), sparse.transpose());
    assert_eq!(&dense + &sparse, &sparse + &dense);
    assert_eq!(&dense * &sparse, &sparse * &dense.to_backing(Backing::Dense));
    assert_eq!(dense.pow_elements(5), sparse.pow_elements(5));
    assert_eq!(dense.pow_elements(-2), sparse.pow_elements(-2));
    assert_eq!(dense.inverse(), sparse.inverse());
    assert_eq!(&dense * 0.5f64, &sparse * 0.5f64);
    assert_eq!(dense.pow_scalar(3f64), sparse.pow_scalar(3f64));
}

#[test]
fn integer_powers() {
    init_logging();

    for backing in BACKINGS {
        let m = test_matrix(backing);

        assert_eq!(m.pow_elements(0), Ok(Matrix::identity(4)));
        assert_eq!(m.pow_elements(1), Ok(m.clone()));
        assert_eq!(m.pow_elements(2), &m * &m);
        assert_eq!(m.pow_elements(3), &(&m * &m).unwrap() * &m);
        assert_identity(&(&m.pow_elements(2).unwrap() * &m.pow_elements(-2).unwrap()).unwrap());
    }
}

#[test]
fn errors() {
    init_logging();

    let m = Matrix::from_rows(vec![vec![1f64, 2f64], vec![2f64, 4f64]], Backing::Sparse).unwrap();
    assert_eq!(&m / 0f64, Err(LinearAlgebraError::DivideByZero));
    assert_eq!(m.inverse(), Err(LinearAlgebraError::Singular { pivot: 1, }));
    assert_eq!(m.get(2, 1), Err(LinearAlgebraError::IndexOutOfRange { index: 4, len: 4, }));

    let wide = Matrix::<f64>::new(3, 2);
    assert_eq!(wide.pow_elements(2), Err(LinearAlgebraError::NotSquare { width: 3, height: 2, }));
    assert!(matches!(&wide * &m, Err(LinearAlgebraError::DimensionMismatch { .. })));
    assert_eq!((&m * &wide).map(|p| (p.width(), p.height())), Ok((3, 2)));

    let nearly_singular = Matrix::from_rows(vec![vec![1f64, 1f64], vec![1f64, 1f64 + 1e-13]], Backing::Dense).unwrap();
    assert!(nearly_singular.inverse().is_ok());
    let settings = InverseSettings::default().with_pivot_tolerance(1e-9);
    assert_eq!(nearly_singular.inverse_with(&settings), Err(LinearAlgebraError::Singular { pivot: 1, }));
}
