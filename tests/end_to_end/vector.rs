use cute_linalg::{Backing, BackingVector, DenseVector, LinearAlgebraError, SparseVector, Vector};

use crate::end_to_end::BACKINGS;
use crate::init_logging;

#[test]
fn dot_product_and_add() {
    init_logging();

    let mut v1 = SparseVector::new(2);
    v1.set(0, 1).unwrap();
    v1.set(1, 2).unwrap();
    let mut v2 = SparseVector::new(2);
    v2.set(0, 3).unwrap();
    v2.set(1, 4).unwrap();

    assert_eq!(v1.dot_product(&v2), Ok(11));

    v1.add(&v2).unwrap();
    assert_eq!(v1.get(0), Ok(4));
    assert_eq!(v1.get(1), Ok(6));
    assert_eq!(v1.to_string(), "4 6");
    // Operand is not changed
    assert_eq!(v2, SparseVector::from_values(vec![3, 4]));
}

#[test]
fn mixed_backings() {
    init_logging();

    let dense = DenseVector::from_values(vec![1.5f64, 0f64, -2f64]);
    let sparse = [1.5f64, 0f64, -2f64].into_iter().collect::<SparseVector<_>>();

    assert_eq!(dense.dot_product(&sparse), sparse.dot_product(&dense));
    assert_eq!(dense.dot_product(&sparse), Ok(6.25));
    assert_eq!(dense.stored_len(), 3);
    assert_eq!(sparse.stored_len(), 2);
}

#[test]
fn same_results_for_both_backings() {
    init_logging();

    let results = BACKINGS.map(|backing| {
        let mut v = BackingVector::with_backing(5, backing);
        v.set(1, 3).unwrap();
        v.set(4, -2).unwrap();
        v.mult_scalar(4);
        v.add_scalar(-1);
        v.pow_scalar(2).unwrap();
        v.add(&DenseVector::from_values(vec![1, 1, 1, 1, 1])).unwrap();
        v
    });

    assert_eq!(results[0], results[1]);
    assert_eq!(results[0].to_string(), "2 122 2 2 82");
}

#[test]
fn errors_leave_vectors_unchanged() {
    init_logging();

    for backing in BACKINGS {
        let mut v = BackingVector::from_values_with_backing(vec![2, 0, 4], backing);

        assert_eq!(v.div_scalar(0), Err(LinearAlgebraError::DivideByZero));
        assert_eq!(v.get(3), Err(LinearAlgebraError::IndexOutOfRange { index: 3, len: 3, }));
        assert!(v.add(&SparseVector::<i32>::new(2)).is_err());

        assert_eq!(v, BackingVector::from_values_with_backing(vec![2, 0, 4], Backing::Dense));
    }
}
