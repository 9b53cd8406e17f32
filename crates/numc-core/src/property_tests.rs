//! Property-based tests for tensor operations
//!
//! This module uses proptest to check algebraic identities of the tensor
//! engine across randomly generated shapes and values.

#[cfg(test)]
mod tests {
    use crate::{Tensor, TensorError};
    use proptest::prelude::*;

    // Shapes of rank 1-4 with small extents
    fn shape_strategy() -> impl Strategy<Value = Vec<usize>> {
        prop::collection::vec(1usize..6, 1..=4)
    }

    // Square matrix with entries in [-10, 10]
    fn square_strategy() -> impl Strategy<Value = (usize, Vec<f64>)> {
        (1usize..6).prop_flat_map(|n| (Just(n), prop::collection::vec(-10.0f64..10.0, n * n)))
    }

    // Boost the diagonal so every row dominates; such matrices are never singular
    fn diagonally_dominant(n: usize, mut data: Vec<f64>) -> Tensor<f64> {
        for r in 0..n {
            let off: f64 = (0..n)
                .filter(|&c| c != r)
                .map(|c| data[r * n + c].abs())
                .sum();
            data[r * n + r] = off + 1.0 + data[r * n + r].abs();
        }
        Tensor::from_vec(data, &[n, n]).unwrap()
    }

    #[test]
    fn test_proptest_smoke() {
        let tensor = Tensor::<f64>::zeros(&[2, 3]);
        assert_eq!(tensor.shape(), &[2, 3]);
    }

    proptest! {
        #[test]
        fn prop_offsets_are_unique_and_in_bounds(shape in shape_strategy()) {
            let tensor = Tensor::<f64>::zeros(&shape);
            let mut seen = vec![false; tensor.len()];

            let mut index = vec![0usize; shape.len()];
            loop {
                let flat = tensor.offset(&index).unwrap();
                prop_assert!(flat < tensor.len());
                prop_assert!(!seen[flat]);
                seen[flat] = true;

                // Advance the odometer, last axis fastest
                let mut axis = shape.len();
                while axis > 0 {
                    axis -= 1;
                    index[axis] += 1;
                    if index[axis] < shape[axis] {
                        break;
                    }
                    index[axis] = 0;
                }
                if index.iter().all(|&i| i == 0) {
                    break;
                }
            }
            prop_assert!(seen.iter().all(|&s| s));
        }

        #[test]
        fn prop_out_of_range_axis_rejected(shape in shape_strategy(), axis in 0usize..4) {
            let tensor = Tensor::<f64>::zeros(&shape);
            let axis = axis % shape.len();
            let mut index = vec![0usize; shape.len()];
            index[axis] = shape[axis];

            let is_out_of_range = matches!(
                tensor.get(&index),
                Err(TensorError::IndexOutOfRange { .. })
            );
            prop_assert!(is_out_of_range);
        }

        #[test]
        fn prop_from_vec_requires_exact_size(shape in shape_strategy(), extra in 1usize..4) {
            let n: usize = shape.iter().product();
            prop_assert!(Tensor::from_vec(vec![0.0f64; n], &shape).is_ok());

            let is_size_mismatch = matches!(
                Tensor::from_vec(vec![0.0f64; n + extra], &shape),
                Err(TensorError::SizeMismatch { .. })
            );
            prop_assert!(is_size_mismatch);
        }

        #[test]
        fn prop_add_then_sub_restores(
            shape in shape_strategy(),
            seed in prop::collection::vec(-100.0f64..100.0, 1..=8),
        ) {
            let n: usize = shape.iter().product();
            let a = Tensor::from_fn(&shape, |idx| seed[idx.iter().sum::<usize>() % seed.len()]);
            let b = Tensor::from_vec((0..n).map(|i| i as f64 * 0.5).collect(), &shape).unwrap();

            let restored = a.add(&b).unwrap().sub(&b).unwrap();
            prop_assert!(restored.approx_eq(&a, 1e-9));
        }

        #[test]
        fn prop_addition_commutes(shape in shape_strategy(), scalar in -5.0f64..5.0) {
            let a = Tensor::from_fn(&shape, |idx| idx.iter().sum::<usize>() as f64 * scalar);
            let b = Tensor::from_fn(&shape, |idx| idx.len() as f64 - scalar);

            prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
        }

        #[test]
        fn prop_identity_is_neutral_for_matmul((n, data) in square_strategy()) {
            let a = Tensor::from_vec(data, &[n, n]).unwrap();
            let eye = Tensor::<f64>::eye(n);

            prop_assert_eq!(a.matmul(&eye).unwrap(), a.clone());
            prop_assert_eq!(eye.matmul(&a).unwrap(), a);
        }

        #[test]
        fn prop_inverse_roundtrip((n, data) in square_strategy()) {
            let a = diagonally_dominant(n, data);
            let inv = a.inverse().unwrap();
            let eye = Tensor::<f64>::eye(n);

            prop_assert!(a.matmul(&inv).unwrap().approx_eq(&eye, 1e-8));
            prop_assert!(inv.matmul(&a).unwrap().approx_eq(&eye, 1e-8));
        }

        #[test]
        fn prop_inverse_does_not_mutate_input((n, data) in square_strategy()) {
            let a = diagonally_dominant(n, data);
            let before = a.clone();
            let _ = a.inverse().unwrap();
            prop_assert_eq!(a, before);
        }

        #[test]
        fn prop_scale_then_divide_restores(shape in shape_strategy(), s in 0.5f64..4.0) {
            let a = Tensor::from_fn(&shape, |idx| idx.iter().map(|&i| i as f64).sum::<f64>() - 1.0);
            let back = a.scale(s).div_scalar(s).unwrap();
            prop_assert!(back.approx_eq(&a, 1e-12));
        }
    }
}
