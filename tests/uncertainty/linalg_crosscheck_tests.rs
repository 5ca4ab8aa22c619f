//! Cross-checks of the dense solvers against nalgebra
//!
//! The information matrices checked here are the ones the confidence
//! estimator actually inverts: JᵀJ of a 4PL Jacobian.

use approx::assert_relative_eq;
use dosecurve_rs::uncertainty::information_matrix;
use dosecurve_rs::utils::{invert, solve};
use dosecurve_rs::{jacobian, FitParams, Param};
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::test_helpers::CONCENTRATIONS;

fn to_nalgebra(m: &Array2<f64>) -> DMatrix<f64> {
    DMatrix::from_fn(m.nrows(), m.ncols(), |i, j| m[[i, j]])
}

fn information_for(params: &FitParams) -> Array2<f64> {
    information_matrix(&jacobian(&CONCENTRATIONS, params))
}

#[test]
fn test_invert_matches_nalgebra_on_information_matrices() {
    let cases = [
        FitParams::new(100.0, 0.0, 10.0, 1.0),
        FitParams::new(95.0, 8.0, 3.0, 1.8),
        FitParams::new(10.0, 60.0, 120.0, 0.6),
    ];

    for params in cases {
        let info = information_for(&params);
        let ours = invert(&info).unwrap();
        let reference = to_nalgebra(&info).try_inverse().unwrap();

        for i in 0..Param::COUNT {
            for j in 0..Param::COUNT {
                assert_relative_eq!(
                    ours[[i, j]],
                    reference[(i, j)],
                    epsilon = 1e-9,
                    max_relative = 1e-6
                );
            }
        }
    }
}

#[test]
fn test_solve_matches_nalgebra_on_random_systems() {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);

    for _ in 0..20 {
        // Diagonally dominant, so the system is well conditioned
        let mut a = Array2::<f64>::zeros((4, 4));
        for i in 0..4 {
            for j in 0..4 {
                a[[i, j]] = rng.gen_range(-1.0..1.0);
            }
            a[[i, i]] += 5.0;
        }
        let b: Array1<f64> = (0..4).map(|_| rng.gen_range(-10.0..10.0)).collect();

        let ours = solve(&a, &b);
        let reference = to_nalgebra(&a)
            .lu()
            .solve(&DVector::from_iterator(4, b.iter().copied()))
            .unwrap();

        for i in 0..4 {
            assert_relative_eq!(ours[i], reference[i], epsilon = 1e-10);
        }
    }
}

#[test]
fn test_inverse_times_matrix_is_identity() {
    let info = information_for(&FitParams::new(100.0, 0.0, 10.0, 1.0));
    let inverse = invert(&info).unwrap();
    let product = info.dot(&inverse);

    for i in 0..Param::COUNT {
        for j in 0..Param::COUNT {
            let expected = if i == j { 1.0 } else { 0.0 };
            assert_relative_eq!(product[[i, j]], expected, epsilon = 1e-6);
        }
    }
}

#[test]
fn test_singular_information_matrix() {
    // top == bottom zeroes the IC50 and Hill slope columns
    let info = information_for(&FitParams::new(50.0, 50.0, 10.0, 1.0));
    assert!(invert(&info).is_none());
}
