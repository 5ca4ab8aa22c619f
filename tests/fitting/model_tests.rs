//! Properties of the 4PL model function and its Jacobian.

use approx::assert_relative_eq;
use dosecurve_rs::{four_pl, jacobian, jacobian_row, FitParams, Param};

fn parameter_sets() -> Vec<FitParams> {
    vec![
        FitParams::new(100.0, 0.0, 10.0, 1.0),
        FitParams::new(0.0, 100.0, 10.0, 1.0),
        FitParams::new(85.0, 12.0, 0.003, 2.5),
        FitParams::new(1.5, -0.5, 250.0, -0.7),
    ]
}

#[test]
fn test_midpoint_at_ic50() {
    for p in parameter_sets() {
        assert_relative_eq!(four_pl(p.ic50, &p), (p.top + p.bottom) / 2.0, epsilon = 1e-12);
    }
}

#[test]
fn test_monotonic_in_concentration() {
    let xs: Vec<f64> = (-40..=40).map(|k| 10f64.powf(k as f64 / 10.0)).collect();

    for p in parameter_sets() {
        let ys: Vec<f64> = xs.iter().map(|&x| four_pl(x, &p)).collect();
        // Direction follows the signs of (top - bottom) and the Hill slope
        let decreasing = (p.top - p.bottom) * p.hill_slope > 0.0;
        for w in ys.windows(2) {
            if decreasing {
                assert!(w[1] <= w[0] + 1e-9);
            } else {
                assert!(w[1] >= w[0] - 1e-9);
            }
        }
    }
}

#[test]
fn test_jacobian_columns_follow_param_order() {
    let p = FitParams::new(100.0, 5.0, 10.0, 1.3);
    let x = [0.5, 5.0, 50.0];
    let jac = jacobian(&x, &p);

    assert_eq!(jac.shape(), &[3, Param::COUNT]);
    for (i, &xi) in x.iter().enumerate() {
        let row = jacobian_row(xi, &p);
        for param in Param::ALL {
            assert_eq!(jac[[i, param.index()]], row[param.index()]);
        }
    }

    // ∂y/∂top + ∂y/∂bottom == 1 everywhere
    for i in 0..x.len() {
        assert_relative_eq!(
            jac[[i, Param::Top.index()]] + jac[[i, Param::Bottom.index()]],
            1.0,
            epsilon = 1e-12
        );
    }
}
