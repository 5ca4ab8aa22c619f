//! Two-tailed Student-t critical values for 95% intervals.
//!
//! Only `alpha = 0.05` is tabulated. Between table entries the value is
//! linearly interpolated; beyond 120 degrees of freedom, and for any other
//! alpha, the normal quantile 1.96 is used.

/// Normal approximation used outside the table.
pub const NORMAL_Z_975: f64 = 1.96;

/// `(dof, t)` pairs for `alpha = 0.05`, ascending by dof.
const T_975: [(usize, f64); 17] = [
    (1, 12.706),
    (2, 4.303),
    (3, 3.182),
    (4, 2.776),
    (5, 2.571),
    (6, 2.447),
    (7, 2.365),
    (8, 2.306),
    (9, 2.262),
    (10, 2.228),
    (15, 2.131),
    (20, 2.086),
    (25, 2.060),
    (30, 2.042),
    (40, 2.021),
    (60, 2.000),
    (120, 1.980),
];

/// Critical t value for a two-tailed interval with `dof` degrees of freedom.
///
/// `dof == 0` has no quantile and maps to the first table entry; interval
/// estimation returns before asking for it.
pub fn t_critical(dof: usize, alpha: f64) -> f64 {
    if alpha != 0.05 {
        return NORMAL_Z_975;
    }
    if dof > 120 {
        return NORMAL_Z_975;
    }

    let mut prev = T_975[0];
    for &(key, value) in T_975.iter() {
        if dof == key {
            return value;
        }
        if dof < key {
            if dof <= prev.0 {
                return prev.1;
            }
            let frac = (dof - prev.0) as f64 / (key - prev.0) as f64;
            return prev.1 * (1.0 - frac) + value * frac;
        }
        prev = (key, value);
    }

    NORMAL_Z_975
}
