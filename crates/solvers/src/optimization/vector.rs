//! Fixed-length vector arithmetic over `[f64; N]`.

/// Returns `x + t * d`.
pub(crate) fn add_scaled<const N: usize>(x: &[f64; N], t: f64, d: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| x[i] + t * d[i])
}

/// Returns `a - b`.
pub(crate) fn sub<const N: usize>(a: &[f64; N], b: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| a[i] - b[i])
}

/// Returns `t * d`.
pub(crate) fn scale<const N: usize>(t: f64, d: &[f64; N]) -> [f64; N] {
    std::array::from_fn(|i| t * d[i])
}

/// Returns the dot product of `a` and `b`.
pub(crate) fn dot<const N: usize>(a: &[f64; N], b: &[f64; N]) -> f64 {
    a.iter().zip(b).map(|(ai, bi)| ai * bi).sum()
}

/// Returns true if every component is exactly zero.
pub(crate) fn is_zero<const N: usize>(d: &[f64; N]) -> bool {
    d.iter().all(|&di| di == 0.0)
}

/// Returns the `N x N` identity as an array of rows.
pub(crate) fn identity<const N: usize>() -> [[f64; N]; N] {
    std::array::from_fn(|i| std::array::from_fn(|j| if i == j { 1.0 } else { 0.0 }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn add_scaled_moves_along_direction() {
        let x = add_scaled(&[1.0, 2.0], 0.5, &[2.0, -4.0]);
        assert_eq!(x, [2.0, 0.0]);
    }

    #[test]
    fn sub_and_scale_compose() {
        let d = sub(&[3.0, 1.0], &[1.0, 1.0]);
        assert_eq!(scale(2.0, &d), [4.0, 0.0]);
        assert_relative_eq!(dot(&d, &[1.5, 7.0]), 3.0);
    }

    #[test]
    fn zero_detection() {
        assert!(is_zero(&[0.0, -0.0]));
        assert!(!is_zero(&[0.0, 1e-300]));
    }

    #[test]
    fn identity_rows_are_unit_vectors() {
        let eye: [[f64; 3]; 3] = identity();
        assert_eq!(eye[1], [0.0, 1.0, 0.0]);
        assert_relative_eq!(dot(&eye[0], &eye[2]), 0.0);
    }
}
