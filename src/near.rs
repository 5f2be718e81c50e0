//! Tolerance comparison for floating point numbers.

/// Signature of a nearness strategy: `(a, b, eps) -> near?`.
///
/// [`Myt`](crate::Myt) holds one of these; [`near`] is the default and
/// [`Myt::set_near`](crate::Myt::set_near) swaps it out.
pub type NearFn = fn(f64, f64, f64) -> bool;

/// Checks if two numbers are "near" to each other. The caller is responsible
/// for a sensible `eps`.
///
/// "near" means `(a - b).abs() < eps`, with these corner cases:
///
///  1. if `a == b` the result is true and `eps` is not consulted (may be NaN)
///  2. `+inf` is near to `+inf` (even if `eps` is NaN; follows from 1.)
///  3. `-inf` is near to `-inf` (even if `eps` is NaN; follows from 1.)
///  4. NaN is not near to anything, not even to NaN
///  5. `eps = +inf` makes any two finite numbers near
///
/// ```
/// use mighty::near;
///
/// assert!(near(1.0, 1.001, 1e-2));
/// assert!(!near(1.0, 1.001, 1e-4));
/// assert!(near(f64::INFINITY, f64::INFINITY, f64::NAN));
/// assert!(!near(f64::NAN, f64::NAN, f64::INFINITY));
/// ```
pub fn near(a: f64, b: f64, eps: f64) -> bool {
    // Also covers equal infinities, whose difference would be NaN.
    if a == b {
        return true;
    }
    (a - b).abs() < eps
}
