/// Product of two `f64`s, with the usual IEEE-754 handling of
/// infinities and NaN.
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 { 
    a * b
}
