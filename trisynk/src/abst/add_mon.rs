use std::ops::AddAssign;

// Additive Monoids 

/// Types that can be summed: `default()` is the identity and 
/// `+=` adds a borrowed element in place.
/// 
/// No associativity or commutativity is assumed. 
pub trait AddMon: 
    Sized + 
    Default +                         // identity
    for<'a> AddAssign<&'a Self>       // T += &T
{}

impl<T> AddMon for T where T: 
    Default + 
    for<'a> AddAssign<&'a T>
{}

#[cfg(test)]
mod tests { 
    use std::num::Wrapping;
    use num_bigint::BigInt;
    use num_traits::Zero;
    use super::*;

    #[test]
    fn check_type() {
        fn check<T>() where T: AddMon {}
        check::<i32>();
        check::<i64>();
        check::<i128>();
        check::<f32>();
        check::<f64>();
        check::<Wrapping<u8>>();
        check::<BigInt>();
    }

    #[test]
    fn identity() { 
        fn id<T: AddMon>() -> T { T::default() }
        assert_eq!(id::<i64>(), 0);
        assert_eq!(id::<f64>(), 0.0);
        assert!(id::<BigInt>().is_zero());
    }
}
