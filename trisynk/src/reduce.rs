use log::trace;
use crate::AddMon;

/// Sums the borrowed sequence `seq` by folding it onto `T::default()`
/// from the left, one `+=` per element.
///
/// Only iteration order matters, so any borrowed container works.
/// Overflow and other failures are those of `T`'s own `+=`.
///
/// ```
/// use trisynk::reduce_sum;
///
/// assert_eq!(reduce_sum(&[1, 2, 3, 4]), 10);
/// assert_eq!(reduce_sum(&[1.5, 2.5]), 4.0);
/// assert_eq!(reduce_sum::<i32, _>(&[]), 0);
/// ```
pub fn reduce_sum<'a, T, I>(seq: I) -> T
where
    T: AddMon + 'a,
    I: IntoIterator<Item = &'a T>
{
    let itr = seq.into_iter();
    trace!("reduce_sum: {:?} elements ({}).", itr.size_hint(), std::any::type_name::<T>());

    itr.fold(T::default(), |mut res, a| {
        res += a;
        res
    })
}
