/// Creates a [`StaticVec`](crate::StaticVec) containing the arguments.
///
/// Mirrors `vec!`: either a list of elements, or `[elem; n]` which clones
/// `elem` `n` times. The capacity comes from the surrounding type.
///
/// ```
/// use staticarr::{static_vec, StaticVec};
///
/// let v: StaticVec<u8, 4> = static_vec![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
///
/// let v: StaticVec<&str, 4> = static_vec!["x"; 2];
/// assert_eq!(v, ["x", "x"]);
///
/// let v: StaticVec<u8, 4> = static_vec![];
/// assert!(v.is_empty());
/// ```
///
/// More elements than the capacity panics.
/// ```should_panic
/// use staticarr::{static_vec, StaticVec};
///
/// let v: StaticVec<u8, 2> = static_vec![1, 2, 3]; // Panics!
/// ```
#[macro_export]
macro_rules! static_vec {
    () => { $crate::StaticVec::new() };
    ($elem:expr; $n:expr) => { $crate::StaticVec::from_elem($elem, $n) };
    ($($x:expr),+ $(,)?) => { $crate::StaticVec::from([$($x),+]) };
}
