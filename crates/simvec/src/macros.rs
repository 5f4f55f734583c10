//! Literal construction.

/// Build a [`SimpleVector`](crate::SimpleVector) from a literal list.
///
/// Mirrors `vec!`: `simple_vector![a, b, c]` moves the values in order and
/// `simple_vector![value; n]` repeats a cloned value. In both forms
/// `len() == capacity()`.
///
/// ```
/// use simvec::simple_vector;
///
/// let v = simple_vector![1, 2, 3];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.capacity(), 3);
///
/// let zeros = simple_vector![0u8; 4];
/// assert_eq!(zeros.as_slice(), &[0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! simple_vector {
    () => {
        $crate::SimpleVector::new()
    };
    ($value:expr; $n:expr) => {
        $crate::SimpleVector::from_elem($n, $value)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::SimpleVector::from([$($value),+])
    };
}
