/// Create a [`RingBuf`] from a list of elements, or from an element and a
/// count.
///
/// `ringbuf![a, b, c]` builds a buffer whose capacity equals the number of
/// elements; `ringbuf![value; n]` builds a capacity-`n` buffer filled with
/// clones of `value`.
///
/// [`RingBuf`]: crate::RingBuf
#[macro_export]
macro_rules! ringbuf {
    () => {
        $crate::RingBuf::new(0)
    };
    ($value:expr; $count:expr) => {{
        let count = $count;
        let mut buf = $crate::RingBuf::new(count);
        buf.extend(::std::iter::repeat($value).take(count));
        buf
    }};
    ($($value:expr),+ $(,)?) => {{
        let values = [$($value),+];
        let mut buf = $crate::RingBuf::new(values.len());
        buf.extend(values);
        buf
    }};
}
