//! Element types whose bytes feed content hashes.

/// A value that writes a fixed little-endian byte encoding of itself.
///
/// The encoding is the in-memory layout of the type on little-endian
/// targets, so hashes agree with a raw-bytes digest of a contiguous
/// row-major buffer.
pub trait HashElement: Copy {
    /// Bytes per element.
    const WIDTH: usize;

    /// Append this value's bytes to `buf`.
    fn write_le(self, buf: &mut Vec<u8>);
}

macro_rules! le_element {
    ($($t:ty),*) => {
        $(
            impl HashElement for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();

                #[inline]
                fn write_le(self, buf: &mut Vec<u8>) {
                    buf.extend_from_slice(&self.to_le_bytes());
                }
            }
        )*
    };
}

le_element!(f64, f32, i64, i32, u64, u32, u8);

impl HashElement for bool {
    const WIDTH: usize = 1;

    #[inline]
    fn write_le(self, buf: &mut Vec<u8>) {
        buf.push(u8::from(self));
    }
}
