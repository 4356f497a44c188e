//! Plain text rendering of a sequence, used by the demo binary.

use std::fmt;
use std::io;

/// Renders every element followed by a single space, then a line break.
///
/// `Listing(&[38, 27, 43])` displays as `"38 27 43 \n"`.
pub struct Listing<'a, T>(pub &'a [T]);

impl<T: fmt::Display> fmt::Display for Listing<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for val in self.0 {
            write!(f, "{val} ")?;
        }

        writeln!(f)
    }
}

pub fn write_listing<W, T>(mut writer: W, v: &[T]) -> io::Result<()>
where
    W: io::Write,
    T: fmt::Display,
{
    write!(writer, "{}", Listing(v))
}
