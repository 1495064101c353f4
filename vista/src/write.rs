//! The [`Writer`] trait
use crate::{Result, escape::{Flags, escape_into}};

/// Output sink for rendered views.
pub trait Writer {
    /// write a buffer as is
    fn write_str(&mut self, value: &str) -> Result<()>;
}

impl<R> Writer for &mut R where R: Writer + ?Sized {
    fn write_str(&mut self, value: &str) -> Result<()> {
        R::write_str(self, value)
    }
}

impl Writer for Vec<u8> {
    fn write_str(&mut self, value: &str) -> Result<()> {
        self.extend_from_slice(value.as_bytes());
        Ok(())
    }
}

impl Writer for String {
    fn write_str(&mut self, value: &str) -> Result<()> {
        self.push_str(value);
        Ok(())
    }
}

impl Writer for bytes::BytesMut {
    fn write_str(&mut self, value: &str) -> Result<()> {
        bytes::BufMut::put(self, value.as_bytes());
        Ok(())
    }
}

/// Adapter that writes into any [`std::io::Write`].
pub struct IoWriter<W>(pub W);

impl<W> Writer for IoWriter<W> where W: std::io::Write {
    fn write_str(&mut self, value: &str) -> Result<()> {
        self.0.write_all(value.as_bytes())?;
        Ok(())
    }
}

/// Wrap [`Writer`] to escape input.
///
/// Escapes with [`Flags::default`], the same as [`e`][crate::e].
pub struct Escape<W>(pub W);

impl<W> Writer for Escape<W> where W: Writer {
    fn write_str(&mut self, value: &str) -> Result<()> {
        let mut buffer = String::with_capacity(value.len());
        escape_into(&mut buffer, value, Flags::default(), true);
        self.0.write_str(&buffer)
    }
}
