//! The [`Display`] trait.
use crate::{Result, Value, Writer};

/// Value that can be written into a view output.
pub trait Display {
    fn display(&self, f: &mut impl Writer) -> Result<()>;
}

impl<R> Display for &R where R: Display + ?Sized {
    fn display(&self, f: &mut impl Writer) -> Result<()> {
        R::display(*self, f)
    }
}

impl<T> Display for Option<T> where T: Display {
    fn display(&self, f: &mut impl Writer) -> Result<()> {
        if let Some(me) = self {
            T::display(me, f)?;
        }
        Ok(())
    }
}

impl<T> Display for Box<T> where T: Display {
    fn display(&self, f: &mut impl Writer) -> Result<()> {
        T::display(self, f)
    }
}

impl Display for char {
    fn display(&self, f: &mut impl Writer) -> Result<()> {
        f.write_str(self.encode_utf8(&mut [0u8;4]))
    }
}

impl Display for str {
    fn display(&self, f: &mut impl Writer) -> Result<()> {
        f.write_str(self)
    }
}

impl Display for String {
    fn display(&self, f: &mut impl Writer) -> Result<()> {
        f.write_str(self)
    }
}

impl Display for bool {
    fn display(&self, f: &mut impl Writer) -> Result<()> {
        f.write_str(if *self { "true" } else { "false" })
    }
}

impl Display for f64 {
    fn display(&self, f: &mut impl Writer) -> Result<()> {
        f.write_str(&self.to_string())
    }
}

/// `Null` and maps write nothing, lists write each item in order.
impl Display for Value {
    fn display(&self, f: &mut impl Writer) -> Result<()> {
        match self {
            Value::Null | Value::Map(_) => Ok(()),
            Value::Bool(b) => b.display(f),
            Value::Int(i) => i.display(f),
            Value::Float(n) => n.display(f),
            Value::String(s) => f.write_str(s),
            Value::List(items) => {
                for item in items.borrow().iter() {
                    item.display(f)?;
                }
                Ok(())
            }
        }
    }
}

macro_rules! render_int {
    ($t:ty) => {
        impl Display for $t {
            fn display(&self, f: &mut impl Writer) -> Result<()> {
                f.write_str(itoa::Buffer::new().format(*self))
            }
        }
    };
}

render_int!(u8);
render_int!(u16);
render_int!(u32);
render_int!(u64);
render_int!(u128);
render_int!(usize);
render_int!(i8);
render_int!(i16);
render_int!(i32);
render_int!(i64);
render_int!(i128);
render_int!(isize);

#[cfg(test)]
mod test {
    use super::*;

    fn show(value: impl Display) -> String {
        let mut out = String::new();
        value.display(&mut out).unwrap();
        out
    }

    #[test]
    fn display_values() {
        assert_eq!(show(Value::Null), "");
        assert_eq!(show(Value::from(42)), "42");
        assert_eq!(show(Value::from(1.5)), "1.5");
        assert_eq!(show(Value::from(true)), "true");
        assert_eq!(show(Value::list(["a", "b"])), "ab");
        assert_eq!(show(Some("x")), "x");
    }
}
