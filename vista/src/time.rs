use time::{
    format_description::{BorrowedFormatItem, well_known::Rfc2822},
    macros::format_description,
};

use crate::{Display, Writer};

pub use time::{
    Date, Month, OffsetDateTime, PrimitiveDateTime, Time, UtcDateTime, UtcOffset,
    formatting::Formattable,
};

const DATE: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");
const TIME: &[BorrowedFormatItem<'_>] = format_description!("[hour]:[minute]:[second]");
const DATE_TIME: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
const UTC_DATE_TIME: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second] UTC");
const OFFSET: &[BorrowedFormatItem<'_>] =
    format_description!("[offset_hour sign:mandatory]:[offset_minute]");

fmt!(Date, DATE);
fmt!(Time, TIME);
fmt!(PrimitiveDateTime, DATE_TIME);
fmt!(UtcDateTime, UTC_DATE_TIME);
fmt!(UtcOffset, OFFSET);
fmt!(OffsetDateTime, &Rfc2822);

macro_rules! fmt {
    ($ty:ty, $format:expr) => {
        impl Display for $ty {
            fn display(&self, f: &mut impl Writer) -> crate::Result<()> {
                let formatted = self
                    .format($format)
                    .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;
                f.write_str(&formatted)
            }
        }
    };
}

pub(crate) use fmt;
