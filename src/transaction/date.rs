//! Normalizes user-supplied dates into the CSV date-time format.

use time::{
    Date, OffsetDateTime, PrimitiveDateTime,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};

/// The format of the `dateTime` column: `YYYY-MM-DD HH:mm:ss`.
pub const DATE_TIME_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

const ISO_DATE_TIME_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

const DATE_ONLY_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Reformat `input` as `YYYY-MM-DD HH:mm:ss`.
///
/// Accepts the target format itself, the same with a `T` separator, RFC 3339
/// timestamps (the offset is dropped, not converted), and bare dates (which
/// get a midnight time). Anything else is returned unchanged, so an
/// unparseable date ends up in the file verbatim rather than rejecting the
/// request.
pub fn normalize_date_time(input: &str) -> String {
    let parsed = PrimitiveDateTime::parse(input, &DATE_TIME_FORMAT)
        .or_else(|_| PrimitiveDateTime::parse(input, &ISO_DATE_TIME_FORMAT))
        .or_else(|_| {
            OffsetDateTime::parse(input, &Rfc3339)
                .map(|date_time| PrimitiveDateTime::new(date_time.date(), date_time.time()))
        })
        .or_else(|_| Date::parse(input, &DATE_ONLY_FORMAT).map(|date| date.midnight()));

    match parsed {
        Ok(date_time) => date_time
            .format(&DATE_TIME_FORMAT)
            .unwrap_or_else(|_| input.to_owned()),
        Err(_) => input.to_owned(),
    }
}
