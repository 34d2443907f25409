use time::{Date, Duration, format_description::BorrowedFormatItem, macros::format_description};

const DAY_KEY: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Sunday on or before `date`. Weeks start on Sunday.
pub fn week_start(date: Date) -> Date {
    let offset = date.weekday().number_days_from_sunday();
    date.saturating_sub(Duration::days(offset.into()))
}

pub fn week_days(start: Date) -> Vec<Date> {
    (0..7)
        .map(|i| start.saturating_add(Duration::days(i)))
        .collect()
}

pub fn week_end(start: Date) -> Date {
    start.saturating_add(Duration::days(7))
}

/// Key used for a day in a meal plan (`YYYY-MM-DD`).
pub fn day_key(date: Date) -> crate::Result<String> {
    Ok(date.format(DAY_KEY)?)
}

pub fn parse_day_key(value: &str) -> crate::Result<Date> {
    Ok(Date::parse(value.trim(), DAY_KEY)?)
}

pub fn week_list_name(start: Date) -> String {
    format!(
        "Lista da Semana - {:02}/{:02}",
        start.day(),
        u8::from(start.month())
    )
}

pub fn blank_list_name(date: Date) -> String {
    format!(
        "Lista {:02}/{:02}/{:04}",
        date.day(),
        u8::from(date.month()),
        date.year()
    )
}
