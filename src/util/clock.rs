//! Local wall-clock labels for message timestamps.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Format an hour (0-23) and minute as a two-digit 12-hour label, e.g. `"03:07 PM"`.
pub fn format_clock(hour: u32, minute: u32) -> String {
    let suffix = if hour % 24 < 12 { "AM" } else { "PM" };
    let hour12 = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{hour12:02}:{minute:02} {suffix}")
}

/// Current local time as a message timestamp label.
pub fn local_time_label() -> String {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        format_clock(now.get_hours(), now.get_minutes())
    }
    #[cfg(not(feature = "csr"))]
    {
        let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
        format_clock(u32::from(now.hour()), u32::from(now.minute()))
    }
}
