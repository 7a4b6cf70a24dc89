//! Display formatting for dates and text shown in listings.

use chrono::{DateTime, Datelike, Utc};

const MONTHS: [&str; 12] = [
    "jan", "fev", "mar", "abr", "mai", "jun", "jul", "ago", "set", "out", "nov", "dez",
];

/// Formats a timestamp as `02 de jan, 2006` with Portuguese month abbreviations.
pub fn format_date(date: DateTime<Utc>) -> String {
    let month = MONTHS[date.month0() as usize];
    format!("{:02} de {}, {}", date.day(), month, date.year())
}

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp(date: DateTime<Utc>) -> String {
    date.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Relative age of `date` as seen from `now`, e.g. `há 3 horas`.
///
/// Buckets are minutes below one hour, hours below one day, days below 30 days, months of 30
/// days below 12 months, then years of 12 months.
///
/// # Arguments
/// - `date` - Past timestamp
/// - `now` - Reference time, normally `Utc::now()`
///
/// # Returns
/// Portuguese phrase with singular forms for a count of one
pub fn time_ago(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(date);

    if elapsed.num_hours() < 1 {
        let minutes = elapsed.num_minutes().max(0);
        return plural(minutes, "minuto", "minutos");
    }

    if elapsed.num_hours() < 24 {
        return plural(elapsed.num_hours(), "hora", "horas");
    }

    let days = elapsed.num_days();
    if days < 30 {
        return plural(days, "dia", "dias");
    }

    let months = days / 30;
    if months < 12 {
        return plural(months, "mês", "meses");
    }

    plural(months / 12, "ano", "anos")
}

fn plural(count: i64, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("há 1 {}", singular)
    } else {
        format!("há {} {}", count, plural)
    }
}

/// Cuts `text` to `max_chars` characters and appends `...` when it was longer.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod test {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 15, 4, 5).unwrap()
    }

    #[test]
    fn formats_portuguese_date() {
        assert_eq!(format_date(at(2006, 1, 2)), "02 de jan, 2006");
        assert_eq!(format_date(at(2024, 9, 30)), "30 de set, 2024");
        assert_eq!(format_date(at(2023, 12, 25)), "25 de dez, 2023");
    }

    #[test]
    fn formats_timestamp() {
        assert_eq!(format_timestamp(at(2024, 3, 7)), "2024-03-07 15:04:05");
    }

    #[test]
    fn time_ago_buckets() {
        let now = at(2024, 6, 1);

        assert_eq!(time_ago(now, now), "há 0 minutos");
        assert_eq!(time_ago(now - Duration::minutes(1), now), "há 1 minuto");
        assert_eq!(time_ago(now - Duration::minutes(59), now), "há 59 minutos");
        assert_eq!(time_ago(now - Duration::hours(1), now), "há 1 hora");
        assert_eq!(time_ago(now - Duration::hours(23), now), "há 23 horas");
        assert_eq!(time_ago(now - Duration::days(1), now), "há 1 dia");
        assert_eq!(time_ago(now - Duration::days(29), now), "há 29 dias");
        assert_eq!(time_ago(now - Duration::days(30), now), "há 1 mês");
        assert_eq!(time_ago(now - Duration::days(200), now), "há 6 meses");
        assert_eq!(time_ago(now - Duration::days(360), now), "há 1 ano");
        assert_eq!(time_ago(now - Duration::days(800), now), "há 2 anos");
    }

    #[test]
    fn truncates_on_char_boundary() {
        assert_eq!(truncate("curto", 150), "curto");
        assert_eq!(truncate("ação rápida", 4), "ação...");

        let long = "a".repeat(151);
        let result = truncate(&long, 150);
        assert_eq!(result.len(), 153);
        assert!(result.ends_with("..."));
    }
}
