use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rscoreboard::games::{AcceptableStarts, upcoming_friday, week_start_of};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_upcoming_friday_examples() {
    // 2025-06-16 is a Monday
    assert_eq!(upcoming_friday(d(2025, 6, 16)), d(2025, 6, 20));
    assert_eq!(upcoming_friday(d(2025, 6, 20)), d(2025, 6, 20));
    assert_eq!(upcoming_friday(d(2025, 6, 21)), d(2025, 6, 27));
    assert_eq!(upcoming_friday(d(2025, 6, 22)), d(2025, 6, 27));
}

#[test]
fn test_week_start_of_examples() {
    assert_eq!(week_start_of(d(2025, 6, 20)), d(2025, 6, 16));
    assert_eq!(week_start_of(d(2025, 6, 16)), d(2025, 6, 16));
    // Sunday belongs to the week that started six days earlier
    assert_eq!(week_start_of(d(2025, 6, 22)), d(2025, 6, 16));
}

#[test]
fn test_window_properties_over_two_years() {
    let start = d(2024, 1, 1);
    for offset in 0..730 {
        let today = start + Duration::days(offset);
        let w = AcceptableStarts::for_date(today);

        assert_eq!(w.friday.weekday(), Weekday::Fri, "{today}");
        assert_eq!(w.monday.weekday(), Weekday::Mon, "{today}");
        assert_eq!(w.friday - w.monday, Duration::days(4), "{today}");

        let ahead = w.friday - today;
        assert!(ahead >= Duration::zero() && ahead <= Duration::days(6), "{today}");
    }
}

#[test]
fn test_window_crosses_month_boundary() {
    // Saturday 2025-05-31 → Friday 2025-06-06, Monday 2025-06-02
    let w = AcceptableStarts::for_date(d(2025, 5, 31));
    assert_eq!(w.friday, d(2025, 6, 6));
    assert_eq!(w.monday, d(2025, 6, 2));
    assert!(w.contains(d(2025, 6, 2)));
    assert!(w.contains(d(2025, 6, 6)));
    assert!(!w.contains(d(2025, 5, 26)));
}

#[test]
fn test_weekend_targets_next_week() {
    // sabato e domenica guardano già alla settimana successiva
    let sat = AcceptableStarts::for_date(d(2025, 6, 21));
    let sun = AcceptableStarts::for_date(d(2025, 6, 22));
    assert_eq!(sat, sun);
    assert_eq!(sat.monday, d(2025, 6, 23));
}
