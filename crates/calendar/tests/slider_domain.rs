use ozone_calendar::{
    CalendarMonth, FIRST_POSITION, LAST_POSITION, month_for_position, month_sequence,
    position_for_month, slider_months,
};

#[test]
fn first_segment_is_late_2023() {
    for p in 1..=4i64 {
        let m = month_for_position(p).unwrap();
        assert_eq!(m.year(), 2023, "position {p}");
        assert_eq!(i64::from(m.month()), 8 + p, "position {p}");
    }
}

#[test]
fn second_segment_is_2024() {
    for p in 5..=16i64 {
        let m = month_for_position(p).unwrap();
        assert_eq!(m.year(), 2024, "position {p}");
        assert_eq!(i64::from(m.month()), p - 4, "position {p}");
    }
}

#[test]
fn third_segment_is_2025() {
    for p in 17..=28i64 {
        let m = month_for_position(p).unwrap();
        assert_eq!(m.year(), 2025, "position {p}");
        assert_eq!(i64::from(m.month()), p - 16, "position {p}");
    }
}

#[test]
fn labels_are_zero_padded() {
    for m in slider_months() {
        let label = m.to_string();
        assert_eq!(label.len(), 7, "label {label}");
        assert_eq!(&label[4..5], "-");
        let month: u8 = label[5..].parse().unwrap();
        assert!((1..=12).contains(&month), "label {label}");
    }
}

#[test]
fn domain_is_contiguous_and_monotonic() {
    let months = slider_months();
    for pair in months.windows(2) {
        assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        assert_eq!(pair[0].months_until(pair[1]), 1);
        assert!(pair[0].to_string() < pair[1].to_string());
    }
}

#[test]
fn domain_matches_month_sequence() {
    let start = CalendarMonth::new(2023, 9).unwrap();
    let n = (LAST_POSITION - FIRST_POSITION + 1) as usize;
    assert_eq!(slider_months(), month_sequence(start, n));
}

#[test]
fn position_roundtrip() {
    for p in FIRST_POSITION..=LAST_POSITION {
        let m = month_for_position(i64::from(p)).unwrap();
        assert_eq!(position_for_month(m).unwrap(), p);
    }
}

#[test]
fn label_roundtrip() {
    for m in slider_months() {
        let parsed: CalendarMonth = m.to_string().parse().unwrap();
        assert_eq!(parsed, m);
    }
}

#[test]
fn documented_examples() {
    assert_eq!(month_for_position(1).unwrap().to_string(), "2023-09");
    assert_eq!(month_for_position(5).unwrap().to_string(), "2024-01");
    assert_eq!(month_for_position(17).unwrap().to_string(), "2025-01");
}
