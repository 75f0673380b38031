use rexittime::{AppError, TimeOfDay, WorkDuration, parse_time};

#[test]
fn test_every_valid_time_round_trips() {
    for h in 0..24 {
        for m in 0..60 {
            let raw = format!("{h:02}:{m:02}");
            let parsed = parse_time(&raw).unwrap_or_else(|e| panic!("{raw}: {e}"));
            assert_eq!(parsed.hour(), h);
            assert_eq!(parsed.minute(), m);
            assert_eq!(parsed.to_string(), raw);
        }
    }
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    let parsed = parse_time("  09:03\t").unwrap();
    assert_eq!(parsed.to_string(), "09:03");
}

#[test]
fn test_malformed_times_are_rejected() {
    let bad = [
        "24:00", "9:00", "09:60", "abc", "", "   ", "09.00", "09-00", "0900", "09:00x", "x09:00",
        "09:0", "009:00", "09 : 00", "+9:00", "-09:00", "09:00:00", "２３:００",
    ];

    for raw in bad {
        match parse_time(raw) {
            Err(AppError::InvalidTimeFormat(s)) => assert_eq!(s, raw.trim()),
            other => panic!("{raw:?} should be rejected, got {other:?}"),
        }
    }
}

#[test]
fn test_error_message_carries_input() {
    let err = parse_time("25:10").unwrap_err();
    assert!(err.to_string().contains("'25:10'"));
    assert!(err.to_string().contains("HH:MM"));
}

#[test]
fn test_from_str_matches_parse_time() {
    let t: TimeOfDay = "13:45".parse().unwrap();
    assert_eq!(t, parse_time("13:45").unwrap());
    assert!("13:4".parse::<TimeOfDay>().is_err());
}

#[test]
fn test_structured_time_bounds() {
    assert_eq!(TimeOfDay::new(23, 59).unwrap().to_string(), "23:59");
    assert_eq!(TimeOfDay::new(0, 0).unwrap().to_string(), "00:00");
    assert!(matches!(
        TimeOfDay::new(24, 0),
        Err(AppError::InvalidTimeFormat(_))
    ));
    assert!(matches!(
        TimeOfDay::new(12, 60),
        Err(AppError::InvalidTimeFormat(_))
    ));
}

#[test]
fn test_time_ordering() {
    assert!(parse_time("08:59").unwrap() < parse_time("09:00").unwrap());
    assert!(parse_time("23:45").unwrap() > parse_time("00:00").unwrap());
}

#[test]
fn test_work_duration_forms() {
    let cases = [
        ("7h36m", 7, 36),
        ("7h", 7, 0),
        ("36m", 0, 36),
        ("7:36", 7, 36),
        (" 8H ", 8, 0),
        ("24h", 24, 0),
        ("0h0m", 0, 0),
    ];

    for (raw, h, m) in cases {
        let wd: WorkDuration = raw.parse().unwrap_or_else(|e| panic!("{raw}: {e}"));
        assert_eq!((wd.hours, wd.minutes), (h, m), "{raw}");
    }

    assert_eq!("7h36m".parse::<WorkDuration>().unwrap().total_minutes(), 456);
}

#[test]
fn test_work_duration_rejects_garbage() {
    for raw in [
        "", "h", "m", "7h36", "25h", "24h1m", "7h60m", "abc", "7:", ":36", "-1h", "+7h", "7:+36",
        "+7h+36m", "7 h", "7h 36m", "7m36h", "007h",
    ] {
        assert!(
            matches!(raw.parse::<WorkDuration>(), Err(AppError::InvalidDuration(_))),
            "{raw:?} should be rejected"
        );
    }
    assert!(WorkDuration::new(7, 60).is_err());
    assert!(WorkDuration::new(25, 0).is_err());
}
