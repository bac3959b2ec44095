use rustcommon_duration::*;

// duration, canonical form, other accepted spellings
const CASES: &[(f64, &str, &[&str])] = &[
    (-60000.0, "-1m0s", &[]),
    (-1000.0, "-1s", &["-1000ms"]),
    (-1.0, "-1ms", &["-0.001s", "-.001s"]),
    (0.0, "0s", &["0ms", "0h0s", "0"]),
    (1.0, "1ms", &["0.001s", ".001s", "+.001s"]),
    (1000.0, "1s", &["1000ms", "1.s", "+1.s"]),
    (60000.0, "1m0s", &[]),
    (3600000.0, "1h0m0s", &[]),
    (63949.0, "1m3.949s", &[]),
    (63001.0, "1m3.001s", &[]),
    (2200.0 * MICROSECOND, "2.2ms", &[]),
    (3300.0 * MILLISECOND, "3.3s", &[]),
    (4.0 * MINUTE + 5.0 * SECOND, "4m5s", &[]),
    (4.0 * MINUTE + 5001.0 * MILLISECOND, "4m5.001s", &[]),
    (
        5.0 * HOUR + 6.0 * MINUTE + 7001.0 * MILLISECOND,
        "5h6m7.001s",
        &[],
    ),
    (63949.234, "1m3.949234s", &[]),
    (0.001, "1µs", &["1\u{03bc}s", "1us", "0.000001s"]),
    (0.1, "100µs", &[]),
    (-0.001, "-1µs", &["-1\u{03bc}s", "-1us", "-0.000001s"]),
    (-0.1, "-100µs", &[]),
];

#[test]
fn canonical() {
    for (duration, canonical, _) in CASES {
        assert_eq!(
            format(*duration),
            *canonical,
            "format({duration}) should be {canonical}"
        );
    }
}

#[test]
fn spellings() {
    for (duration, canonical, others) in CASES {
        for s in core::iter::once(canonical).chain(others.iter()) {
            assert_eq!(parse(s), Ok(*duration), "parse({s:?}) should be {duration}");
        }
    }
}

#[test]
fn invalid() {
    for input in ["", "3", "-", "s", ".", "-.", ".s", "+.s"] {
        let e = parse(input).expect_err(input);
        assert_eq!(e.kind(), ErrorKind::Syntax, "{input:?}: {e}");
    }
}

#[test]
fn unknown_unit() {
    let e = parse("5x").unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Unit);

    let message = e.to_string();
    assert!(message.contains("'x'"), "{message}");
    assert!(message.contains("5x"), "{message}");
}

#[test]
fn hr() {
    assert_eq!(from_hr((2, 977111090)), 2977.11109);
    assert_eq!(from_hr((123, 977111090)), 123977.11109);
    assert_eq!(from_hr_to_seconds((2, 977111090)), 2.97711109);

    assert_eq!(to_seconds(1000.0), 1.0);
    assert_eq!(to_seconds(2977.0), 2.977);
    assert_eq!(to_seconds(123977.0), 123.977);
}
