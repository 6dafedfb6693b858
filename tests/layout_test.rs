use iso8601_time::{format, parse, Iso8601Error, Time};

struct TimePart {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    nanosecond: u32,
    offset: i32,
}

fn part(nanosecond: u32, offset: i32) -> TimePart {
    TimePart {
        year: 2017,
        month: 8,
        day: 23,
        hour: 1,
        minute: 24,
        second: 48,
        nanosecond,
        offset,
    }
}

fn sec_offset(hour: i32, minute: i32) -> i32 {
    (hour * 60 + minute) * 60
}

#[test]
fn test_layout() {
    let cases = [
        ("use Z", "2017-08-23T01:24:48.756Z", part(756_000_000, 0)),
        ("use + sign", "2017-08-23T01:24:48.756+07:00", part(756_000_000, sec_offset(7, 0))),
        ("use - sign", "2017-08-23T01:24:48.756-07:00", part(756_000_000, sec_offset(-7, 0))),
        ("no fraction, with Z", "2017-08-23T01:24:48Z", part(0, 0)),
        ("no fraction, with + sign", "2017-08-23T01:24:48+07:00", part(0, sec_offset(7, 0))),
        ("no fraction, with - sign", "2017-08-23T01:24:48-07:00", part(0, sec_offset(-7, 0))),
        ("1 digit fraction", "2017-08-23T01:24:48.1Z", part(100_000_000, 0)),
        ("2 digit fraction", "2017-08-23T01:24:48.27Z", part(270_000_000, 0)),
        ("5 digit fraction", "2017-08-23T01:24:48.87234Z", part(872_340_000, 0)),
        ("9 digit fraction", "2017-08-23T01:24:48.987373613Z", part(987_373_613, 0)),
    ];

    for (name, input, expect) in cases {
        let parsed = parse(input).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(parsed.year(), expect.year, "{name}: year");
        assert_eq!(parsed.month(), expect.month, "{name}: month");
        assert_eq!(parsed.day(), expect.day, "{name}: day");
        assert_eq!(parsed.hour(), expect.hour, "{name}: hour");
        assert_eq!(parsed.minute(), expect.minute, "{name}: minute");
        assert_eq!(parsed.second(), expect.second, "{name}: second");
        assert_eq!(parsed.nanosecond(), expect.nanosecond, "{name}: nanosecond");
        assert_eq!(parsed.offset_seconds(), expect.offset, "{name}: offset");

        let via_from_str: Time = input.parse().unwrap();
        assert_eq!(via_from_str, parsed, "{name}: FromStr");
    }
}

#[test]
fn test_layout_errors() {
    let cases = [
        ("no time part", "2017-08-23"),
        ("no Z part", "2017-08-23T01:24:48.756"),
        ("no date part", "01:24:48.756Z"),
        ("empty", ""),
        ("space", " "),
        ("double space", "  "),
        ("silly string", "silly string"),
        ("space instead of T", "2017-08-23 01:24:48 +07:00"),
    ];

    for (name, input) in cases {
        match parse(input) {
            Err(Iso8601Error::Parse { value, reason }) => {
                assert_eq!(value, input, "{name}");
                assert!(!reason.is_empty(), "{name}");
            }
            other => panic!("{name}: expected parse error, got {other:?}"),
        }
    }
}

#[test]
fn test_round_trip() {
    let years = [0, 1, 1970, 2000, 2016, 2017, 9999];
    let nanos = [0, 1, 10, 245_000_000, 750_000_000, 987_373_613, 999_999_999];
    let offsets = [
        0,
        sec_offset(7, 0),
        sec_offset(-7, 0),
        sec_offset(5, 30),
        sec_offset(-9, -30),
        sec_offset(23, 59),
        sec_offset(-23, -59),
    ];

    for year in years {
        for nanosecond in nanos {
            for offset in offsets {
                let original = Time::new(year, 2, 28, 23, 59, 59, nanosecond, offset).unwrap();
                let text = format(&original).unwrap();
                let parsed = parse(&text).unwrap();
                assert_eq!(parsed, original, "{text}");

                let mut decoded = Time::default();
                decoded
                    .unmarshal_json(&original.marshal_json().unwrap())
                    .unwrap();
                assert_eq!(decoded, original, "{text}");
            }
        }
    }
}

#[test]
fn test_zero_offset_always_zulu() {
    for input in [
        "2017-01-15T20:11:45.245Z",
        "2017-01-15T20:11:45.245+00:00",
        "2017-01-15T20:11:45.245-00:00",
    ] {
        let t = parse(input).unwrap();
        assert_eq!(format(&t).unwrap(), "2017-01-15T20:11:45.245Z", "{input}");
        assert_eq!(t.to_iso8601().unwrap(), "2017-01-15T20:11:45.245Z", "{input}");
    }
}
