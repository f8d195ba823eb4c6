#[cfg(test)]
mod tests {
    use ormlite_core::{
        FieldDef, FieldType, FieldValue, FixedBuf, Param, RowSet, ValueKind, decode, truncated,
    };
    use std::fmt::Debug;

    fn encoded<T: FieldValue>(value: T) -> Option<String> {
        value.encode().map(|v| v.as_str().to_string())
    }

    fn literal<T: FieldValue>(value: T) -> String {
        let mut out = String::new();
        value.write_literal(&mut out);
        out
    }

    #[test]
    fn integers() {
        assert_eq!(encoded(0i8).as_deref(), Some("0"));
        assert_eq!(encoded(-128i8).as_deref(), Some("-128"));
        assert_eq!(encoded(i64::MIN).as_deref(), Some("-9223372036854775808"));
        assert_eq!(encoded(u64::MAX).as_deref(), Some("18446744073709551615"));
        assert_eq!(decode::<i32>("42"), 42);
        assert_eq!(decode::<i32>("-17"), -17);
        assert_eq!(decode::<i64>("-9223372036854775808"), i64::MIN);
        assert_eq!(decode::<u64>("18446744073709551615"), u64::MAX);
        assert_eq!(decode::<u16>(" 80"), 80);
        assert_eq!(decode::<i32>("20.0000"), 20);
    }

    #[test]
    fn malformed_integers() {
        assert_eq!(decode::<i32>(""), 0);
        assert_eq!(decode::<i32>("abc"), 0);
        assert_eq!(decode::<i8>("300"), 0);
        assert_eq!(decode::<u8>("-1"), 0);
        assert_eq!(decode::<u64>("99999999999999999999"), 0);
    }

    #[test]
    fn floats() {
        assert_eq!(encoded(1.5f32).as_deref(), Some("1.5"));
        assert_eq!(encoded(101.1f32).as_deref(), Some("101.1"));
        assert_eq!(encoded(-0.25f64).as_deref(), Some("-0.25"));
        assert_eq!(encoded(f64::INFINITY).as_deref(), Some("Infinity"));
        assert_eq!(encoded(f32::NEG_INFINITY).as_deref(), Some("-Infinity"));
        assert_eq!(encoded(f64::NAN).as_deref(), Some("NaN"));
        assert_eq!(decode::<f32>("318.3"), 318.3);
        assert_eq!(decode::<f64>("1e3"), 1000.0);
        assert_eq!(decode::<f64>("Infinity"), f64::INFINITY);
        assert!(decode::<f64>("NaN").is_nan());
        assert_eq!(decode::<f64>(""), 0.0);
        assert_eq!(decode::<f64>("x1"), 0.0);
    }

    #[test]
    fn booleans() {
        assert_eq!(encoded(true).as_deref(), Some("1"));
        assert_eq!(encoded(false).as_deref(), Some("0"));
        assert!(decode::<bool>("1"));
        assert!(decode::<bool>("t"));
        assert!(decode::<bool>("true"));
        assert!(decode::<bool>("5"));
        assert!(!decode::<bool>("0"));
        assert!(!decode::<bool>("f"));
        assert!(!decode::<bool>(""));
    }

    #[test]
    fn text() {
        assert_eq!(encoded(String::from("hello")).as_deref(), Some("hello"));
        assert_eq!(encoded(String::from("nul\0inside")), None);
        assert_eq!(decode::<String>("abc"), "abc");
        assert_eq!(decode::<String>(""), "");
        let mut value = String::from("previous");
        value.decode("x");
        assert_eq!(value, "x");
    }

    #[test]
    fn fixed_buffers() {
        let value = FixedBuf::<4>::from("ab");
        assert_eq!(value.0, *b"ab\0\0");
        assert_eq!(value.as_str(), Some("ab"));
        let value = FixedBuf::<4>::from("abcdef");
        assert_eq!(value.0, *b"abcd");
        assert_eq!(value, "abcd");
        assert_eq!(encoded(value).as_deref(), Some("abcd"));
        assert_eq!(value.kind(), ValueKind::FixedBuffer(4));
        assert_eq!(<FixedBuf<10> as FieldType>::KIND, ValueKind::FixedBuffer(10));

        let mut value = FixedBuf::<4>::from("wxyz");
        value.decode("q");
        assert_eq!(value.0, *b"q\0\0\0");
        assert_eq!(encoded(FixedBuf::<3>::from_bytes(&[0xff, 0xfe])), None);

        let mut raw = [0u8; 3];
        raw.decode("hello");
        assert_eq!(raw, *b"hel");
        assert_eq!(encoded(*b"h\0i").as_deref(), Some("h"));
        assert_eq!(format!("{}", FixedBuf::<5>::from("hi")), "hi");

        let value = FixedBuf::<4>::from("aéé");
        assert_eq!(value.0, *b"a\xc3\xa9\0");
        assert_eq!(encoded(value).as_deref(), Some("aé"));
        assert_eq!(FixedBuf::<2>::from("日"), "");
    }

    #[test]
    fn params() {
        let param = Param::new("abc").expect("Plain text is a valid parameter");
        assert_eq!(param.as_str(), "abc");
        assert_eq!(param.len(), 3);
        assert_eq!(param.to_bytes_with_nul(), b"abc\0");
        assert!(Param::new("").is_some_and(|v| v.is_empty()));
        assert!(Param::new("a\0b").is_none());
    }

    #[test]
    fn literals() {
        assert_eq!(literal(27), "27");
        assert_eq!(literal(1.0f64), "1.0");
        assert_eq!(literal(true), "1");
        assert_eq!(literal(String::from("hxf1")), "'hxf1'");
        assert_eq!(literal(FixedBuf::<8>::from("abc")), "'abc'");
        assert_eq!(literal(f64::NAN), "'NaN'");
        assert_eq!(literal(f32::INFINITY), "'Infinity'");
        assert_eq!(literal(f64::NEG_INFINITY), "'-Infinity'");
        assert_eq!(literal(-2.5f32), "-2.5");
    }

    #[test]
    #[should_panic]
    fn literal_invalid_utf8() {
        literal(FixedBuf::<10>::from_bytes(&[0xff]));
    }

    #[test]
    #[should_panic]
    fn literal_with_nul() {
        literal(String::from("a\0b"));
    }

    fn round_trip<T: FieldType + PartialEq + Debug>(value: T) {
        let param = value
            .encode()
            .unwrap_or_else(|| panic!("{:?} should be encodable", value));
        assert_eq!(decode::<T>(param.as_str()), value, "text: {}", param);
    }

    #[test]
    fn round_trips() {
        round_trip(i8::MIN);
        round_trip(i8::MAX);
        round_trip(i16::MIN);
        round_trip(i32::MIN);
        round_trip(i32::MAX);
        round_trip(i64::MIN);
        round_trip(i64::MAX);
        round_trip(u8::MAX);
        round_trip(u16::MAX);
        round_trip(u32::MAX);
        round_trip(u64::MAX);
        round_trip(0u64);
        round_trip(f32::MAX);
        round_trip(f32::MIN);
        round_trip(f32::MIN_POSITIVE);
        round_trip(f64::MAX);
        round_trip(f64::MIN_POSITIVE);
        round_trip(5e-324f64);
        round_trip(-0.1f64);
        round_trip(f64::INFINITY);
        round_trip(f32::NEG_INFINITY);
        round_trip(true);
        round_trip(false);
        round_trip(String::new());
        round_trip(String::from("héllo wörld ✓"));
        round_trip(FixedBuf::<4>::from("abcd"));
        round_trip(FixedBuf::<8>::from("ab"));
        round_trip(FixedBuf::<6>::from("日本"));
        round_trip(*b"xyz");
        assert!(decode::<f64>(&f64::NAN.encode().expect("NaN is encodable").to_string()).is_nan());
    }

    #[test]
    fn kinds() {
        assert_eq!(0u8.kind(), ValueKind::UInt8);
        assert_eq!(0i16.kind(), ValueKind::Int16);
        assert_eq!(0u32.kind(), ValueKind::UInt32);
        assert_eq!(0f32.kind(), ValueKind::Float32);
        assert_eq!(String::new().kind(), ValueKind::Text);
        assert!(ValueKind::Text.is_quoted());
        assert!(ValueKind::FixedBuffer(3).is_quoted());
        assert!(!ValueKind::Int32.is_quoted());
        assert!(!ValueKind::Enum(&ValueKind::Int32).is_quoted());
        assert_eq!(ValueKind::Enum(&ValueKind::Int32).to_string(), "Enum(Int32)");
    }

    #[test]
    fn row_sets() {
        let rows = RowSet::new(
            2,
            vec![
                vec![Some("1".to_string()), None].into_boxed_slice(),
                vec![Some("2".to_string()), Some("b".to_string())].into_boxed_slice(),
            ],
        );
        assert_eq!(rows.len(), 2);
        let first = rows.row(0).expect("The first row exists");
        assert_eq!(first.cell(0), "1");
        assert_eq!(first.cell(1), "");
        assert!(first.is_null(1));
        assert!(first.is_null(5));
        assert!(!first.is_null(0));
        assert_eq!(
            rows.iter().map(|r| decode::<i32>(r.cell(0))).collect::<Vec<_>>(),
            [1, 2]
        );
        assert!(rows.row(2).is_none());
        assert!(RowSet::default().is_empty());
    }

    #[test]
    fn field_defs() {
        let def = FieldDef::new("age", 3, ValueKind::Int32);
        assert_eq!(def.expr("person").text(), "age");
        assert_eq!(def.expr("person").gt(1).text(), "age > 1");
        assert_eq!(FixedBuf::<7>::LEN, 7);
    }

    #[test]
    fn truncation() {
        assert_eq!(truncated("hello", 10), "hello");
        assert_eq!(truncated("hello", 3), "hel");
        assert_eq!(truncated("héllo", 2), "h");
    }
}
