use super::*;
use crate::scanner::*;

const OBJECTS: &[(&str, &str)] = &[
    ("{}", ""),
    ("{}3", "3"),
    ("{} 3", " 3"),
    (r#"{"foo":0}"#, ""),
    (r#"{"foo":0}3"#, "3"),
    (r#"{"foo":0,"bar":7} 3"#, " 3"),
    (r#"{"foo":0 , "bar":7}3"#, "3"),
    (r#"{"":""} 3"#, " 3"),
    (r#"{"}":"}"}3"#, "3"),
    (r#"{"":{}} 3"#, " 3"),
    (r#"{"}":["}{"]}3"#, "3"),
    (r#"{"":{"":{"":{}}}} 3"#, " 3"),
    (r#"{"a\"}":"\\"}3"#, "3"),
];

const ARRAYS: &[(&str, &str)] = &[
    ("[]", ""),
    ("[]3", "3"),
    ("[0] 3", " 3"),
    ("[0,1]3", "3"),
    ("[0 , 1] 3", " 3"),
    (r#"["", ""]3"#, "3"),
    ("[[], []] 3", " 3"),
    (r#"["[", "]"]3"#, "3"),
    (r#"[["]", "]"], [{"foo":[]}]] 3"#, " 3"),
];

const NUMBERS: &[(&str, &str)] = &[
    ("-0", ""),
    ("-0 true", " true"),
    ("0.0 true", " true"),
    ("10", ""),
    ("10.1 true", " true"),
    ("1e7", ""),
    ("1e+7 true", " true"),
    ("1.0e-7", ""),
    ("10.1e+7 true", " true"),
    ("10.1E-7,", ","),
    // grammar is not checked
    ("1.2.3]", "]"),
];

#[test]
fn whitespace_table() {
    let cases = [
        (" ", ""),
        (" 3", "3"),
        ("\t3", "3"),
        ("\n3", "3"),
        ("\r3", "3"),
        (" \t\n\r", ""),
        (" \t\n\r3", "3"),
        ("3 ", "3 "),
        ("", ""),
    ];
    for (inp, want) in cases {
        assert_eq!(scan(skip_whitespace, inp), want, "input={:?}", inp);
    }
}

#[test]
fn separator_consumes_one_byte_and_trailing_ws() {
    for sep in ["[", "{", "}", "]", ":", ","] {
        assert_eq!(scan(skip_separator, sep), "");
        assert_eq!(scan(skip_separator, &format!("{sep} \r\n\t")), "");
        assert_eq!(scan(skip_separator, &format!("{sep}3")), "3");
        assert_eq!(scan(skip_separator, &format!("{sep} \r\n\t3")), "3");
    }
    assert_eq!(scan(skip_separator, ""), "");
}

#[test]
fn strings_table() {
    let cases = [
        (r#""""#, ""),
        (r#""foo""#, ""),
        (r#""foo":"bar""#, r#":"bar""#),
        (r#""foo" : "bar""#, r#" : "bar""#),
        (r#""foo\"bar""#, ""),
        (r#""foo\"bar":"baz""#, r#":"baz""#),
        (r#""foo\\\"bar":"baz""#, r#":"baz""#),
        (r#""foo\\":1"#, ":1"),
    ];
    for (inp, want) in cases {
        assert_eq!(scan(skip_string, inp), want, "input={}", inp);
    }
}

#[test]
fn take_string_keeps_escapes() {
    let cases = [
        (r#""""#, "", ""),
        (r#""foo""#, "foo", ""),
        (r#""foo":"bar""#, "foo", r#":"bar""#),
        (r#""foo" : "bar""#, "foo", r#" : "bar""#),
        (r#""foo\"bar""#, r#"foo\"bar"#, ""),
        (r#""foo\\\"bar":"baz""#, r#"foo\\\"bar"#, r#":"baz""#),
        (r#""é""#, r#"é"#, ""),
    ];
    for (inp, want, rest) in cases {
        let mut cur = inp.as_bytes();
        let got = take_string(&mut cur);
        assert_eq!(text(got), want, "input={}", inp);
        assert_eq!(text(cur), rest, "input={}", inp);
    }
}

#[test]
fn numbers_table() {
    for &(inp, want) in NUMBERS {
        assert_eq!(scan(skip_number, inp), want, "input={}", inp);
    }
}

#[test]
fn objects_table() {
    for &(inp, want) in OBJECTS {
        assert_eq!(scan(skip_object, inp), want, "input={}", inp);
    }
}

#[test]
fn arrays_table() {
    for &(inp, want) in ARRAYS {
        assert_eq!(scan(skip_array, inp), want, "input={}", inp);
    }
}

#[test]
fn value_dispatches_on_lead_byte() {
    for &(inp, want) in OBJECTS.iter().chain(ARRAYS).chain(NUMBERS) {
        assert_eq!(scan(skip_value, inp), want, "input={}", inp);
    }
    let literals = [
        ("true", ""),
        ("false", ""),
        ("null", ""),
        ("true3", "3"),
        ("false3", "3"),
        ("null 3", " 3"),
        (r#""foo" : "bar""#, r#" : "bar""#),
    ];
    for (inp, want) in literals {
        assert_eq!(scan(skip_value, inp), want, "input={}", inp);
    }
}

#[test]
fn value_len_measures_one_token() {
    assert_eq!(value_len(br#"{"a":[1,2]} ,"#), 11);
    assert_eq!(value_len(b"123,"), 3);
    assert_eq!(value_len(b""), 0);
}

#[test]
fn prev_significant_skips_whitespace() {
    let cases: [(&str, usize, Option<u8>); 10] = [
        (" ", 0, Some(b' ')),
        (" 3", 1, Some(b'3')),
        (" \t\n\r", 3, Some(b'\r')),
        (" \t\n\r3", 4, Some(b'3')),
        ("[]", 1, Some(b'[')),
        (" ]", 1, Some(b']')),
        ("[1]", 2, Some(b'1')),
        ("{ \n }", 4, Some(b'{')),
        (r#"{"foo"}"#, 6, Some(b'"')),
        ("", 0, None),
    ];
    for (inp, at, want) in cases {
        assert_eq!(prev_significant(inp.as_bytes(), at), want, "input={:?} at={}", inp, at);
    }
}

#[test]
fn truncated_input_never_overruns() {
    let cases = [
        r#"{"a":"#,
        r#"{"a":"unterminated"#,
        "[[[",
        r#"["\"#,
        "tr",
        "f",
        "n",
        r#""abc\"#,
        "{",
        "[",
    ];
    for inp in cases {
        // each scan must terminate inside the buffer
        let rest = scan(skip_value, inp);
        assert!(rest.len() <= inp.len(), "input={}", inp);
    }
    assert_eq!(scan(skip_string, r#""abc"#), "");
    assert_eq!(scan(skip_object, r#"{"a":{"b":1}"#), "");
    assert_eq!(scan(skip_array, "[1,[2,3]"), "");
}
