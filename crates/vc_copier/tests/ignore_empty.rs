use vc_copier::{Copier, CopyOptions, copy};
use vc_reflect::derive::Reflect;

#[derive(Reflect, Default, Debug, Clone, PartialEq)]
struct Str {
    v: i32,
}

#[derive(Reflect, Default, Debug, Clone, PartialEq)]
struct Values {
    float: f64,
    int: i64,
    int_pointer: Option<i32>,
    string: String,
    string_pointer: Option<String>,
    int_array: Vec<i64>,
    string_array: Vec<String>,
    str_value: Str,
    str_pointer: Option<Box<Str>>,
}

fn filled() -> Values {
    Values {
        float: 100.0,
        int: 1,
        int_pointer: Some(10),
        string: "Man".into(),
        string_pointer: Some("Wow".into()),
        int_array: vec![1, 2, 3],
        string_array: vec!["a".into(), "b".into(), "c".into()],
        str_value: Str { v: 10 },
        str_pointer: Some(Box::new(Str { v: 11 })),
    }
}

#[test]
fn all_possible_types() {
    let copier = Copier::new(CopyOptions::new().with_ignore_empty(true));
    let mut dest = filled();
    let mut expected = dest.clone();
    let mut source = Values::default();

    let stats = copier.copy(&mut dest, &source).unwrap();
    assert_eq!(dest, expected);
    assert_eq!(stats.skipped, 0);

    source.float = 200.0;
    copier.copy(&mut dest, &source).unwrap();
    expected.float = 200.0;
    assert_eq!(dest, expected);

    source.int = 110;
    copier.copy(&mut dest, &source).unwrap();
    expected.int = 110;
    assert_eq!(dest, expected);

    source.int_pointer = Some(99);
    copier.copy(&mut dest, &source).unwrap();
    expected.int_pointer = Some(99);
    assert_eq!(dest, expected);

    source.string = "Check".into();
    copier.copy(&mut dest, &source).unwrap();
    expected.string = "Check".into();
    assert_eq!(dest, expected);

    source.int_array = vec![4, 5, 6];
    copier.copy(&mut dest, &source).unwrap();
    expected.int_array = vec![4, 5, 6];
    assert_eq!(dest, expected);

    source.string_array = vec!["d".into(), "e".into(), "f".into()];
    copier.copy(&mut dest, &source).unwrap();
    expected.string_array = vec!["d".into(), "e".into(), "f".into()];
    assert_eq!(dest, expected);

    source.str_value = Str { v: 89 };
    copier.copy(&mut dest, &source).unwrap();
    expected.str_value = Str { v: 89 };
    assert_eq!(dest, expected);

    source.str_pointer = Some(Box::new(Str { v: 89 }));
    copier.copy(&mut dest, &source).unwrap();
    expected.str_pointer = Some(Box::new(Str { v: 89 }));
    assert_eq!(dest, expected);
}

#[test]
fn empty_values_overwrite_by_default() {
    let mut dest = filled();
    copy(&mut dest, &Values::default()).unwrap();

    assert_eq!(dest.float, 0.0);
    assert_eq!(dest.int, 0);
    assert!(dest.string.is_empty());
    assert!(dest.int_array.is_empty());
    assert_eq!(dest.str_value, Str::default());

    // Absent pointers never overwrite.
    assert_eq!(dest.int_pointer, Some(10));
    assert_eq!(dest.str_pointer, Some(Box::new(Str { v: 11 })));
}

#[test]
fn empty_pointees_do_not_overwrite() {
    let copier = Copier::new(CopyOptions::new().with_ignore_empty(true));
    let mut dest = Values {
        int_pointer: None,
        ..filled()
    };
    let source = Values {
        int_pointer: Some(0),
        string_pointer: Some(String::new()),
        ..Values::default()
    };

    copier.copy(&mut dest, &source).unwrap();

    // Empty pointees are not allocated, and do not overwrite.
    assert_eq!(dest.int_pointer, None);
    assert_eq!(dest.string_pointer.as_deref(), Some("Wow"));
}
