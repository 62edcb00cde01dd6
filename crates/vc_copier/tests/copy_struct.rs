mod common;

use core::time::Duration;

use common::{Employee, User, check_employee, jinzhu};
use vc_copier::{Copier, CopyError, copy};

#[test]
fn read_only_destination() {
    let user = jinzhu();
    let employee = Employee::default();

    let err = copy(&employee, &user).unwrap_err();
    assert!(matches!(err, CopyError::NotAddressable { .. }));
    assert!(err.to_string().contains("Employee"));
    assert_eq!(employee, Employee::default());
}

#[test]
fn from_value() {
    let user = jinzhu();
    let mut employee = Employee::default();

    copy(&mut employee, &user).unwrap();
    check_employee(&employee, &user);
}

#[test]
fn from_pointers() {
    let user = jinzhu();

    let mut employee = Employee::default();
    copy(&mut employee, &Box::new(user.clone())).unwrap();
    check_employee(&employee, &user);

    let mut employee = Employee::default();
    copy(&mut employee, &Some(Box::new(user.clone()))).unwrap();
    check_employee(&employee, &user);
}

#[test]
fn into_pointers() {
    let user = jinzhu();

    let mut boxed = Box::<Employee>::default();
    copy(&mut boxed, &user).unwrap();
    check_employee(&boxed, &user);

    let mut optional: Option<Employee> = None;
    copy(&mut optional, &user).unwrap();
    check_employee(optional.as_ref().unwrap(), &user);

    let mut nested: Option<Box<Employee>> = None;
    copy(&mut nested, &Some(Box::new(user.clone()))).unwrap();
    check_employee(nested.as_deref().unwrap(), &user);
}

#[test]
fn absent_source_is_a_no_op() {
    let mut employee = Employee {
        name: "kept".into(),
        ..Default::default()
    };
    let stats = Copier::default()
        .copy(&mut employee, &None::<User>)
        .unwrap();

    assert_eq!(employee.name, "kept");
    assert_eq!(stats.copied + stats.unchanged + stats.skipped, 0);
}

#[test]
fn reference_members() {
    let mut user = jinzhu();
    user.birthday = Some(Duration::from_secs(86_400));
    let mut employee = Employee::default();

    copy(&mut employee, &user).unwrap();
    check_employee(&employee, &user);

    // The destination owns its values.
    user.birthday = Some(Duration::ZERO);
    user.notes.push("later".into());
    assert_eq!(employee.birthday, Some(Duration::from_secs(86_400)));
    assert_eq!(employee.notes.len(), 2);

    // An absent source pointer leaves the destination as it is.
    user.birthday = None;
    copy(&mut employee, &user).unwrap();
    assert_eq!(employee.birthday, Some(Duration::from_secs(86_400)));
}

#[test]
fn existing_values_are_overwritten() {
    let user = jinzhu();
    let mut employee = Employee {
        name: "old".into(),
        nickname: Some("old".into()),
        employe_id: 42,
        notes: vec!["a".into(), "b".into(), "c".into()],
        ..Default::default()
    };

    copy(&mut employee, &user).unwrap();
    check_employee(&employee, &user);
    assert_eq!(employee.employe_id, 42);
}

#[test]
fn stats() {
    let user = jinzhu();
    let mut employee = Employee::default();

    let stats = Copier::default().copy(&mut employee, &user).unwrap();

    // name, birthday (absent), nickname, age, fake_age, notes,
    // the `role` setter and the `double_age` getter.
    assert_eq!(stats.copied, 7);
    assert_eq!(stats.unchanged, 1);
    assert_eq!(stats.skipped, 0);
    assert_eq!(stats.hook_failures, 0);
}

#[test]
fn top_level_values_follow_member_rules() {
    let mut wide = 0_i64;
    copy(&mut wide, &5_i32).unwrap();
    assert_eq!(wide, 5);

    let mut byte = 9_u8;
    copy(&mut byte, &300_i32).unwrap();
    assert_eq!(byte, 9);

    let mut optional: Option<u8> = None;
    copy(&mut optional, &Some(7_u64)).unwrap();
    assert_eq!(optional, Some(7));

    let mut text = String::new();
    copy(&mut text, &"static").unwrap();
    assert_eq!(text, "static");

    let mut duration = Duration::from_secs(1);
    copy(&mut duration, &2_u64).unwrap();
    assert_eq!(duration, Duration::from_secs(1));
}
