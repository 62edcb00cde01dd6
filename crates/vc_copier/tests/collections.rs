mod common;

use common::{Employee, User, check_employee, jinzhu};
use vc_copier::{Copier, CopyOptions, copy};
use vc_reflect::derive::Reflect;

fn users() -> Vec<User> {
    vec![
        User {
            name: "Jinzhu".into(),
            age: 18,
            role: "Admin".into(),
            notes: vec!["hello world".into()],
            ..Default::default()
        },
        User {
            name: "Jinzhu2".into(),
            age: 22,
            role: "Dev".into(),
            notes: vec!["hello world".into(), "hello".into()],
            ..Default::default()
        },
    ]
}

#[test]
fn struct_into_list() {
    let user = jinzhu();

    let mut employees = vec![Employee::default(); 3];
    copy(&mut employees, &user).unwrap();
    assert_eq!(employees.len(), 1);
    check_employee(&employees[0], &user);

    let mut employees: Option<Vec<Employee>> = None;
    copy(&mut employees, &user).unwrap();
    let employees = employees.unwrap();
    assert_eq!(employees.len(), 1);
    check_employee(&employees[0], &user);
}

#[test]
fn struct_into_pointer_list() {
    let user = jinzhu();

    let mut boxed: Vec<Box<Employee>> = Vec::new();
    copy(&mut boxed, &user).unwrap();
    assert_eq!(boxed.len(), 1);
    check_employee(&boxed[0], &user);

    let mut optional: Box<Vec<Option<Employee>>> = Box::default();
    copy(&mut optional, &Box::new(user.clone())).unwrap();
    assert_eq!(optional.len(), 1);
    check_employee(optional[0].as_ref().unwrap(), &user);
}

#[test]
fn list_into_list() {
    let users = users();

    let mut employees = Vec::<Employee>::new();
    copy(&mut employees, &users).unwrap();
    assert_eq!(employees.len(), 2);
    check_employee(&employees[0], &users[0]);
    check_employee(&employees[1], &users[1]);

    let mut employees: Option<Vec<Box<Employee>>> = None;
    copy(&mut employees, &Box::new(users.clone())).unwrap();
    let employees = employees.unwrap();
    assert_eq!(employees.len(), 2);
    check_employee(&employees[0], &users[0]);
    check_employee(&employees[1], &users[1]);
}

#[test]
fn list_length_follows_source() {
    let users = users();
    let mut employees = vec![Employee::default(); 5];

    copy(&mut employees, &users[..1].to_vec()).unwrap();
    assert_eq!(employees.len(), 1);

    copy(&mut employees, &Vec::<User>::new()).unwrap();
    assert!(employees.is_empty());
}

#[test]
fn list_of_pointers() {
    let users: Vec<Option<User>> = vec![Some(jinzhu()), None];

    let mut employees: Vec<Option<Employee>> = Vec::new();
    copy(&mut employees, &users).unwrap();
    assert_eq!(employees.len(), 2);
    check_employee(employees[0].as_ref().unwrap(), users[0].as_ref().unwrap());
    assert!(employees[1].is_none());

    let mut boxes: Vec<Box<Employee>> = Vec::new();
    copy(&mut boxes, &users).unwrap();
    assert_eq!(boxes.len(), 2);
    assert_eq!(*boxes[1], Employee::default());
}

#[test]
fn scalar_lists_convert() {
    #[derive(Reflect, Default)]
    struct Narrow {
        values: Vec<i32>,
    }

    #[derive(Reflect, Default)]
    struct Wide {
        values: Vec<i64>,
    }

    #[derive(Reflect, Default)]
    struct Bytes {
        values: Vec<u8>,
    }

    let mut wide = Wide::default();
    copy(&mut wide, &Narrow { values: vec![1, -2, 3] }).unwrap();
    assert_eq!(wide.values, [1, -2, 3]);

    // One element does not fit, the list keeps its content.
    let mut bytes = Bytes { values: vec![7] };
    let stats = Copier::default().copy(&mut bytes, &wide).unwrap();
    assert_eq!(bytes.values, [7]);
    assert_eq!(stats.skipped, 1);
}

#[test]
fn nested_list_keeps_other_members() {
    #[derive(Reflect, Default, Debug, Clone, PartialEq)]
    struct Value {
        value: String,
    }

    #[derive(Reflect, Default, Debug, Clone, PartialEq)]
    struct Versioned {
        version: i32,
        values: Vec<Value>,
    }

    let source = Versioned {
        version: 0,
        values: vec![Value {
            value: "Test".into(),
        }],
    };
    let mut dest = Versioned {
        version: 1,
        values: Vec::new(),
    };

    let copier = Copier::new(CopyOptions::new().with_ignore_empty(true));
    copier.copy(&mut dest, &source).unwrap();

    assert_eq!(dest.values, source.values);
    assert_eq!(dest.version, 1);
}
