#![allow(dead_code)]

use core::time::Duration;

use vc_reflect::derive::Reflect;

#[derive(Reflect, Default, Debug, Clone, PartialEq)]
#[reflect(getter(double_age))]
pub struct User {
    pub name: String,
    pub birthday: Option<Duration>,
    pub nickname: String,
    pub role: String,
    pub age: i32,
    pub fake_age: Option<i32>,
    pub notes: Vec<String>,
    #[reflect(ignore)]
    pub flags: Vec<u8>,
}

impl User {
    pub fn double_age(&self) -> i32 {
        2 * self.age
    }
}

#[derive(Reflect, Default, Debug, Clone, PartialEq)]
#[reflect(setter(role = set_role))]
pub struct Employee {
    pub name: String,
    pub birthday: Option<Duration>,
    pub nickname: Option<String>,
    pub age: i64,
    pub fake_age: isize,
    pub employe_id: i64,
    pub double_age: i32,
    pub super_rule: String,
    pub notes: Vec<String>,
    #[reflect(ignore)]
    pub flags: Vec<u8>,
}

impl Employee {
    pub fn set_role(&mut self, role: String) {
        self.super_rule = format!("Super {role}");
    }
}

pub fn jinzhu() -> User {
    User {
        name: "Jinzhu".into(),
        nickname: "jinzhu".into(),
        role: "Admin".into(),
        age: 18,
        fake_age: Some(12),
        notes: vec!["hello world".into(), "welcome".into()],
        flags: vec![b'x'],
        ..Default::default()
    }
}

#[track_caller]
pub fn check_employee(employee: &Employee, user: &User) {
    assert_eq!(employee.name, user.name);
    assert_eq!(employee.nickname.as_deref(), Some(user.nickname.as_str()));
    assert_eq!(employee.birthday, user.birthday);
    assert_eq!(employee.age, i64::from(user.age));
    if let Some(fake_age) = user.fake_age {
        assert_eq!(employee.fake_age, fake_age as isize);
    }
    assert_eq!(employee.double_age, user.double_age());
    assert_eq!(employee.super_rule, format!("Super {}", user.role));
    assert_eq!(employee.notes, user.notes);
    assert!(employee.flags.is_empty());
}
