mod common;

use core::time::Duration;

use common::{Employee, User};
use vc_copier::{Copier, CopyOptions, copy};
use vc_reflect::Reflect;
use vc_reflect::derive::Reflect;
use vc_reflect::ops::{AssignError, ReflectAssign};

#[derive(Reflect, Default, Debug, PartialEq)]
struct Base {
    base_field1: i32,
    base_field2: i32,
}

#[derive(Reflect, Default, Debug, PartialEq)]
struct Embed {
    embed_field1: i32,
    embed_field2: i32,
    #[reflect(embed)]
    base: Base,
}

#[test]
fn embedded_members_are_promoted() {
    let embed = Embed {
        embed_field1: 3,
        embed_field2: 4,
        base: Base {
            base_field1: 1,
            base_field2: 2,
        },
    };

    let mut base = Base::default();
    copy(&mut base, &embed).unwrap();
    assert_eq!(
        base,
        Base {
            base_field1: 1,
            base_field2: 2
        }
    );

    let mut embed = Embed::default();
    copy(
        &mut embed,
        &Base {
            base_field1: 5,
            base_field2: 6,
        },
    )
    .unwrap();
    assert_eq!(embed.base.base_field1, 5);
    assert_eq!(embed.base.base_field2, 6);
    assert_eq!(embed.embed_field1, 0);
}

#[test]
fn shallow_member_shadows_promoted_one() {
    #[derive(Reflect, Default)]
    struct Shadowing {
        base_field1: i32,
        #[reflect(embed)]
        base: Base,
    }

    let source = Shadowing {
        base_field1: 10,
        base: Base {
            base_field1: 20,
            base_field2: 30,
        },
    };

    let mut base = Base::default();
    copy(&mut base, &source).unwrap();
    assert_eq!(base.base_field1, 10);
    assert_eq!(base.base_field2, 30);
}

#[derive(Reflect, Default)]
struct SameName1 {
    a: String,
    b: i64,
    c: Duration,
}

#[derive(Reflect, Default)]
struct SameName2 {
    a: String,
    b: Duration,
    c: i64,
}

#[test]
fn same_name_different_types_are_skipped() {
    let source = SameName1 {
        a: "123".into(),
        b: 2,
        c: Duration::from_millis(1500),
    };
    let mut dest = SameName2 {
        c: 9,
        ..Default::default()
    };

    let stats = Copier::default().copy(&mut dest, &source).unwrap();

    assert_eq!(dest.a, "123");
    assert_eq!(dest.b, Duration::ZERO);
    assert_eq!(dest.c, 9);
    assert_eq!((stats.copied, stats.skipped), (1, 2));
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(assign)]
struct ScannerValue {
    v: i32,
}

impl ReflectAssign for ScannerValue {
    fn assign_from(&mut self, _value: &dyn Reflect) -> Result<(), AssignError> {
        Err(AssignError::rejected("I failed"))
    }
}

#[derive(Reflect, Default)]
struct ScannerStruct {
    v: Option<ScannerValue>,
}

#[derive(Reflect, Default)]
struct ScannerStructTo {
    v: Option<ScannerValue>,
}

#[test]
fn failing_hook_falls_back_to_structural_copy() {
    let source = ScannerStruct {
        v: Some(ScannerValue { v: 12 }),
    };
    let mut dest = ScannerStructTo::default();

    let stats = Copier::default().copy(&mut dest, &source).unwrap();

    assert_eq!(dest.v, Some(ScannerValue { v: 12 }));
    assert_eq!(stats.hook_failures, 1);
}

#[derive(Reflect, Default, Debug, PartialEq)]
#[reflect(assign)]
struct Tag {
    text: String,
}

impl ReflectAssign for Tag {
    fn assign_from(&mut self, value: &dyn Reflect) -> Result<(), AssignError> {
        match value.downcast_ref::<String>() {
            Some(text) => {
                self.text = format!("#{text}");
                Ok(())
            }
            None => Err(AssignError::unsupported::<Self>(value)),
        }
    }
}

#[test]
fn assign_hook_is_preferred() {
    #[derive(Reflect, Default)]
    struct Plain {
        tag: String,
    }

    #[derive(Reflect, Default)]
    struct Tagged {
        tag: Tag,
    }

    let mut tagged = Tagged::default();
    copy(&mut tagged, &Plain { tag: "rust".into() }).unwrap();
    assert_eq!(tagged.tag.text, "#rust");

    let mut tag = Tag::default();
    copy(&mut tag, &String::from("root")).unwrap();
    assert_eq!(tag.text, "#root");

    // A struct source is rejected by the hook, then copied by name.
    let mut tagged = Tagged::default();
    let source = Tagged {
        tag: Tag { text: "raw".into() },
    };
    let stats = Copier::default().copy(&mut tagged, &source).unwrap();
    assert_eq!(tagged.tag.text, "raw");
    assert_eq!(stats.hook_failures, 1);
}

#[test]
fn getter_fills_missing_fields_only() {
    #[derive(Reflect, Default)]
    #[reflect(getter(double_age))]
    struct WithBoth {
        age: i32,
        double_age: i32,
    }

    impl WithBoth {
        fn double_age(&self) -> i32 {
            2 * self.age
        }
    }

    let mut employee = Employee::default();
    copy(
        &mut employee,
        &WithBoth {
            age: 4,
            double_age: 1,
        },
    )
    .unwrap();
    assert_eq!(employee.age, 4);
    assert_eq!(employee.double_age, 1);

    let mut employee = Employee::default();
    copy(
        &mut employee,
        &User {
            age: 4,
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(employee.double_age, 8);
}

#[test]
fn setter_runs_next_to_field_copy() {
    #[derive(Reflect, Default)]
    #[reflect(setter(name = rename))]
    struct Renamed {
        name: String,
        history: Vec<String>,
    }

    impl Renamed {
        fn rename(&mut self, name: String) -> usize {
            self.history.push(name);
            self.history.len()
        }
    }

    let user = User {
        name: "Ann".into(),
        ..Default::default()
    };
    let mut renamed = Renamed::default();
    copy(&mut renamed, &user).unwrap();

    assert_eq!(renamed.name, "Ann");
    assert_eq!(renamed.history, ["Ann"]);
}

#[test]
fn setter_skips_empty_values() {
    let copier = Copier::new(CopyOptions::new().with_ignore_empty(true));
    let mut employee = Employee {
        super_rule: "Super Admin".into(),
        ..Default::default()
    };

    copier.copy(&mut employee, &User::default()).unwrap();
    assert_eq!(employee.super_rule, "Super Admin");

    copy(&mut employee, &User::default()).unwrap();
    assert_eq!(employee.super_rule, "Super ");
}

#[test]
fn promoted_methods() {
    #[derive(Reflect, Default)]
    struct Manager {
        #[reflect(embed)]
        employee: Employee,
        reports: u32,
    }

    let user = common::jinzhu();
    let mut manager = Manager::default();
    copy(&mut manager, &user).unwrap();

    common::check_employee(&manager.employee, &user);
    assert_eq!(manager.reports, 0);
}
