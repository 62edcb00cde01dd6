//! Conversions between opaque scalar values.

use alloc::string::String;
use core::time::Duration;

use vc_reflect::Reflect;
use vc_reflect::ops::ReflectRef;

use crate::stats::{Outcome, Skip};

// -----------------------------------------------------------------------------
// Scalar

/// A scalar read from a reflected value, widened to its family's largest type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Scalar<'a> {
    Bool(bool),
    Char(char),
    Int(i128),
    UInt(u128),
    Float(f64),
    Str(&'a str),
}

macro_rules! read_as {
    ($value:ident => $($variant:ident($ty:ty)),+ $(,)?) => {{
        $(
            if let Some(v) = $value.downcast_ref::<$ty>() {
                return Some(Scalar::$variant((*v).into()));
            }
        )+
    }};
}

macro_rules! write_int {
    ($dst:ident, $n:ident => $($ty:ty),+ $(,)?) => {{
        $(
            if let Some(slot) = $dst.downcast_mut::<$ty>() {
                return match <$ty>::try_from($n) {
                    Ok(v) => {
                        *slot = v;
                        Outcome::Copied
                    }
                    Err(_) => Outcome::Skipped(Skip::OutOfRange),
                };
            }
        )+
    }};
}

impl<'a> Scalar<'a> {
    /// Reads a number, `bool`, `char`, `String` or `&str`.
    pub fn read(value: &'a dyn Reflect) -> Option<Self> {
        read_as!(value =>
            Int(i8), Int(i16), Int(i32), Int(i64), Int(i128),
            UInt(u8), UInt(u16), UInt(u32), UInt(u64), UInt(u128),
            Float(f32), Float(f64),
            Bool(bool), Char(char),
        );

        // `isize` and `usize` have no lossless `From` into the 128-bit types.
        if let Some(v) = value.downcast_ref::<isize>() {
            return Some(Scalar::Int(*v as i128));
        }
        if let Some(v) = value.downcast_ref::<usize>() {
            return Some(Scalar::UInt(*v as u128));
        }
        if let Some(v) = value.downcast_ref::<String>() {
            return Some(Scalar::Str(v.as_str()));
        }
        if let Some(v) = value.downcast_ref::<&'static str>() {
            return Some(Scalar::Str(*v));
        }
        None
    }

    /// Whether this is the zero value of its type.
    pub fn is_zero(self) -> bool {
        match self {
            Self::Bool(v) => !v,
            Self::Char(v) => v == '\0',
            Self::Int(v) => v == 0,
            Self::UInt(v) => v == 0,
            Self::Float(v) => v == 0.0,
            Self::Str(v) => v.is_empty(),
        }
    }

    /// Writes this scalar into `dst`, which must be a scalar slot.
    ///
    /// Integers convert when the value fits, integers and floats convert to
    /// floats (a finite value beyond the `f32` range is out of range),
    /// strings convert to `String`. `bool` and `char` only go to the
    /// same type, floats never go to integers.
    pub fn write(self, dst: &mut dyn Reflect) -> Outcome {
        match self {
            Self::Int(n) => {
                write_int!(dst, n => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
            }
            Self::UInt(n) => {
                write_int!(dst, n => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
            }
            Self::Str(s) => {
                if let Some(slot) = dst.downcast_mut::<String>() {
                    slot.clear();
                    slot.push_str(s);
                    return Outcome::Copied;
                }
            }
            Self::Bool(v) => {
                if let Some(slot) = dst.downcast_mut::<bool>() {
                    *slot = v;
                    return Outcome::Copied;
                }
            }
            Self::Char(v) => {
                if let Some(slot) = dst.downcast_mut::<char>() {
                    *slot = v;
                    return Outcome::Copied;
                }
            }
            Self::Float(_) => {}
        }

        let float = match self {
            Self::Int(n) => n as f64,
            Self::UInt(n) => n as f64,
            Self::Float(v) => v,
            _ => return Outcome::Skipped(Skip::Incompatible),
        };

        if let Some(slot) = dst.downcast_mut::<f64>() {
            *slot = float;
            Outcome::Copied
        } else if let Some(slot) = dst.downcast_mut::<f32>() {
            let narrow = float as f32;
            if narrow.is_infinite() && float.is_finite() {
                return Outcome::Skipped(Skip::OutOfRange);
            }
            *slot = narrow;
            Outcome::Copied
        } else {
            Outcome::Skipped(Skip::Incompatible)
        }
    }
}

// -----------------------------------------------------------------------------
// Emptiness

/// Whether `value` is the empty value of its type.
///
/// Empty lists, empty pointers and zero scalars are empty. Structs and
/// other opaque types never are.
pub(crate) fn is_empty(value: &dyn Reflect) -> bool {
    match value.reflect_ref() {
        ReflectRef::List(list) => list.is_empty(),
        ReflectRef::Pointer(ptr) => ptr.is_null(),
        ReflectRef::Struct(_) => false,
        ReflectRef::Opaque(value) => match Scalar::read(value) {
            Some(scalar) => scalar.is_zero(),
            None => value.downcast_ref::<Duration>().is_some_and(Duration::is_zero),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{Scalar, is_empty};
    use crate::stats::{Outcome, Skip};
    use core::time::Duration;
    use vc_reflect::Reflect;

    fn write(src: &dyn Reflect, dst: &mut dyn Reflect) -> Outcome {
        Scalar::read(src).unwrap().write(dst)
    }

    #[test]
    fn integers_convert_when_they_fit() {
        let mut small = 0_u8;
        assert_eq!(write(&200_i64, &mut small), Outcome::Copied);
        assert_eq!(small, 200);

        assert_eq!(write(&300_i64, &mut small), Outcome::Skipped(Skip::OutOfRange));
        assert_eq!(write(&-1_i32, &mut small), Outcome::Skipped(Skip::OutOfRange));
        assert_eq!(small, 200);

        let mut wide = 0_isize;
        assert_eq!(write(&u64::MAX, &mut wide), Outcome::Skipped(Skip::OutOfRange));
        assert_eq!(write(&-9_i8, &mut wide), Outcome::Copied);
        assert_eq!(wide, -9);
    }

    #[test]
    fn floats() {
        let mut float = 0.0_f32;
        assert_eq!(write(&3_u16, &mut float), Outcome::Copied);
        assert_eq!(float, 3.0);
        assert_eq!(write(&1.5_f64, &mut float), Outcome::Copied);
        assert_eq!(float, 1.5);

        assert_eq!(write(&1.0e300_f64, &mut float), Outcome::Skipped(Skip::OutOfRange));
        assert_eq!(float, 1.5);
        assert_eq!(write(&f64::INFINITY, &mut float), Outcome::Copied);
        assert!(float.is_infinite());

        let mut int = 1_i32;
        assert_eq!(write(&2.0_f64, &mut int), Outcome::Skipped(Skip::Incompatible));
        assert_eq!(int, 1);
    }

    #[test]
    fn strings_and_others() {
        let mut text = String::from("old");
        assert_eq!(write(&"new", &mut text), Outcome::Copied);
        assert_eq!(text, "new");

        let mut flag = false;
        assert_eq!(write(&true, &mut flag), Outcome::Copied);
        assert!(flag);
        assert_eq!(write(&1_u8, &mut flag), Outcome::Skipped(Skip::Incompatible));
        assert_eq!(write(&'x', &mut text), Outcome::Skipped(Skip::Incompatible));

        assert!(Scalar::read(&Duration::ZERO).is_none());
    }

    #[test]
    fn emptiness() {
        assert!(is_empty(&0_u32));
        assert!(is_empty(&String::new()));
        assert!(is_empty(&Vec::<u8>::new()));
        assert!(is_empty(&None::<i32>));
        assert!(is_empty(&Duration::ZERO));
        assert!(!is_empty(&0.5_f32));
        assert!(!is_empty(&vec![0_u8]));
        assert!(!is_empty(&Some(0_i32)));
    }
}
