//! Dynamically typed comparison operands.
//!
//! Assertions compare values of any `'static` type that is `PartialEq + Debug`.
//! Both sides are erased to `&dyn Operand`, so two values are equal only when
//! they share a dynamic type *and* compare equal under that type's `PartialEq`.
//! Keeping the dynamic type around lets a failed comparison point out that
//! `1i32` and `1usize` (or `"x"` and `String::from("x")`) never match.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// A value that can take part in an assertion.
///
/// Implemented for every `T: Any + PartialEq + Debug`; there is nothing to
/// implement by hand. The unit value `()` stands in for an absent ("nil")
/// operand.
///
/// `Any` requires `'static`, so values that borrow from a local, such as a
/// `&str` sliced out of a `String` or a `&[u8]` into a buffer, are not
/// operands. Compare an owned copy instead:
///
/// ```
/// use mighty::{Myt, Recorder};
///
/// let rec = Recorder::new();
/// let line = String::from("key=value");
/// let (key, _) = line.split_once('=').unwrap();
/// Myt::new(&rec).eq("key".to_string(), key.to_string(), None);
/// Myt::new(&rec).eq(b"key".to_vec(), key.as_bytes().to_vec(), None);
/// assert_eq!(rec.count(), 0);
/// ```
pub trait Operand: Any + Debug {
    /// The value as `Any`, for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Equality against another operand of possibly different type.
    fn dyn_eq(&self, other: &dyn Operand) -> bool;

    /// Human readable name of the dynamic type.
    fn type_name(&self) -> &'static str;

    /// Identity of the dynamic type.
    fn dyn_type_id(&self) -> TypeId;

    /// Whether this is the nil operand `()`.
    fn is_nil(&self) -> bool {
        self.dyn_type_id() == TypeId::of::<()>()
    }
}

impl<T> Operand for T
where
    T: Any + PartialEq + Debug,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn Operand) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn dyn_type_id(&self) -> TypeId {
        TypeId::of::<T>()
    }
}

/// Whether both operands are present and of different dynamic types.
pub(crate) fn types_differ(a: &dyn Operand, b: &dyn Operand) -> bool {
    !a.is_nil() && !b.is_nil() && a.dyn_type_id() != b.dyn_type_id()
}
