//! Form field rules
//!
//! Small predicates for inline form feedback. They are advisory: the board
//! manager never enforces them.

use thiserror::Error;

/// Message shown next to an empty required field
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// A field rule failure, displayed as-is to the user
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldRuleError {
    /// The field was left empty
    #[error("This field is required")]
    Required,
}

/// A form value that can be checked for presence
pub trait FieldValue {
    /// Whether the value counts as filled in
    fn is_filled(&self) -> bool;
}

impl FieldValue for str {
    fn is_filled(&self) -> bool {
        !self.is_empty()
    }
}

impl FieldValue for String {
    fn is_filled(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> FieldValue for [T] {
    fn is_filled(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> FieldValue for Vec<T> {
    fn is_filled(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn is_filled(&self) -> bool {
        self.as_ref().is_some_and(FieldValue::is_filled)
    }
}

impl<T: FieldValue + ?Sized> FieldValue for &T {
    fn is_filled(&self) -> bool {
        (**self).is_filled()
    }
}

macro_rules! integer_field_value {
    ($($ty:ty),*) => {
        $(
            impl FieldValue for $ty {
                fn is_filled(&self) -> bool {
                    true
                }
            }
        )*
    };
}

// Zero is a real answer for a numeric field.
integer_field_value!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl FieldValue for f32 {
    fn is_filled(&self) -> bool {
        !self.is_nan()
    }
}

impl FieldValue for f64 {
    fn is_filled(&self) -> bool {
        !self.is_nan()
    }
}

/// Require a value: a non-empty string, any number, or a non-empty list
pub fn required<V: FieldValue + ?Sized>(value: &V) -> Result<(), FieldRuleError> {
    if value.is_filled() {
        Ok(())
    } else {
        Err(FieldRuleError::Required)
    }
}
