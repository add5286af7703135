//! Value types and the slots the binder writes into.
//!
//! Every argument declares one of four [`ValueType`]s. Raw tokens are coerced
//! into a [`Value`] of that type, then handed to the field's [`ArgSlot`].
//!
//! Slot implementations are provided for `String`, the primitive integer and
//! float types, `bool`, and `Option<T>` wrapping any of those.

use serde::Serialize;

/// The declared type of an argument's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ValueType {
    String,
    Int,
    Float,
    Bool,
}

impl ValueType {
    /// Returns a lowercase name suitable for messages and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Bool => "bool",
        }
    }

    /// Coerces a raw token into a value of this type.
    ///
    /// Returns `None` when the token is not a valid literal for the type.
    ///
    /// ```
    /// use argmark::{Value, ValueType};
    ///
    /// assert_eq!(ValueType::Int.coerce("42"), Some(Value::Int(42)));
    /// assert_eq!(ValueType::Int.coerce("abc"), None);
    /// assert_eq!(ValueType::Bool.coerce("TRUE"), Some(Value::Bool(true)));
    /// ```
    pub fn coerce(&self, raw: &str) -> Option<Value> {
        match self {
            ValueType::String => Some(Value::String(raw.to_string())),
            ValueType::Int => raw.parse::<i128>().ok().map(Value::Int),
            ValueType::Float => raw.parse::<f64>().ok().map(Value::Float),
            ValueType::Bool => {
                if raw.eq_ignore_ascii_case("true") {
                    Some(Value::Bool(true))
                } else if raw.eq_ignore_ascii_case("false") {
                    Some(Value::Bool(false))
                } else {
                    None
                }
            }
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A coerced argument value, ready to be stored in a slot.
///
/// Integers are held as `i128` so that every primitive integer slot, up to
/// `u64`, can range-check the literal against its own width.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    Int(i128),
    Float(f64),
    Bool(bool),
}

impl Value {
    /// Returns the type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::String(_) => ValueType::String,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Bool(_) => ValueType::Bool,
        }
    }
}

/// A field type that can receive argument values.
///
/// The `#[derive(Args)]` macro reads [`ArgValue::VALUE_TYPE`] to build each
/// declaration, so a field whose type does not implement this trait is
/// rejected at compile time.
pub trait ArgValue {
    /// The value type declared for fields of this type.
    const VALUE_TYPE: ValueType;

    /// Stores `value` in place.
    ///
    /// Returns `false` and leaves `self` untouched when the value cannot be
    /// represented, either because it has the wrong type or because it is
    /// out of range for the target.
    fn assign(&mut self, value: Value) -> bool;
}

/// Object-safe view of a field the binder can write into.
///
/// Blanket-implemented for every [`ArgValue`]. Manual [`Args`](crate::Args)
/// implementations hand these out from `slot_mut`.
pub trait ArgSlot {
    /// The value type this slot accepts.
    fn value_type(&self) -> ValueType;

    /// The Rust type name of the slot, for error messages.
    fn type_name(&self) -> &'static str;

    /// Stores `value`, returning `false` if it was rejected.
    fn assign_value(&mut self, value: Value) -> bool;
}

impl<T: ArgValue> ArgSlot for T {
    fn value_type(&self) -> ValueType {
        T::VALUE_TYPE
    }

    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn assign_value(&mut self, value: Value) -> bool {
        self.assign(value)
    }
}

impl ArgValue for String {
    const VALUE_TYPE: ValueType = ValueType::String;

    fn assign(&mut self, value: Value) -> bool {
        match value {
            Value::String(s) => {
                *self = s;
                true
            }
            _ => false,
        }
    }
}

impl ArgValue for bool {
    const VALUE_TYPE: ValueType = ValueType::Bool;

    fn assign(&mut self, value: Value) -> bool {
        match value {
            Value::Bool(b) => {
                *self = b;
                true
            }
            _ => false,
        }
    }
}

macro_rules! impl_int_value {
    ($($t:ty),*) => {
        $(
            impl ArgValue for $t {
                const VALUE_TYPE: ValueType = ValueType::Int;

                fn assign(&mut self, value: Value) -> bool {
                    match value {
                        Value::Int(n) => match <$t>::try_from(n) {
                            Ok(v) => {
                                *self = v;
                                true
                            }
                            Err(_) => false,
                        },
                        _ => false,
                    }
                }
            }
        )*
    };
}

impl_int_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ArgValue for f64 {
    const VALUE_TYPE: ValueType = ValueType::Float;

    fn assign(&mut self, value: Value) -> bool {
        match value {
            Value::Float(f) => {
                *self = f;
                true
            }
            _ => false,
        }
    }
}

impl ArgValue for f32 {
    const VALUE_TYPE: ValueType = ValueType::Float;

    fn assign(&mut self, value: Value) -> bool {
        match value {
            // Finite input that overflows f32 would otherwise become inf.
            Value::Float(f) if f.is_finite() && !(f as f32).is_finite() => false,
            Value::Float(f) => {
                *self = f as f32;
                true
            }
            _ => false,
        }
    }
}

impl<T: ArgValue + Default> ArgValue for Option<T> {
    const VALUE_TYPE: ValueType = T::VALUE_TYPE;

    fn assign(&mut self, value: Value) -> bool {
        let mut inner = T::default();
        if inner.assign(value) {
            *self = Some(inner);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coerce_string_verbatim() {
        assert_eq!(
            ValueType::String.coerce(" spaced "),
            Some(Value::String(" spaced ".into()))
        );
    }

    #[test]
    fn test_coerce_int() {
        assert_eq!(ValueType::Int.coerce("42"), Some(Value::Int(42)));
        assert_eq!(ValueType::Int.coerce("-7"), Some(Value::Int(-7)));
        assert_eq!(ValueType::Int.coerce("4.2"), None);
        assert_eq!(ValueType::Int.coerce("abc"), None);
    }

    #[test]
    fn test_coerce_float() {
        assert_eq!(ValueType::Float.coerce("2.5"), Some(Value::Float(2.5)));
        assert_eq!(ValueType::Float.coerce("3"), Some(Value::Float(3.0)));
        assert_eq!(ValueType::Float.coerce("x1"), None);
    }

    #[test]
    fn test_coerce_bool_case_insensitive() {
        assert_eq!(ValueType::Bool.coerce("True"), Some(Value::Bool(true)));
        assert_eq!(ValueType::Bool.coerce("FALSE"), Some(Value::Bool(false)));
        assert_eq!(ValueType::Bool.coerce("yes"), None);
        assert_eq!(ValueType::Bool.coerce("1"), None);
    }

    #[test]
    fn test_int_slot_range_check() {
        let mut small: u8 = 3;
        assert!(!small.assign(Value::Int(300)));
        assert_eq!(small, 3);
        assert!(!small.assign(Value::Int(-1)));
        assert!(small.assign(Value::Int(200)));
        assert_eq!(small, 200);
    }

    #[test]
    fn test_int_slot_full_width() {
        let raw = u64::MAX.to_string();
        let value = ValueType::Int.coerce(&raw).unwrap();
        assert_eq!(value.value_type(), ValueType::Int);

        let mut size: u64 = 0;
        assert!(size.assign(value.clone()));
        assert_eq!(size, u64::MAX);

        let mut signed: i64 = 1;
        assert!(!signed.assign(value));
        assert_eq!(signed, 1);
    }

    #[test]
    fn test_f32_slot_rejects_overflow() {
        let mut ratio = 0.5f32;
        assert!(!ratio.assign(Value::Float(1e300)));
        assert_eq!(ratio, 0.5);

        assert!(ratio.assign(Value::Float(f64::INFINITY)));
        assert!(ratio.is_infinite());
    }

    #[test]
    fn test_value_type_of_coerced_values() {
        assert_eq!(Value::Float(1.0).value_type(), ValueType::Float);
        assert_eq!(Value::Bool(true).value_type(), ValueType::Bool);
        assert_eq!(Value::String("x".into()).value_type(), ValueType::String);
    }

    #[test]
    fn test_slot_rejects_wrong_type() {
        let mut name = String::from("keep");
        assert!(!name.assign(Value::Int(1)));
        assert_eq!(name, "keep");
    }

    #[test]
    fn test_option_slot_wraps_value() {
        let mut port: Option<u16> = None;
        assert!(port.assign(Value::Int(8080)));
        assert_eq!(port, Some(8080));

        let mut missing: Option<u16> = None;
        assert!(!missing.assign(Value::Int(-5)));
        assert_eq!(missing, None);
    }

    #[test]
    fn test_dyn_slot_reports_type() {
        let mut ratio = 0.5f32;
        let slot: &mut dyn ArgSlot = &mut ratio;
        assert_eq!(slot.value_type(), ValueType::Float);
        assert_eq!(slot.type_name(), "f32");
        assert!(slot.assign_value(Value::Float(0.25)));
        assert_eq!(ratio, 0.25);
    }
}
