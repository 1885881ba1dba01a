//! Scalar leaf values.

use std::fmt;

use crate::Kind;

/// A complex number with real and imaginary parts of type `T`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T> Complex<T> {
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }
}

/// The float operations complex rendering needs.
trait Part: Copy + fmt::Display {
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_sign_negative(self) -> bool;
    fn abs(self) -> Self;
}

macro_rules! impl_part {
    ($($ty:ty),*) => {
        $(
            impl Part for $ty {
                fn is_nan(self) -> bool {
                    <$ty>::is_nan(self)
                }
                fn is_infinite(self) -> bool {
                    <$ty>::is_infinite(self)
                }
                fn is_sign_negative(self) -> bool {
                    <$ty>::is_sign_negative(self)
                }
                fn abs(self) -> Self {
                    <$ty>::abs(self)
                }
            }

            impl fmt::Display for Complex<$ty> {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str("(")?;
                    write_part(f, self.re, false)?;
                    write_part(f, self.im, true)?;
                    f.write_str("i)")
                }
            }
        )*
    };
}

impl_part!(f32, f64);

/// Writes one part. The sign of negative zero is kept, infinities are `Inf`
/// and always signed, and `signed` forces a leading `+` on the rest.
fn write_part<T: Part>(f: &mut fmt::Formatter<'_>, v: T, signed: bool) -> fmt::Result {
    if v.is_nan() {
        return f.write_str(if signed { "+NaN" } else { "NaN" });
    }
    let sign = if v.is_sign_negative() {
        "-"
    } else if signed || v.is_infinite() {
        "+"
    } else {
        ""
    };
    if v.is_infinite() {
        write!(f, "{}Inf", sign)
    } else {
        write!(f, "{}{}", sign, v.abs())
    }
}

/// A primitive leaf value.
///
/// Widths are kept so that a value flattened out of a graph compares equal
/// to the value that went in.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Bool(bool),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Isize(isize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    Usize(usize),
    F32(f32),
    F64(f64),
    Complex64(Complex<f32>),
    Complex128(Complex<f64>),
    Text(String),
}

impl Primitive {
    /// Returns the shape of this primitive.
    pub const fn kind(&self) -> Kind {
        match self {
            Primitive::Bool(_) => Kind::Bool,
            Primitive::I8(_)
            | Primitive::I16(_)
            | Primitive::I32(_)
            | Primitive::I64(_)
            | Primitive::Isize(_) => Kind::Int,
            Primitive::U8(_)
            | Primitive::U16(_)
            | Primitive::U32(_)
            | Primitive::U64(_)
            | Primitive::Usize(_) => Kind::Uint,
            Primitive::F32(_) | Primitive::F64(_) => Kind::Float,
            Primitive::Complex64(_) | Primitive::Complex128(_) => Kind::Complex,
            Primitive::Text(_) => Kind::Text,
        }
    }

    /// Returns the Rust spelling of this primitive's type.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Primitive::Bool(_) => "bool",
            Primitive::I8(_) => "i8",
            Primitive::I16(_) => "i16",
            Primitive::I32(_) => "i32",
            Primitive::I64(_) => "i64",
            Primitive::Isize(_) => "isize",
            Primitive::U8(_) => "u8",
            Primitive::U16(_) => "u16",
            Primitive::U32(_) => "u32",
            Primitive::U64(_) => "u64",
            Primitive::Usize(_) => "usize",
            Primitive::F32(_) => "f32",
            Primitive::F64(_) => "f64",
            Primitive::Complex64(_) => "Complex<f32>",
            Primitive::Complex128(_) => "Complex<f64>",
            Primitive::Text(_) => "String",
        }
    }

    /// Returns the text if this is a text primitive.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Primitive::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Primitive::Bool(v) => write!(f, "{}", v),
            Primitive::I8(v) => write!(f, "{}", v),
            Primitive::I16(v) => write!(f, "{}", v),
            Primitive::I32(v) => write!(f, "{}", v),
            Primitive::I64(v) => write!(f, "{}", v),
            Primitive::Isize(v) => write!(f, "{}", v),
            Primitive::U8(v) => write!(f, "{}", v),
            Primitive::U16(v) => write!(f, "{}", v),
            Primitive::U32(v) => write!(f, "{}", v),
            Primitive::U64(v) => write!(f, "{}", v),
            Primitive::Usize(v) => write!(f, "{}", v),
            Primitive::F32(v) => write!(f, "{}", v),
            Primitive::F64(v) => write!(f, "{}", v),
            Primitive::Complex64(v) => write!(f, "{}", v),
            Primitive::Complex128(v) => write!(f, "{}", v),
            Primitive::Text(v) => f.write_str(v),
        }
    }
}

macro_rules! impl_from_primitive {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Primitive {
                fn from(v: $ty) -> Self {
                    Primitive::$variant(v)
                }
            }
        )*
    };
}

impl_from_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    Complex<f32> => Complex64,
    Complex<f64> => Complex128,
    String => Text,
}

impl From<&str> for Primitive {
    fn from(v: &str) -> Self {
        Primitive::Text(v.to_string())
    }
}
