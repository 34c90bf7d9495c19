//! Compile-time kind lookup for Rust payload types.
//!
//! Types whose NBT payload shape is unambiguous implement [`Tagged`], so
//! encoders can find the kind of a value without inspecting it.
//!
//! ```
//! use nbt_tag::{TagKind, Tagged};
//!
//! assert_eq!(i16::KIND, TagKind::Short);
//! assert_eq!(<str as Tagged>::KIND.name(), "TAG_String");
//! ```

use crate::TagKind;

/// A Rust type that is always encoded as the payload of one tag kind.
pub trait Tagged {
    const KIND: TagKind;
}

macro_rules! impl_tagged {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Tagged for $ty {
                const KIND: TagKind = TagKind::$kind;
            }
        )*
    };
}

impl_tagged! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    [i8] => ByteArray,
    Vec<i8> => ByteArray,
    str => String,
    String => String,
}

impl<T: Tagged + ?Sized> Tagged for &T {
    const KIND: TagKind = T::KIND;
}
