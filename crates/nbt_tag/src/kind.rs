use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::{Error, Result};

/// One of the eleven NBT tag kinds.
///
/// The discriminant of each variant is its type code on the wire, so
/// `kind as u8` and [`TagKind::code`] always agree.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[repr(u8)]
pub enum TagKind {
    // Variant order is significant!
    /// Terminates the children of a compound. Never carries a payload.
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    ByteArray = 7,
    String = 8,
    List = 9,
    Compound = 10,
}

impl TagKind {
    /// The number of tag kinds.
    pub const COUNT: usize = 11;

    /// Every tag kind, ordered by type code.
    pub const ALL: [TagKind; Self::COUNT] = [
        TagKind::End,
        TagKind::Byte,
        TagKind::Short,
        TagKind::Int,
        TagKind::Long,
        TagKind::Float,
        TagKind::Double,
        TagKind::ByteArray,
        TagKind::String,
        TagKind::List,
        TagKind::Compound,
    ];

    /// Returns the canonical display name, e.g. `TAG_Byte_Array`.
    pub const fn name(self) -> &'static str {
        match self {
            TagKind::End => "TAG_End",
            TagKind::Byte => "TAG_Byte",
            TagKind::Short => "TAG_Short",
            TagKind::Int => "TAG_Int",
            TagKind::Long => "TAG_Long",
            TagKind::Float => "TAG_Float",
            TagKind::Double => "TAG_Double",
            TagKind::ByteArray => "TAG_Byte_Array",
            TagKind::String => "TAG_String",
            TagKind::List => "TAG_List",
            TagKind::Compound => "TAG_Compound",
        }
    }

    /// Returns the type code written on the wire before a tag of this kind.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up the kind for a type code read off the wire.
    ///
    /// Only `0..=10` are valid. Anything else is rejected with
    /// [`Error::InvalidTypeCode`].
    pub fn from_code(code: u8) -> Result<Self> {
        match Self::ALL.get(usize::from(code)) {
            Some(&kind) => Ok(kind),
            None => Err(invalid_code(i128::from(code))),
        }
    }

    /// Like [`TagKind::from_code`], but for positions where the sentinel is
    /// not allowed, such as the element kind of a non-empty list.
    pub fn from_value_code(code: u8) -> Result<Self> {
        match Self::from_code(code)? {
            TagKind::End => {
                trace!("rejected TAG_End in value position");
                Err(Error::UnexpectedEnd)
            }
            kind => Ok(kind),
        }
    }

    /// Looks up the kind with the given canonical display name. The match is
    /// exact and case-sensitive.
    pub fn from_name(name: &str) -> Result<Self> {
        match Self::ALL.into_iter().find(|kind| kind.name() == name) {
            Some(kind) => Ok(kind),
            None => {
                trace!(name, "rejected tag kind name");
                Err(Error::InvalidTagKind(name.into()))
            }
        }
    }

    /// Returns `true` for the `TAG_End` sentinel.
    pub const fn is_end(self) -> bool {
        matches!(self, TagKind::End)
    }

    /// Returns the size in bytes of the payload of this kind when it is
    /// fixed, or `None` for the variable-length kinds.
    ///
    /// `TAG_End` has a fixed payload of zero bytes.
    pub const fn payload_size(self) -> Option<usize> {
        match self {
            TagKind::End => Some(0),
            TagKind::Byte => Some(1),
            TagKind::Short => Some(2),
            TagKind::Int | TagKind::Float => Some(4),
            TagKind::Long | TagKind::Double => Some(8),
            TagKind::ByteArray | TagKind::String | TagKind::List | TagKind::Compound => None,
        }
    }
}

fn invalid_code(code: i128) -> Error {
    trace!(%code, "rejected tag type code");
    Error::InvalidTypeCode(code)
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TagKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl From<TagKind> for u8 {
    fn from(kind: TagKind) -> Self {
        kind.code()
    }
}

impl TryFrom<u8> for TagKind {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

// The full value is checked before narrowing so that e.g. `256_u16` is not
// mistaken for `TAG_End`.
macro_rules! impl_try_from_int {
    ($($ty:ty => $widen:expr),* $(,)?) => {
        $(
            impl TryFrom<$ty> for TagKind {
                type Error = Error;

                fn try_from(code: $ty) -> Result<Self, Self::Error> {
                    match u8::try_from(code) {
                        Ok(code) => Self::from_code(code),
                        Err(_) => Err(invalid_code($widen(code))),
                    }
                }
            }
        )*
    };
}

impl_try_from_int! {
    i8 => i128::from,
    i16 => i128::from,
    i32 => i128::from,
    i64 => i128::from,
    u16 => i128::from,
    u32 => i128::from,
    u64 => i128::from,
    usize => |code: usize| code as i128,
}
