//! [`Serialize`] and [`Deserialize`] for [`TagKind`].
//!
//! Human-readable formats use the display name (`"TAG_Compound"`) and compact
//! formats use the type code. Deserialization accepts either form and
//! validates it the same way [`TagKind::from_code`] and
//! [`TagKind::from_name`] do.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::TagKind;

impl Serialize for TagKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.serialize_str(self.name())
        } else {
            serializer.serialize_u8(self.code())
        }
    }
}

impl<'de> Deserialize<'de> for TagKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TagKindVisitor;

        impl<'de> Visitor<'de> for TagKindVisitor {
            type Value = TagKind;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "an NBT type code or tag kind name")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                TagKind::try_from(v).map_err(E::custom)
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                TagKind::try_from(v).map_err(E::custom)
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                TagKind::from_name(v).map_err(E::custom)
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_any(TagKindVisitor)
        } else {
            deserializer.deserialize_u8(TagKindVisitor)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use serde_test::{assert_de_tokens_error, assert_tokens, Configure, Token};

    use super::*;

    #[test]
    fn serializes_as_name() {
        assert_eq!(
            serde_json::to_value(TagKind::ByteArray).unwrap(),
            json!("TAG_Byte_Array")
        );
        assert_eq!(
            serde_json::to_string(&TagKind::ALL[..3]).unwrap(),
            r#"["TAG_End","TAG_Byte","TAG_Short"]"#
        );
    }

    #[test]
    fn deserializes_name_or_code() {
        for kind in TagKind::ALL {
            assert_eq!(
                serde_json::from_value::<TagKind>(json!(kind.name())).unwrap(),
                kind
            );
            assert_eq!(
                serde_json::from_value::<TagKind>(json!(kind.code())).unwrap(),
                kind
            );
        }
    }

    #[test]
    fn rejects_out_of_domain() {
        let err = serde_json::from_str::<TagKind>("11").unwrap_err();
        assert!(err.to_string().contains("invalid tag type code `11`"));

        let err = serde_json::from_str::<TagKind>("-1").unwrap_err();
        assert!(err.to_string().contains("invalid tag type code `-1`"));

        let err = serde_json::from_str::<TagKind>("\"TAG_Int_Array\"").unwrap_err();
        assert!(err.to_string().contains("invalid tag kind"));

        assert!(serde_json::from_str::<TagKind>("3.0").is_err());
    }

    #[test]
    fn compact_uses_code() {
        assert_tokens(&TagKind::Compound.compact(), &[Token::U8(10)]);
        assert_tokens(&TagKind::End.compact(), &[Token::U8(0)]);

        assert_de_tokens_error::<serde_test::Compact<TagKind>>(
            &[Token::U8(11)],
            "invalid tag type code `11`",
        );
    }

    #[test]
    fn readable_uses_name() {
        assert_tokens(
            &TagKind::ByteArray.readable(),
            &[Token::Str("TAG_Byte_Array")],
        );
    }
}
