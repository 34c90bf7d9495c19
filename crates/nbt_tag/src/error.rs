use thiserror::Error;

/// Errors produced while classifying tag kinds.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A kind was referenced by a name that is not one of the eleven
    /// canonical display names.
    #[error("invalid tag kind \"{0}\"")]
    InvalidTagKind(Box<str>),
    /// A type code outside of `0..=10`. Holds the value exactly as it was
    /// given, before any narrowing.
    #[error("invalid tag type code `{0}`")]
    InvalidTypeCode(i128),
    /// `TAG_End` appeared where a value-bearing tag was required.
    #[error("unexpected TAG_End where a value-bearing tag was expected")]
    UnexpectedEnd,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
