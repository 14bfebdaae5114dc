/*!
Provides the crate's `Error` and `Result` types as well as helper functions.

 */

use std::fmt::Display;

// ------------------------------------------------------------------------------------------------
// Public Types
// ------------------------------------------------------------------------------------------------

///
/// The Error type for this crate.
///
#[derive(Debug)]
pub enum Error {
    /// A typed literal's datatype node was not a URI (or Curie).
    InvalidDatatype { datatype: String },
    /// A typed literal's datatype was `rdf:langString`, which is reserved
    /// for language-tagged literals.
    LangStringAsDatatype,
    /// The string value given for a language tag is not valid BCP 47.
    InvalidLanguageTag { tag: String },
    /// A non-finite (`NaN` or infinite) value was passed to `new_decimal`.
    NonFiniteDecimal,
    /// `new_resolved_uri` produced a result lacking a scheme.
    NotAbsolute { uri: String },
    /// An error parsing a language-tag string.
    LanguageTag(::language_tags::ParseError),
}

///
/// A Result type that specifically uses this crate's Error.
///
pub type Result<T> = std::result::Result<T, Error>;

// ------------------------------------------------------------------------------------------------
// Public Functions
// ------------------------------------------------------------------------------------------------

///
/// Create Error object.
///
#[inline(always)]
pub fn invalid_datatype_error<S>(datatype: S) -> Error
where
    S: Into<String>,
{
    Error::InvalidDatatype {
        datatype: datatype.into(),
    }
}

///
/// Create Error object.
///
#[inline(always)]
pub fn lang_string_as_datatype_error() -> Error {
    Error::LangStringAsDatatype
}

///
/// Create Error object.
///
#[inline(always)]
pub fn invalid_language_tag_error<S>(tag: S) -> Error
where
    S: Into<String>,
{
    Error::InvalidLanguageTag { tag: tag.into() }
}

///
/// Create Error object.
///
#[inline(always)]
pub fn non_finite_decimal_error() -> Error {
    Error::NonFiniteDecimal
}

///
/// Create Error object.
///
#[inline(always)]
pub fn not_absolute_error<S>(uri: S) -> Error
where
    S: Into<String>,
{
    Error::NotAbsolute { uri: uri.into() }
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Error::InvalidDatatype { datatype } =>
                    format!("The datatype node `{datatype}` is not a URI or Curie."),
                Error::LangStringAsDatatype =>
                    "`rdf:langString` may not be used as a typed literal's datatype; use a language tag instead.".to_string(),
                Error::InvalidLanguageTag { tag } =>
                    format!("The String value `{tag}` is not a valid BCP 47 language tag."),
                Error::NonFiniteDecimal =>
                    "A non-finite value cannot be converted to a decimal lexical form.".to_string(),
                Error::NotAbsolute { uri } =>
                    format!("The resolved URI `{uri}` does not have a scheme."),
                Error::LanguageTag(source) =>
                    format!("An error occurred parsing a language tag; source: {source}"),
            }
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::LanguageTag(source) => Some(source),
            _ => None,
        }
    }
}

impl From<::language_tags::ParseError> for Error {
    fn from(source: ::language_tags::ParseError) -> Self {
        Self::LanguageTag(source)
    }
}
