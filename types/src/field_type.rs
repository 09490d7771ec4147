//! MySQL/MariaDB column type definitions
//!
//! Column types are grouped the same way the MySQL reference manual groups
//! them: numeric, string (text and binary), date/time and JSON.

/// Broad grouping of a [`FieldType`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldCategory {
    /// Integer, fixed-point, floating-point and bit types
    Numeric,
    /// Character, binary, blob, enum and set types
    Text,
    /// Date and time types
    DateTime,
    /// Structured document types (JSON)
    Document,
}

/// Enum representing supported MySQL/MariaDB column types.
///
/// # Examples
///
/// ```
/// use simple_migrations_types::{FieldCategory, FieldType};
///
/// assert_eq!(FieldType::VarChar.as_sql(), "VARCHAR");
/// assert_eq!(FieldType::parse("mediumint"), Some(FieldType::MediumInt));
/// assert_eq!(FieldType::Json.category(), FieldCategory::Document);
/// assert!(FieldType::Enum.takes_values());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum FieldType {
    // Numeric
    TinyInt,
    SmallInt,
    MediumInt,
    Int,
    BigInt,
    Decimal,
    Float,
    Double,
    Bit,

    // Text and binary
    Char,
    VarChar,
    TinyText,
    Text,
    MediumText,
    LongText,
    Binary,
    VarBinary,
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,
    Enum,
    Set,

    // Date and time
    Date,
    DateTime,
    Timestamp,
    Time,
    Year,

    // Documents
    Json,
}

impl FieldType {
    /// Every supported type, grouped by category
    pub const ALL: [FieldType; 29] = [
        FieldType::TinyInt,
        FieldType::SmallInt,
        FieldType::MediumInt,
        FieldType::Int,
        FieldType::BigInt,
        FieldType::Decimal,
        FieldType::Float,
        FieldType::Double,
        FieldType::Bit,
        FieldType::Char,
        FieldType::VarChar,
        FieldType::TinyText,
        FieldType::Text,
        FieldType::MediumText,
        FieldType::LongText,
        FieldType::Binary,
        FieldType::VarBinary,
        FieldType::TinyBlob,
        FieldType::Blob,
        FieldType::MediumBlob,
        FieldType::LongBlob,
        FieldType::Enum,
        FieldType::Set,
        FieldType::Date,
        FieldType::DateTime,
        FieldType::Timestamp,
        FieldType::Time,
        FieldType::Year,
        FieldType::Json,
    ];

    /// Get the SQL keyword for this type (always upper case)
    #[must_use]
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Self::TinyInt => "TINYINT",
            Self::SmallInt => "SMALLINT",
            Self::MediumInt => "MEDIUMINT",
            Self::Int => "INT",
            Self::BigInt => "BIGINT",
            Self::Decimal => "DECIMAL",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::Bit => "BIT",
            Self::Char => "CHAR",
            Self::VarChar => "VARCHAR",
            Self::TinyText => "TINYTEXT",
            Self::Text => "TEXT",
            Self::MediumText => "MEDIUMTEXT",
            Self::LongText => "LONGTEXT",
            Self::Binary => "BINARY",
            Self::VarBinary => "VARBINARY",
            Self::TinyBlob => "TINYBLOB",
            Self::Blob => "BLOB",
            Self::MediumBlob => "MEDIUMBLOB",
            Self::LongBlob => "LONGBLOB",
            Self::Enum => "ENUM",
            Self::Set => "SET",
            Self::Date => "DATE",
            Self::DateTime => "DATETIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Time => "TIME",
            Self::Year => "YEAR",
            Self::Json => "JSON",
        }
    }

    /// Get the category this type belongs to
    #[must_use]
    pub const fn category(&self) -> FieldCategory {
        match self {
            Self::TinyInt
            | Self::SmallInt
            | Self::MediumInt
            | Self::Int
            | Self::BigInt
            | Self::Decimal
            | Self::Float
            | Self::Double
            | Self::Bit => FieldCategory::Numeric,
            Self::Char
            | Self::VarChar
            | Self::TinyText
            | Self::Text
            | Self::MediumText
            | Self::LongText
            | Self::Binary
            | Self::VarBinary
            | Self::TinyBlob
            | Self::Blob
            | Self::MediumBlob
            | Self::LongBlob
            | Self::Enum
            | Self::Set => FieldCategory::Text,
            Self::Date | Self::DateTime | Self::Timestamp | Self::Time | Self::Year => {
                FieldCategory::DateTime
            }
            Self::Json => FieldCategory::Document,
        }
    }

    /// Returns `true` for types declared with a list of allowed values
    /// (`ENUM` and `SET`) rather than a size
    #[must_use]
    pub const fn takes_values(&self) -> bool {
        matches!(self, Self::Enum | Self::Set)
    }

    /// Parse a type keyword (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("integer") {
            return Some(Self::Int);
        }
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_sql().eq_ignore_ascii_case(s))
    }
}

impl core::fmt::Display for FieldType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_sql())
    }
}

impl core::str::FromStr for FieldType {
    type Err = FieldTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::parse(s).ok_or_else(|| FieldTypeParseError(s.to_string()))
    }
}

/// Error returned when parsing an unknown column type keyword
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTypeParseError(pub String);

impl core::fmt::Display for FieldTypeParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown column type `{}`", self.0)
    }
}

impl std::error::Error for FieldTypeParseError {}
