//! The size-or-values argument of a column type

/// Either a display size (`VARCHAR(255)`) or a list of allowed values
/// (`ENUM('a', 'b')`).
///
/// # Examples
///
/// ```
/// use simple_migrations_types::FieldExtent;
///
/// assert_eq!(FieldExtent::from(255), FieldExtent::Size(255));
/// assert_eq!(
///     FieldExtent::from(["small", "large"]),
///     FieldExtent::Values(vec!["small".to_string(), "large".to_string()]),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldExtent {
    /// Numeric size, rendered as `(n)`
    Size(u32),
    /// Allowed values, rendered as a quoted list
    Values(Vec<String>),
}

impl FieldExtent {
    /// Build a value list from any sequence of strings
    pub fn values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldExtent::Values(values.into_iter().map(Into::into).collect())
    }

    /// The size, if this is a size extent
    #[must_use]
    pub fn size(&self) -> Option<u32> {
        match self {
            FieldExtent::Size(size) => Some(*size),
            FieldExtent::Values(_) => None,
        }
    }

    /// The value list, if this is a values extent
    #[must_use]
    pub fn as_values(&self) -> Option<&[String]> {
        match self {
            FieldExtent::Size(_) => None,
            FieldExtent::Values(values) => Some(values),
        }
    }
}

impl From<u32> for FieldExtent {
    fn from(size: u32) -> Self {
        FieldExtent::Size(size)
    }
}

impl From<Vec<String>> for FieldExtent {
    fn from(values: Vec<String>) -> Self {
        FieldExtent::Values(values)
    }
}

impl From<Vec<&str>> for FieldExtent {
    fn from(values: Vec<&str>) -> Self {
        FieldExtent::values(values)
    }
}

impl From<&[&str]> for FieldExtent {
    fn from(values: &[&str]) -> Self {
        FieldExtent::values(values.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for FieldExtent {
    fn from(values: [&str; N]) -> Self {
        FieldExtent::values(values)
    }
}
