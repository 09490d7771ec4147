//! Column descriptors and their SQL rendering

use simple_migrations_types::{FieldExtent, FieldType};

use crate::sqlgen::{quote_identifier, quote_literal};

/// A single column of a [`Blueprint`](crate::Blueprint).
///
/// Fields are created by the blueprint's type methods and then refined with
/// chained modifiers. Modifiers only record values; conflicting combinations
/// are resolved when the field is rendered:
///
/// - enumerated values win over a size,
/// - `PRIMARY KEY` wins over `UNIQUE KEY`.
///
/// ```
/// use simple_migrations_schema::Field;
/// use simple_migrations_types::FieldType;
///
/// let mut status = Field::new("status", FieldType::Enum);
/// status
///     .values(["active", "banned"])
///     .default_value("active")
///     .comment("account state");
///
/// assert_eq!(
///     status.to_sql(),
///     "`status` ENUM( 'active', 'banned' ) NOT NULL DEFAULT 'active' COMMENT 'account state'"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    name: String,
    field_type: FieldType,
    size: Option<u32>,
    values: Option<Vec<String>>,
    nullable: bool,
    auto_increment: bool,
    unique: bool,
    primary: bool,
    default: Option<String>,
    comment: Option<String>,
}

impl Field {
    /// Create a `NOT NULL` field with no size, default or constraints
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            size: None,
            values: None,
            nullable: false,
            auto_increment: false,
            unique: false,
            primary: false,
            default: None,
            comment: None,
        }
    }

    // =========================================================================
    // Modifiers
    // =========================================================================

    /// Set the column name
    pub fn rename(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Set the column type
    pub fn retype(&mut self, field_type: FieldType) -> &mut Self {
        self.field_type = field_type;
        self
    }

    /// Set the display size, rendered as `(size)`. A size of zero renders nothing.
    pub fn size(&mut self, size: u32) -> &mut Self {
        self.size = Some(size);
        self
    }

    /// Set the allowed values (`ENUM`/`SET`). Takes precedence over a size.
    pub fn values<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Apply a size-or-values extent
    pub fn extent(&mut self, extent: FieldExtent) -> &mut Self {
        match extent {
            FieldExtent::Size(size) => self.size(size),
            FieldExtent::Values(values) => {
                self.values = Some(values);
                self
            }
        }
    }

    /// Allow or forbid `NULL`
    pub fn nullable(&mut self, nullable: bool) -> &mut Self {
        self.nullable = nullable;
        self
    }

    /// Mark the column `AUTO_INCREMENT`
    pub fn auto_increment(&mut self, auto_increment: bool) -> &mut Self {
        self.auto_increment = auto_increment;
        self
    }

    /// Mark the column `UNIQUE KEY`. Ignored when the column is primary.
    pub fn unique(&mut self, unique: bool) -> &mut Self {
        self.unique = unique;
        self
    }

    /// Mark the column `PRIMARY KEY`
    pub fn primary(&mut self, primary: bool) -> &mut Self {
        self.primary = primary;
        self
    }

    /// Set the default value.
    ///
    /// The value's display text is always rendered as a quoted literal, so
    /// `0`, `""` and `false` all produce a `DEFAULT` clause.
    pub fn default_value(&mut self, value: impl ToString) -> &mut Self {
        self.default = Some(value.to_string());
        self
    }

    /// Set the column comment
    pub fn comment(&mut self, comment: impl Into<String>) -> &mut Self {
        self.comment = Some(comment.into());
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the column name
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the column type
    #[inline]
    #[must_use]
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    #[inline]
    #[must_use]
    pub fn declared_size(&self) -> Option<u32> {
        self.size
    }

    #[inline]
    #[must_use]
    pub fn declared_values(&self) -> Option<&[String]> {
        self.values.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    #[inline]
    #[must_use]
    pub fn is_auto_increment(&self) -> bool {
        self.auto_increment
    }

    #[inline]
    #[must_use]
    pub fn is_unique(&self) -> bool {
        self.unique
    }

    #[inline]
    #[must_use]
    pub fn is_primary(&self) -> bool {
        self.primary
    }

    /// The default literal, if one was set
    #[inline]
    #[must_use]
    pub fn default_literal(&self) -> Option<&str> {
        self.default.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn comment_text(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    // =========================================================================
    // SQL Generation
    // =========================================================================

    /// Generate the column definition used inside `CREATE TABLE ( ... )`
    #[must_use]
    pub fn to_sql(&self) -> String {
        let mut sql = format!(
            "{} {}{}",
            quote_identifier(&self.name),
            self.field_type.as_sql(),
            self.extent_sql()
        );

        sql.push_str(if self.nullable { " NULL" } else { " NOT NULL" });

        if let Some(default) = &self.default {
            sql.push_str(" DEFAULT ");
            sql.push_str(&quote_literal(default));
        }

        if self.auto_increment {
            sql.push_str(" AUTO_INCREMENT");
        }

        if self.primary {
            sql.push_str(" PRIMARY KEY");
        } else if self.unique {
            sql.push_str(" UNIQUE KEY");
        }

        if let Some(comment) = &self.comment {
            sql.push_str(" COMMENT ");
            sql.push_str(&quote_literal(comment));
        }

        sql
    }

    fn extent_sql(&self) -> String {
        match (&self.values, self.size) {
            (Some(values), _) => {
                let quoted = values
                    .iter()
                    .map(|value| quote_literal(value))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("( {} )", quoted)
            }
            (None, Some(size)) if size > 0 => format!("({})", size),
            _ => String::new(),
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.to_sql())
    }
}
