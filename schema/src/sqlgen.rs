//! Small SQL text helpers shared by the field and table compilers
//!
//! Literals and identifiers are interpolated as-is. Embedded quote characters
//! are NOT escaped; callers must supply safe text.

/// Wrap an identifier in backticks: `` `name` ``
#[inline]
#[must_use]
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name)
}

/// Wrap a literal in single quotes: `'value'`
#[inline]
#[must_use]
pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value)
}

/// Generate DROP TABLE SQL
///
/// The statement carries no trailing semicolon.
#[must_use]
pub fn drop_table_sql(table: &str) -> String {
    format!("DROP TABLE {}", table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoting() {
        assert_eq!(quote_identifier("email"), "`email`");
        assert_eq!(quote_literal(""), "''");
        assert_eq!(quote_literal("it's"), "'it's'");
    }

    #[test]
    fn test_drop_table_sql() {
        assert_eq!(drop_table_sql("users"), "DROP TABLE users");
    }
}
