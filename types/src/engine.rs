//! Storage engine tags
//!
//! The engines a table can be created with. The tag is rendered verbatim into
//! the `ENGINE = ...` clause of a `CREATE TABLE` statement.

/// MySQL/MariaDB storage engine
///
/// # Examples
///
/// ```
/// use simple_migrations_types::Engine;
///
/// assert_eq!(Engine::parse("innodb"), Some(Engine::InnoDB));
/// assert_eq!(Engine::Blackhole.as_str(), "BLACKHOLE");
/// assert_eq!(Engine::default(), Engine::InnoDB);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Engine {
    /// Transactional, row-level locking. The MySQL default.
    #[default]
    InnoDB,

    /// Percona's InnoDB fork, shipped with older MariaDB releases
    XtraDB,

    /// Crash-safe MyISAM replacement (MariaDB)
    Aria,

    /// Non-transactional, table-level locking
    MyISAM,

    /// LSM-tree engine backed by RocksDB
    MyRocks,

    /// Insert-only compressed storage
    Archive,

    /// Discards all writes
    #[cfg_attr(feature = "serde", serde(rename = "BLACKHOLE"))]
    Blackhole,
}

impl Engine {
    /// Every supported engine, in declaration order
    pub const ALL: [Engine; 7] = [
        Engine::InnoDB,
        Engine::XtraDB,
        Engine::Aria,
        Engine::MyISAM,
        Engine::MyRocks,
        Engine::Archive,
        Engine::Blackhole,
    ];

    /// Parse an engine name (case-insensitive)
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|engine| engine.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// The engine name as written in DDL
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Engine::InnoDB => "InnoDB",
            Engine::XtraDB => "XtraDB",
            Engine::Aria => "Aria",
            Engine::MyISAM => "MyISAM",
            Engine::MyRocks => "MyRocks",
            Engine::Archive => "Archive",
            Engine::Blackhole => "BLACKHOLE",
        }
    }

    /// Returns `true` if the engine supports transactions
    #[must_use]
    pub const fn is_transactional(&self) -> bool {
        matches!(self, Engine::InnoDB | Engine::XtraDB | Engine::MyRocks)
    }
}

impl core::fmt::Display for Engine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Engine {
    type Err = EngineParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Engine::parse(s).ok_or_else(|| EngineParseError(s.to_string()))
    }
}

/// Error returned when parsing an unknown engine name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineParseError(pub String);

impl core::fmt::Display for EngineParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unknown storage engine `{}`", self.0)
    }
}

impl std::error::Error for EngineParseError {}
