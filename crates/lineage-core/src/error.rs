use std::fmt;

/// Machine-readable error codes for agent-friendly decision making.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    DatasetNotFound,
    DatasetParseError,
    DuplicateCreatorId,
    CreatorNotFound,
    UserNotFound,
    InternalUnexpected,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1001",
            Self::DatasetNotFound => "E1002",
            Self::DatasetParseError => "E1003",
            Self::DuplicateCreatorId => "E1004",
            Self::CreatorNotFound => "E2001",
            Self::UserNotFound => "E2002",
            Self::InternalUnexpected => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::DatasetNotFound => "Creator dataset not found",
            Self::DatasetParseError => "Creator dataset parse error",
            Self::DuplicateCreatorId => "Duplicate creator ID in dataset",
            Self::CreatorNotFound => "Creator not found",
            Self::UserNotFound => "User not found",
            Self::InternalUnexpected => "Internal unexpected error",
        }
    }

    /// Optional remediation hint that can be surfaced to operators and agents.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix syntax in .lineage/config.toml and retry."),
            Self::DatasetNotFound => {
                Some("Pass --data <file> or set [data] path in .lineage/config.toml.")
            }
            Self::DatasetParseError => {
                Some("The dataset must be a JSON array of creator objects.")
            }
            Self::DuplicateCreatorId => Some("Give every creator a unique `id`."),
            Self::CreatorNotFound => Some("Check the creator ID against the dataset."),
            Self::UserNotFound => Some("Check the user ID against the repository."),
            Self::InternalUnexpected => Some("Retry once. If persistent, report a bug with logs."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorCode;
    use std::collections::HashSet;

    const ALL: [ErrorCode; 7] = [
        ErrorCode::ConfigParseError,
        ErrorCode::DatasetNotFound,
        ErrorCode::DatasetParseError,
        ErrorCode::DuplicateCreatorId,
        ErrorCode::CreatorNotFound,
        ErrorCode::UserNotFound,
        ErrorCode::InternalUnexpected,
    ];

    #[test]
    fn all_codes_are_unique() {
        let mut seen = HashSet::new();
        for code in ALL {
            assert!(seen.insert(code.code()), "duplicate code {}", code.code());
        }
    }

    #[test]
    fn code_format_is_machine_friendly() {
        for code in ALL {
            let raw = code.code();
            assert_eq!(raw.len(), 5);
            assert!(raw.starts_with('E'));
            assert!(raw.chars().skip(1).all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn display_matches_code() {
        assert_eq!(ErrorCode::CreatorNotFound.to_string(), "E2001");
    }
}
