use std::{error::Error as StdError, fmt, panic::Location};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditLevel {
    Info,
    Warning,
    Error,
    Transaction,
}

impl AuditLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Transaction => "TRANSACTION",
        }
    }
}

impl fmt::Display for AuditLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an audit entry has been recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub member: &'static str,
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    /// Captures the file and line of the caller.
    #[track_caller]
    pub fn new(member: &'static str) -> Self {
        let location = Location::caller();
        Self {
            member,
            file: location.file(),
            line: location.line(),
        }
    }

    /// The file name without any leading directories.
    pub fn file_name(&self) -> &'static str {
        self.file
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(self.file)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AuditEntry<'a> {
    pub level: AuditLevel,
    pub site: CallSite,
    pub message: &'a str,
    pub error: Option<&'a (dyn StdError + 'static)>,
}

/// Append-only audit trail of all requests.
///
/// Implementations must never fail: errors while writing
/// an entry are handled internally.
pub trait AuditLog {
    fn append(&self, entry: AuditEntry<'_>);

    fn info(&self, site: CallSite, message: &str) {
        self.append(AuditEntry {
            level: AuditLevel::Info,
            site,
            message,
            error: None,
        });
    }

    fn warning(&self, site: CallSite, message: &str) {
        self.append(AuditEntry {
            level: AuditLevel::Warning,
            site,
            message,
            error: None,
        });
    }

    fn error(&self, site: CallSite, message: &str, error: Option<&(dyn StdError + 'static)>) {
        self.append(AuditEntry {
            level: AuditLevel::Error,
            site,
            message,
            error,
        });
    }

    fn transaction(&self, site: CallSite, action: &str, details: &str) {
        let message = format!("TRANSACTION - {action}: {details}");
        self.append(AuditEntry {
            level: AuditLevel::Transaction,
            site,
            message: &message,
            error: None,
        });
    }
}
