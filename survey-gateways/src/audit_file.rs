use std::{
    fmt::Write as _,
    fs::{self, OpenOptions},
    io::{self, Write as _},
    path::{Path, PathBuf},
};

use parking_lot::Mutex;
use survey_core::{
    clock::CivilClock,
    entities::Timestamp,
    gateways::audit::{AuditEntry, AuditLevel, AuditLog},
};
use time::{macros::format_description, OffsetDateTime};

const SEPARATOR_LEN: usize = 80;

/// Appends audit entries to daily log files.
///
/// Entries are written to `{dir}/log_{yyyy-MM-dd}.txt` where the
/// date is determined by the civil time of the clock.
#[derive(Debug)]
pub struct FileAuditLog {
    dir: PathBuf,
    clock: CivilClock,
    lock: Mutex<()>,
}

impl FileAuditLog {
    pub fn new(dir: impl Into<PathBuf>, clock: CivilClock) -> Self {
        let dir = dir.into();
        if let Err(err) = fs::create_dir_all(&dir) {
            log::warn!("Unable to create audit log directory {}: {err}", dir.display());
        }
        Self {
            dir,
            clock,
            lock: Mutex::new(()),
        }
    }

    fn file_path(&self, now: Timestamp) -> PathBuf {
        // yyyy-MM-dd
        let date = now.into_inner().date();
        self.dir.join(format!("log_{date}.txt"))
    }

    fn write(&self, path: &Path, text: &str) -> io::Result<()> {
        let _guard = self.lock.lock();
        fs::create_dir_all(&self.dir)?;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(text.as_bytes())
    }
}

impl AuditLog for FileAuditLog {
    fn append(&self, entry: AuditEntry<'_>) {
        forward_to_logger(&entry);
        let now = self.clock.civil_time_at(OffsetDateTime::now_utc());
        let text = format_entry(now, &entry);
        let path = self.file_path(now);
        if let Err(err) = self.write(&path, &text) {
            println!("Failed to write to log file: {err}");
            println!("Original log: [{}] {}", entry.level, entry.message);
        }
    }
}

fn forward_to_logger(entry: &AuditEntry<'_>) {
    let level = match entry.level {
        AuditLevel::Info | AuditLevel::Transaction => log::Level::Info,
        AuditLevel::Warning => log::Level::Warn,
        AuditLevel::Error => log::Level::Error,
    };
    match entry.error {
        Some(err) => log::log!(level, "{} [{}]: {err}", entry.message, entry.site.member),
        None => log::log!(level, "{} [{}]", entry.message, entry.site.member),
    }
}

fn format_timestamp(now: Timestamp) -> String {
    let now = now.into_inner();
    now.format(format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"
    ))
    .unwrap_or_else(|_| now.to_string())
}

fn format_entry(now: Timestamp, entry: &AuditEntry<'_>) -> String {
    let AuditEntry {
        level,
        site,
        message,
        error,
    } = entry;
    let mut text = format!(
        "[{}] [{level}] [{}:{}] [{}] {message}",
        format_timestamp(now),
        site.file_name(),
        site.line,
        site.member,
    );
    // Writing into a String never fails
    if let Some(err) = error {
        let _ = write!(text, "\nError: {err:?}\nMessage: {err}");
        if let Some(inner) = err.source() {
            let _ = write!(text, "\nInner Error: {inner:?}\nInner Message: {inner}");
        }
    }
    text.push('\n');
    text.push_str(&"-".repeat(SEPARATOR_LEN));
    text.push('\n');
    text
}
