use std::cell::RefCell;

use survey_core::{
    clock::CivilClock,
    gateways::audit::{AuditEntry, AuditLevel},
};

use super::{prelude::*, *};

#[derive(Default)]
pub struct RecordingAuditLog {
    entries: RefCell<Vec<(AuditLevel, &'static str, String, Option<String>)>>,
}

impl RecordingAuditLog {
    fn levels(&self) -> Vec<AuditLevel> {
        self.entries.borrow().iter().map(|e| e.0).collect()
    }

    fn messages(&self) -> Vec<String> {
        self.entries.borrow().iter().map(|e| e.2.clone()).collect()
    }

    fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}

impl AuditLog for RecordingAuditLog {
    fn append(&self, entry: AuditEntry<'_>) {
        self.entries.borrow_mut().push((
            entry.level,
            entry.site.member,
            entry.message.to_string(),
            entry.error.map(ToString::to_string),
        ));
    }
}

struct Fixture {
    connections: sqlite::Connections,
    clock: CivilClock,
    audit_log: RecordingAuditLog,
}

impl Fixture {
    fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let connections = sqlite::Connections::init(":memory:", 1).unwrap();
        survey_db_sqlite::run_embedded_database_migrations(connections.exclusive().unwrap())
            .unwrap();
        Self {
            connections,
            clock: CivilClock::default(),
            audit_log: RecordingAuditLog::default(),
        }
    }

    fn create(&self, user_name: &str) -> SurveyComment {
        let feedback = Feedback {
            user_name: user_name.into(),
            department: Some("IT".into()),
            ..Default::default()
        };
        create_survey_comment(&self.connections, &self.clock, &self.audit_log, feedback).unwrap()
    }
}

#[test]
fn audit_successful_create() {
    let fixture = Fixture::new();
    let created = fixture.create("Alice");
    assert_eq!(created.created_at.offset_seconds(), 8 * 3600);
    assert_eq!(
        fixture.audit_log.levels(),
        [AuditLevel::Transaction, AuditLevel::Transaction]
    );
    let messages = fixture.audit_log.messages();
    assert_eq!(
        messages[0],
        "TRANSACTION - CREATE: Creating a new survey comment for user name: Alice, email: N/A"
    );
    assert_eq!(
        messages[1],
        format!(
            "TRANSACTION - CREATE: Successfully created survey comment with ID: {}",
            created.id
        )
    );
    assert!(fixture
        .audit_log
        .entries
        .borrow()
        .iter()
        .all(|e| e.1 == "create_survey_comment"));
}

#[test]
fn load_all_active_survey_comments() {
    let fixture = Fixture::new();
    let a = fixture.create("Alice");
    let b = fixture.create("Alice");
    assert_ne!(a.id, b.id);
    fixture.audit_log.clear();

    let all = load_survey_comments(&fixture.connections, &fixture.audit_log).unwrap();
    assert_eq!(all.len(), 2);
    assert!(all[0].created_at >= all[1].created_at);
    assert_eq!(
        fixture.audit_log.messages()[1],
        "TRANSACTION - GET_ALL: Successfully retrieved 2 survey comment(s)"
    );
}

#[test]
fn audit_missing_survey_comment_as_warning() {
    let fixture = Fixture::new();
    let id = Id::new();
    let err = get_survey_comment(&fixture.connections, &fixture.audit_log, &id).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        fixture.audit_log.levels(),
        [AuditLevel::Transaction, AuditLevel::Warning]
    );
    assert_eq!(
        fixture.audit_log.messages()[1],
        format!("Survey comment not found with ID: {id}")
    );
}

#[test]
fn update_and_delete_survey_comment() {
    let fixture = Fixture::new();
    let created = fixture.create("Alice");
    let feedback = Feedback {
        user_name: "Alice B".into(),
        department: Some("IT".into()),
        ..Default::default()
    };
    update_survey_comment(
        &fixture.connections,
        &fixture.clock,
        &fixture.audit_log,
        &created.id,
        feedback,
    )
    .unwrap();
    let updated =
        get_survey_comment(&fixture.connections, &fixture.audit_log, &created.id).unwrap();
    assert_eq!(updated.feedback.user_name, "Alice B");
    assert!(updated.updated_at.unwrap() >= updated.created_at);

    delete_survey_comment(
        &fixture.connections,
        &fixture.clock,
        &fixture.audit_log,
        &created.id,
    )
    .unwrap();
    fixture.audit_log.clear();
    let err = delete_survey_comment(
        &fixture.connections,
        &fixture.clock,
        &fixture.audit_log,
        &created.id,
    )
    .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        fixture.audit_log.messages()[1],
        format!("Survey comment not found for deletion with ID: {}", created.id)
    );
}

#[test]
fn audit_storage_failures_as_error() {
    use diesel::{Connection as _, RunQueryDsl as _};

    let dir = tempfile::tempdir().unwrap();
    let db_url = dir.path().join("survey-bot.sqlite");
    let db_url = db_url.to_str().unwrap();
    let mut fixture = Fixture::new();
    fixture.connections = sqlite::Connections::init(db_url, 2).unwrap();
    survey_db_sqlite::run_embedded_database_migrations(fixture.connections.exclusive().unwrap())
        .unwrap();
    let created = fixture.create("Alice");

    let mut conn = diesel::SqliteConnection::establish(db_url).unwrap();
    diesel::sql_query("DROP TABLE survey_comment")
        .execute(&mut conn)
        .unwrap();
    fixture.audit_log.clear();
    let err = get_survey_comment(&fixture.connections, &fixture.audit_log, &created.id)
        .unwrap_err();
    assert!(!err.is_not_found());
    let entries = fixture.audit_log.entries.borrow();
    assert_eq!(entries[1].0, AuditLevel::Error);
    assert_eq!(
        entries[1].2,
        format!(
            "An error occurred while retrieving the survey comment with ID: {}",
            created.id
        )
    );
    assert!(entries[1].3.is_some());
}
