use std::cell::{Cell, RefCell};

use time::{macros::datetime, Duration};

use super::*;
use crate::{
    clock::Clock,
    entities::*,
    repositories::{Error as RepoError, SurveyCommentRepo},
};

type RepoResult<T> = std::result::Result<T, RepoError>;

/// In-memory repository that mimics the soft deletion
/// semantics of the database.
#[derive(Default)]
pub struct MockDb {
    pub survey_comments: RefCell<Vec<SurveyComment>>,
}

impl SurveyCommentRepo for MockDb {
    fn create_survey_comment(&self, survey_comment: &SurveyComment) -> RepoResult<()> {
        let mut survey_comments = self.survey_comments.borrow_mut();
        if survey_comments.iter().any(|c| c.id == survey_comment.id) {
            return Err(RepoError::AlreadyExists);
        }
        survey_comments.push(survey_comment.clone());
        Ok(())
    }

    fn all_active_survey_comments(&self) -> RepoResult<Vec<SurveyComment>> {
        let mut active: Vec<_> = self
            .survey_comments
            .borrow()
            .iter()
            .filter(|c| c.is_active())
            .cloned()
            .collect();
        active.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(active)
    }

    fn get_active_survey_comment(&self, id: &Id) -> RepoResult<SurveyComment> {
        self.survey_comments
            .borrow()
            .iter()
            .find(|c| c.id == *id && c.is_active())
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn update_active_survey_comment(
        &self,
        id: &Id,
        feedback: &Feedback,
        updated_at: Timestamp,
    ) -> RepoResult<usize> {
        let mut count = 0;
        for c in self
            .survey_comments
            .borrow_mut()
            .iter_mut()
            .filter(|c| c.id == *id && c.is_active())
        {
            c.feedback = feedback.clone();
            c.updated_at = Some(updated_at);
            count += 1;
        }
        Ok(count)
    }

    fn soft_delete_active_survey_comment(
        &self,
        id: &Id,
        deleted_at: Timestamp,
    ) -> RepoResult<usize> {
        let mut count = 0;
        for c in self
            .survey_comments
            .borrow_mut()
            .iter_mut()
            .filter(|c| c.id == *id && c.is_active())
        {
            c.deleted = true;
            c.updated_at = Some(deleted_at);
            count += 1;
        }
        Ok(count)
    }
}

/// A clock that advances by one second on every reading.
pub struct SteppingClock {
    next: Cell<Timestamp>,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self {
            next: Cell::new(datetime!(2025-03-01 09:30 +8).into()),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> Timestamp {
        let now = self.next.get();
        self.next
            .set((now.into_inner() + Duration::seconds(1)).into());
        now
    }
}

fn feedback(user_name: &str, department: Option<&str>) -> Feedback {
    Feedback {
        user_name: user_name.into(),
        department: department.map(Into::into),
        ..Default::default()
    }
}

#[test]
fn create_survey_comment_with_fresh_id() {
    let db = MockDb::default();
    let clock = SteppingClock::new();
    let a = create_survey_comment(&db, &clock, feedback("Alice", Some("IT"))).unwrap();
    let b = create_survey_comment(&db, &clock, feedback("Alice", Some("IT"))).unwrap();
    assert_ne!(a.id, b.id);
    assert!(!a.deleted);
    assert!(a.updated_at.is_none());
    assert_eq!(a.created_at.into_inner(), datetime!(2025-03-01 09:30 +8));
    assert_eq!(db.survey_comments.borrow().len(), 2);
}

#[test]
fn reject_blank_user_name() {
    let db = MockDb::default();
    let clock = SteppingClock::new();
    let err = create_survey_comment(&db, &clock, feedback(" ", None)).unwrap_err();
    assert!(matches!(err, Error::UserName));
    assert!(db.survey_comments.borrow().is_empty());
}

#[test]
fn get_created_survey_comment() {
    let db = MockDb::default();
    let clock = SteppingClock::new();
    let created = create_survey_comment(&db, &clock, feedback("Alice", None)).unwrap();
    let loaded = get_survey_comment(&db, &created.id).unwrap();
    assert_eq!(created, loaded);
    assert!(loaded.feedback.department.is_none());
}

#[test]
fn get_unknown_survey_comment() {
    let db = MockDb::default();
    let err = get_survey_comment(&db, &Id::new()).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn update_replaces_all_fields() {
    let db = MockDb::default();
    let clock = SteppingClock::new();
    let mut original = feedback("Alice", Some("IT"));
    original.remark = Some("first".into());
    let created = create_survey_comment(&db, &clock, original).unwrap();

    update_survey_comment(&db, &clock, &created.id, feedback("Alice B", Some("IT"))).unwrap();

    let updated = get_survey_comment(&db, &created.id).unwrap();
    assert_eq!(updated.feedback.user_name, "Alice B");
    assert_eq!(updated.feedback.department.as_deref(), Some("IT"));
    // Omitted optional fields are cleared
    assert!(updated.feedback.remark.is_none());
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at.unwrap() >= updated.created_at);
}

#[test]
fn update_unknown_survey_comment() {
    let db = MockDb::default();
    let clock = SteppingClock::new();
    let err = update_survey_comment(&db, &clock, &Id::new(), feedback("x", None)).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn delete_hides_survey_comment() {
    let db = MockDb::default();
    let clock = SteppingClock::new();
    let kept = create_survey_comment(&db, &clock, feedback("Bob", None)).unwrap();
    let deleted = create_survey_comment(&db, &clock, feedback("Alice", None)).unwrap();

    delete_survey_comment(&db, &clock, &deleted.id).unwrap();

    assert!(get_survey_comment(&db, &deleted.id)
        .unwrap_err()
        .is_not_found());
    let all = load_survey_comments(&db).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, kept.id);

    // Physically retained
    let stored = db.survey_comments.borrow();
    let stored = stored.iter().find(|c| c.id == deleted.id).unwrap();
    assert!(stored.deleted);
    assert!(stored.updated_at.is_some());
}

#[test]
fn delete_twice() {
    let db = MockDb::default();
    let clock = SteppingClock::new();
    let c = create_survey_comment(&db, &clock, feedback("Alice", None)).unwrap();
    delete_survey_comment(&db, &clock, &c.id).unwrap();
    let err = delete_survey_comment(&db, &clock, &c.id).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn deleted_survey_comments_cannot_be_updated() {
    let db = MockDb::default();
    let clock = SteppingClock::new();
    let c = create_survey_comment(&db, &clock, feedback("Alice", None)).unwrap();
    delete_survey_comment(&db, &clock, &c.id).unwrap();
    let err = update_survey_comment(&db, &clock, &c.id, feedback("Eve", None)).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(db.survey_comments.borrow()[0].feedback.user_name, "Alice");
}

#[test]
fn load_newest_first() {
    let db = MockDb::default();
    let clock = SteppingClock::new();
    for name in ["a", "b", "c"] {
        create_survey_comment(&db, &clock, feedback(name, None)).unwrap();
    }
    let names: Vec<_> = load_survey_comments(&db)
        .unwrap()
        .into_iter()
        .map(|c| c.feedback.user_name)
        .collect();
    assert_eq!(names, ["c", "b", "a"]);
}

#[test]
fn skip_deleted_survey_comments() {
    use survey_entities::builders::Builder as _;

    let db = MockDb::default();
    let deleted = SurveyComment::build()
        .user_name("Eve")
        .deleted(true)
        .finish();
    let active = SurveyComment::build().user_name("Alice").finish();
    db.survey_comments
        .borrow_mut()
        .extend([deleted.clone(), active.clone()]);
    let all = load_survey_comments(&db).unwrap();
    assert_eq!(all, [active]);
    assert!(get_survey_comment(&db, &deleted.id)
        .unwrap_err()
        .is_not_found());
}
