pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::survey_comment_builder::*;

pub mod survey_comment_builder {

    use super::*;
    use crate::{id::*, survey_comment::*, time::*};

    #[derive(Debug)]
    pub struct SurveyCommentBuild {
        survey_comment: SurveyComment,
    }

    impl SurveyCommentBuild {
        pub fn id(mut self, id: Id) -> Self {
            self.survey_comment.id = id;
            self
        }
        pub fn user_name(mut self, user_name: &str) -> Self {
            self.survey_comment.feedback.user_name = user_name.into();
            self
        }
        pub fn email(mut self, email: Option<&str>) -> Self {
            self.survey_comment.feedback.email = email.map(Into::into);
            self
        }
        pub fn department(mut self, department: Option<&str>) -> Self {
            self.survey_comment.feedback.department = department.map(Into::into);
            self
        }
        pub fn section(mut self, section: Option<&str>) -> Self {
            self.survey_comment.feedback.section = section.map(Into::into);
            self
        }
        pub fn remark(mut self, remark: Option<&str>) -> Self {
            self.survey_comment.feedback.remark = remark.map(Into::into);
            self
        }
        pub fn feedback(mut self, feedback: Feedback) -> Self {
            self.survey_comment.feedback = feedback;
            self
        }
        pub fn deleted(mut self, deleted: bool) -> Self {
            self.survey_comment.deleted = deleted;
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.survey_comment.created_at = created_at;
            self
        }
        pub fn updated_at(mut self, updated_at: Option<Timestamp>) -> Self {
            self.survey_comment.updated_at = updated_at;
            self
        }
        pub fn finish(self) -> SurveyComment {
            self.survey_comment
        }
    }

    impl Builder for SurveyComment {
        type Build = SurveyCommentBuild;
        fn build() -> SurveyCommentBuild {
            SurveyCommentBuild {
                survey_comment: SurveyComment::new(
                    Id::new(),
                    Feedback::default(),
                    Timestamp::now_utc(),
                ),
            }
        }
    }
}
