use super::*;

impl SurveyCommentRepo for DbReadOnly<'_> {
    fn create_survey_comment(&self, _survey_comment: &SurveyComment) -> Result<()> {
        unreachable!();
    }

    fn all_active_survey_comments(&self) -> Result<Vec<SurveyComment>> {
        all_active_survey_comments(&mut self.conn.borrow_mut())
    }
    fn get_active_survey_comment(&self, id: &Id) -> Result<SurveyComment> {
        get_active_survey_comment(&mut self.conn.borrow_mut(), id)
    }

    fn update_active_survey_comment(
        &self,
        _id: &Id,
        _feedback: &Feedback,
        _updated_at: Timestamp,
    ) -> Result<usize> {
        unreachable!();
    }
    fn soft_delete_active_survey_comment(&self, _id: &Id, _deleted_at: Timestamp) -> Result<usize> {
        unreachable!();
    }
}

impl SurveyCommentRepo for DbReadWrite<'_> {
    fn create_survey_comment(&self, survey_comment: &SurveyComment) -> Result<()> {
        create_survey_comment(&mut self.conn.borrow_mut(), survey_comment)
    }

    fn all_active_survey_comments(&self) -> Result<Vec<SurveyComment>> {
        all_active_survey_comments(&mut self.conn.borrow_mut())
    }
    fn get_active_survey_comment(&self, id: &Id) -> Result<SurveyComment> {
        get_active_survey_comment(&mut self.conn.borrow_mut(), id)
    }

    fn update_active_survey_comment(
        &self,
        id: &Id,
        feedback: &Feedback,
        updated_at: Timestamp,
    ) -> Result<usize> {
        update_active_survey_comment(&mut self.conn.borrow_mut(), id, feedback, updated_at)
    }
    fn soft_delete_active_survey_comment(&self, id: &Id, deleted_at: Timestamp) -> Result<usize> {
        soft_delete_active_survey_comment(&mut self.conn.borrow_mut(), id, deleted_at)
    }
}

fn create_survey_comment(
    conn: &mut SqliteConnection,
    survey_comment: &SurveyComment,
) -> Result<()> {
    let new_survey_comment = models::NewSurveyComment::from(survey_comment);
    diesel::insert_into(schema::survey_comment::table)
        .values(&new_survey_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn all_active_survey_comments(conn: &mut SqliteConnection) -> Result<Vec<SurveyComment>> {
    use schema::survey_comment::dsl;
    schema::survey_comment::table
        .filter(dsl::is_deleted.eq(false))
        .order_by((dsl::created_at.desc(), dsl::id.desc()))
        .load::<models::SurveyComment>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(SurveyComment::try_from)
        .collect()
}

fn get_active_survey_comment(conn: &mut SqliteConnection, id: &Id) -> Result<SurveyComment> {
    use schema::survey_comment::dsl;
    schema::survey_comment::table
        .filter(dsl::id.eq(id.to_string()))
        .filter(dsl::is_deleted.eq(false))
        .first::<models::SurveyComment>(conn)
        .map_err(from_diesel_err)?
        .try_into()
}

fn update_active_survey_comment(
    conn: &mut SqliteConnection,
    id: &Id,
    feedback: &Feedback,
    updated_at: Timestamp,
) -> Result<usize> {
    use schema::survey_comment::dsl;
    let changeset = models::SurveyCommentFeedbackChangeset::new(feedback, updated_at);
    let count = diesel::update(
        schema::survey_comment::table
            .filter(dsl::id.eq(id.to_string()))
            .filter(dsl::is_deleted.eq(false)),
    )
    .set(&changeset)
    .execute(conn)
    .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    Ok(count)
}

fn soft_delete_active_survey_comment(
    conn: &mut SqliteConnection,
    id: &Id,
    deleted_at: Timestamp,
) -> Result<usize> {
    use schema::survey_comment::dsl;
    let count = diesel::update(
        schema::survey_comment::table
            .filter(dsl::id.eq(id.to_string()))
            .filter(dsl::is_deleted.eq(false)),
    )
    .set((
        dsl::is_deleted.eq(true),
        dsl::updated_at.eq(Some(deleted_at.as_millis())),
        dsl::updated_offset.eq(Some(deleted_at.offset_seconds())),
    ))
    .execute(conn)
    .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    Ok(count)
}

impl TryFrom<models::SurveyComment> for SurveyComment {
    type Error = repo::Error;

    fn try_from(from: models::SurveyComment) -> Result<Self> {
        let models::SurveyComment {
            id,
            user_name,
            email,
            usage_without_attachment,
            usage_with_attachment,
            department,
            section,
            remark,
            is_deleted,
            created_at,
            created_offset,
            updated_at,
            updated_offset,
        } = from;
        let id = id
            .parse::<Id>()
            .map_err(|err| anyhow!("Invalid survey comment id '{id}': {err}"))?;
        let created_at = timestamp_from_row(created_at, created_offset)?;
        let updated_at = match (updated_at, updated_offset) {
            (Some(millis), Some(offset)) => Some(timestamp_from_row(millis, offset)?),
            (None, None) => None,
            _ => {
                return Err(anyhow!(
                    "Inconsistent update timestamp of survey comment {id}"
                )
                .into());
            }
        };
        Ok(Self {
            id,
            feedback: Feedback {
                user_name,
                email,
                usage_without_attachment,
                usage_with_attachment,
                department,
                section,
                remark,
            },
            deleted: is_deleted,
            created_at,
            updated_at,
        })
    }
}
