use diesel::prelude::*;

use crate::domain::review::{NewReview, Review};
use crate::domain::types::ReviewId;
use crate::models::review::{NewReview as DbNewReview, Review as DbReview};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ReviewListQuery, ReviewReader, ReviewWriter};

impl ReviewReader for DieselRepository {
    fn list_reviews(&self, query: ReviewListQuery) -> RepositoryResult<Vec<Review>> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;

        let mut items = reviews::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(place_id) = &query.place_id {
            items = items.filter(reviews::place_id.eq(place_id.as_str()));
        }

        if query.newest_first {
            items = items.order(reviews::created_at.desc());
        }

        let items = items
            .load::<DbReview>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Review>, _>>()?;

        Ok(items)
    }

    fn get_review_by_id(&self, id: &ReviewId) -> RepositoryResult<Option<Review>> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;

        let review = reviews::table
            .filter(reviews::id.eq(id.as_str()))
            .first::<DbReview>(&mut conn)
            .optional()?;

        let review = review.map(TryInto::try_into).transpose()?;
        Ok(review)
    }
}

impl ReviewWriter for DieselRepository {
    fn create_review(&self, review: &NewReview) -> RepositoryResult<Review> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;
        let db_review = DbNewReview::from(review);

        let created = diesel::insert_into(reviews::table)
            .values(&db_review)
            .get_result::<DbReview>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn create_reviews(&self, reviews: &[NewReview]) -> RepositoryResult<Vec<Review>> {
        use crate::schema::reviews as table;

        let mut conn = self.conn()?;

        let created = conn.transaction::<Vec<DbReview>, diesel::result::Error, _>(|conn| {
            reviews
                .iter()
                .map(|review| {
                    diesel::insert_into(table::table)
                        .values(&DbNewReview::from(review))
                        .get_result::<DbReview>(conn)
                })
                .collect()
        })?;

        let created = created
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Review>, _>>()?;

        Ok(created)
    }

    fn replace_review(&self, id: &ReviewId, review: &NewReview) -> RepositoryResult<usize> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;

        let affected = diesel::update(reviews::table.filter(reviews::id.eq(id.as_str())))
            .set(&DbNewReview::from(review))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_review(&self, id: &ReviewId) -> RepositoryResult<usize> {
        use crate::schema::reviews;

        let mut conn = self.conn()?;

        let affected = diesel::delete(reviews::table.filter(reviews::id.eq(id.as_str())))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
