use diesel::prelude::*;
use diesel::sql_types::BigInt;

use crate::db::fold_case;
use crate::domain::place::{NewPlace, Place};
use crate::domain::types::PlaceId;
use crate::models::place::{NewPlace as DbNewPlace, Place as DbPlace, RankedPlace};
use crate::pagination::Pagination;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, PlaceListQuery, PlaceReader, PlaceWriter};

/// Mean rating per place over a left join, so places without reviews get a
/// `NULL` average. SQLite sorts `NULL` below every number, which puts them
/// last in descending order.
const RANKED_PLACES_SQL: &str = "\
    SELECT p.id, p.name, p.description, p.address, p.opening_hours, \
           p.category_id, p.image_url, AVG(r.rating) AS average_rating \
    FROM places p \
    LEFT JOIN reviews r ON r.place_id = p.id \
    GROUP BY p.id \
    ORDER BY average_rating DESC, p.rowid ASC \
    LIMIT ? OFFSET ?";

/// Builds a `LIKE` pattern matching `needle` anywhere, with wildcards in the
/// needle itself escaped by a backslash.
fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for ch in needle.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

impl PlaceReader for DieselRepository {
    fn list_places(&self, query: PlaceListQuery) -> RepositoryResult<Vec<Place>> {
        use crate::schema::places;

        let mut conn = self.conn()?;

        let mut items = places::table.into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(category_id) = &query.category_id {
            items = items.filter(places::category_id.eq(Some(category_id.as_str())));
        }

        if let Some(name) = &query.name {
            let pattern = contains_pattern(&name.to_lowercase());
            items = items.filter(fold_case(places::name).like(pattern).escape('\\'));
        }

        if let Some(pagination) = &query.pagination {
            items = items.offset(pagination.offset()).limit(pagination.limit());
        }

        let items = items
            .load::<DbPlace>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Place>, _>>()?;

        Ok(items)
    }

    fn get_place_by_id(&self, id: &PlaceId) -> RepositoryResult<Option<Place>> {
        use crate::schema::places;

        let mut conn = self.conn()?;

        let place = places::table
            .filter(places::id.eq(id.as_str()))
            .first::<DbPlace>(&mut conn)
            .optional()?;

        let place = place.map(TryInto::try_into).transpose()?;
        Ok(place)
    }

    fn list_ranked_places(&self, pagination: Pagination) -> RepositoryResult<Vec<Place>> {
        let mut conn = self.conn()?;

        let items = diesel::sql_query(RANKED_PLACES_SQL)
            .bind::<BigInt, _>(pagination.limit())
            .bind::<BigInt, _>(pagination.offset())
            .load::<RankedPlace>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Place>, _>>()?;

        Ok(items)
    }
}

impl PlaceWriter for DieselRepository {
    fn create_place(&self, place: &NewPlace) -> RepositoryResult<Place> {
        use crate::schema::places;

        let mut conn = self.conn()?;
        let db_place = DbNewPlace::from(place);

        let created = diesel::insert_into(places::table)
            .values(&db_place)
            .get_result::<DbPlace>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn create_places(&self, places: &[NewPlace]) -> RepositoryResult<Vec<Place>> {
        use crate::schema::places as table;

        let mut conn = self.conn()?;

        let created = conn.transaction::<Vec<DbPlace>, diesel::result::Error, _>(|conn| {
            places
                .iter()
                .map(|place| {
                    diesel::insert_into(table::table)
                        .values(&DbNewPlace::from(place))
                        .get_result::<DbPlace>(conn)
                })
                .collect()
        })?;

        let created = created
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Place>, _>>()?;

        Ok(created)
    }

    fn replace_place(&self, id: &PlaceId, place: &NewPlace) -> RepositoryResult<usize> {
        use crate::schema::places;

        let mut conn = self.conn()?;

        let affected = diesel::update(places::table.filter(places::id.eq(id.as_str())))
            .set(&DbNewPlace::from(place))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_place(&self, id: &PlaceId) -> RepositoryResult<usize> {
        use crate::schema::places;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(places::table.filter(places::id.eq(id.as_str()))).execute(&mut conn)?;

        Ok(affected)
    }
}
