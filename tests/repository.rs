use chrono::{DateTime, NaiveDateTime};
use local_places::domain::category::NewCategory;
use local_places::domain::place::NewPlace;
use local_places::domain::review::NewReview;
use local_places::domain::types::{
    CategoryId, CategoryName, ImageUrl, OpeningHours, PlaceAddress, PlaceDescription, PlaceId,
    PlaceName, Rating, ReviewId, ReviewText, ReviewerName,
};
use local_places::pagination::Pagination;
use local_places::repository::{
    CategoryReader, CategoryWriter, DieselRepository, PlaceListQuery, PlaceReader, PlaceWriter,
    ReviewListQuery, ReviewReader, ReviewWriter,
};

mod common;

fn new_category(name: &str) -> NewCategory {
    NewCategory {
        name: CategoryName::new(name).expect("valid category name"),
    }
}

fn new_place(name: &str, category_id: Option<&CategoryId>) -> NewPlace {
    NewPlace {
        name: PlaceName::new(name).expect("valid place name"),
        description: PlaceDescription::new("Somewhere nice").expect("valid description"),
        address: PlaceAddress::new("1 Main St").expect("valid address"),
        opening_hours: OpeningHours::new("9-17").expect("valid opening hours"),
        category_id: category_id.cloned(),
        image_url: Some(ImageUrl::new("https://example.com/p.png").expect("valid url")),
    }
}

fn at(timestamp: i64) -> NaiveDateTime {
    DateTime::from_timestamp(timestamp, 0)
        .expect("valid timestamp")
        .naive_utc()
}

fn new_review(place_id: &PlaceId, rating: i32, timestamp: i64) -> NewReview {
    NewReview {
        place_id: place_id.clone(),
        reviewer_name: Some(ReviewerName::new("Ada").expect("valid reviewer")),
        review_text: ReviewText::new("Lovely").expect("valid text"),
        rating: Rating::new(rating).expect("valid rating"),
        created_at: at(timestamp),
    }
}

#[test]
fn test_category_repository_crud() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let cafe = repo
        .create_category(&new_category("Cafe"))
        .expect("should create category");
    assert!(!cafe.id.is_empty());
    assert_eq!(cafe.name, "Cafe");

    let found = repo
        .get_category_by_id(&cafe.id)
        .expect("should query category")
        .expect("category exists");
    assert_eq!(found, cafe);

    assert_eq!(repo.delete_category(&cafe.id).expect("should delete"), 1);
    assert_eq!(repo.delete_category(&cafe.id).expect("should delete"), 0);
    assert!(repo.list_categories().expect("should list").is_empty());
}

#[test]
fn created_ids_are_distinct() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_categories(&[new_category("Cafe"), new_category("Bar")])
        .expect("should create categories");

    assert_eq!(created.len(), 2);
    assert_ne!(created[0].id, created[1].id);
    assert_eq!(created[0].name, "Cafe");
    assert_eq!(created[1].name, "Bar");
}

#[test]
fn list_categories_by_ids_skips_unknown_ids() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let cafe = repo.create_category(&new_category("Cafe")).unwrap();
    repo.create_category(&new_category("Bar")).unwrap();
    let missing = CategoryId::new("does-not-exist").unwrap();

    let found = repo
        .list_categories_by_ids(&[cafe.id.clone(), missing])
        .expect("should list categories");

    assert_eq!(found, vec![cafe]);
    assert!(repo.list_categories_by_ids(&[]).unwrap().is_empty());
}

#[test]
fn place_replace_overwrites_every_field() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let cafe = repo.create_category(&new_category("Cafe")).unwrap();
    let place = repo
        .create_place(&new_place("Blue Cup", Some(&cafe.id)))
        .expect("should create place");
    assert_eq!(place.category_id.as_ref(), Some(&cafe.id));

    let mut replacement = new_place("Green Cup", None);
    replacement.image_url = None;
    let affected = repo
        .replace_place(&place.id, &replacement)
        .expect("should replace place");
    assert_eq!(affected, 1);

    let stored = repo
        .get_place_by_id(&place.id)
        .unwrap()
        .expect("place still exists");
    assert_eq!(stored.name, "Green Cup");
    assert_eq!(stored.category_id, None);
    assert_eq!(stored.image_url, None);

    let unknown = PlaceId::new("does-not-exist").unwrap();
    assert_eq!(repo.replace_place(&unknown, &replacement).unwrap(), 0);
}

#[test]
fn list_places_filters_by_category_and_name() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let cafe = repo.create_category(&new_category("Cafe")).unwrap();
    let bar = repo.create_category(&new_category("Bar")).unwrap();
    repo.create_places(&[
        new_place("Blue Cup", Some(&cafe.id)),
        new_place("Red Mug", Some(&cafe.id)),
        new_place("Blue Note", Some(&bar.id)),
        new_place("50% Off", None),
    ])
    .expect("should create places");

    let names = |query: PlaceListQuery| {
        repo.list_places(query)
            .unwrap()
            .into_iter()
            .map(|p| p.name.into_inner())
            .collect::<Vec<_>>()
    };

    assert_eq!(
        names(PlaceListQuery::default().name("BLUE")),
        vec!["Blue Cup", "Blue Note"]
    );
    assert_eq!(
        names(PlaceListQuery::default().category(cafe.id.clone())),
        vec!["Blue Cup", "Red Mug"]
    );
    assert_eq!(
        names(PlaceListQuery::default().category(cafe.id).name("blue")),
        vec!["Blue Cup"]
    );
    assert_eq!(names(PlaceListQuery::default().name("%")), vec!["50% Off"]);
    assert!(names(PlaceListQuery::default().name("_")).is_empty());
}

#[test]
fn name_search_ignores_case_beyond_ascii() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_places(&[
        new_place("Église Café", None),
        new_place("ÜBER Bar", None),
        new_place("Plain Diner", None),
    ])
    .expect("should create places");

    for (needle, expected) in [
        ("église", "Église Café"),
        ("ÉGLISE", "Église Café"),
        ("CAFÉ", "Église Café"),
        ("über", "ÜBER Bar"),
    ] {
        let found = repo
            .list_places(PlaceListQuery::default().name(needle))
            .expect("should search places");
        let names = found.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec![expected], "{needle}");
    }
}

#[test]
fn list_places_paginates_in_storage_order() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let places = (1..=5)
        .map(|i| new_place(&format!("Place {i}"), None))
        .collect::<Vec<_>>();
    repo.create_places(&places).unwrap();

    let page = repo
        .list_places(PlaceListQuery::default().paginate(Pagination::new(2, 2).unwrap()))
        .unwrap();
    let names = page.iter().map(|p| p.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec!["Place 3", "Place 4"]);

    let beyond = repo
        .list_places(PlaceListQuery::default().paginate(Pagination::new(4, 2).unwrap()))
        .unwrap();
    assert!(beyond.is_empty());
}

#[test]
fn ranked_places_put_unrated_places_last() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_places(&[
            new_place("P1", None),
            new_place("P2", None),
            new_place("P3", None),
            new_place("P4", None),
        ])
        .unwrap();
    let (p1, p3, p4) = (&created[0].id, &created[2].id, &created[3].id);

    repo.create_reviews(&[
        new_review(p1, 2, 0),
        new_review(p1, 3, 1),
        new_review(p3, 5, 2),
        new_review(p3, 3, 3),
        new_review(p4, 1, 4),
    ])
    .unwrap();

    let ranked = repo
        .list_ranked_places(Pagination::new(1, 10).unwrap())
        .expect("should rank places");
    let order = ranked
        .iter()
        .map(|p| (p.name.as_str(), p.average_rating.map(|r| r.get())))
        .collect::<Vec<_>>();
    assert_eq!(
        order,
        vec![
            ("P3", Some(4.0)),
            ("P1", Some(2.5)),
            ("P4", Some(1.0)),
            ("P2", None),
        ]
    );

    let second_page = repo
        .list_ranked_places(Pagination::new(2, 3).unwrap())
        .unwrap();
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].name, "P2");
}

#[test]
fn review_listing_filters_and_orders() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let places = repo
        .create_places(&[new_place("P1", None), new_place("P2", None)])
        .unwrap();
    let (p1, p2) = (&places[0].id, &places[1].id);

    let first = repo.create_review(&new_review(p1, 4, 100)).unwrap();
    repo.create_review(&new_review(p2, 3, 200)).unwrap();
    let third = repo.create_review(&new_review(p1, 5, 300)).unwrap();

    let newest = repo
        .list_reviews(ReviewListQuery::default().place(p1.clone()).newest_first())
        .unwrap();
    let ids = newest.iter().map(|r| r.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids, vec![third.id.clone(), first.id.clone()]);
    assert_eq!(newest[0].created_at, at(300));

    assert_eq!(repo.list_reviews(ReviewListQuery::default()).unwrap().len(), 3);
}

#[test]
fn review_replace_and_delete() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let place = repo.create_place(&new_place("P1", None)).unwrap();
    let review = repo.create_review(&new_review(&place.id, 4, 100)).unwrap();

    let mut replacement = new_review(&place.id, 1, 100);
    replacement.reviewer_name = None;
    assert_eq!(repo.replace_review(&review.id, &replacement).unwrap(), 1);

    let stored = repo
        .get_review_by_id(&review.id)
        .unwrap()
        .expect("review exists");
    assert_eq!(stored.rating.get(), 1);
    assert_eq!(stored.reviewer_name, None);
    assert_eq!(stored.created_at, at(100));

    assert_eq!(repo.delete_review(&review.id).unwrap(), 1);
    assert_eq!(repo.delete_review(&review.id).unwrap(), 0);
    let unknown = ReviewId::new("does-not-exist").unwrap();
    assert!(repo.get_review_by_id(&unknown).unwrap().is_none());
}
