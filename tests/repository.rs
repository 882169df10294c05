use collab_board::domain::info::Info;
use collab_board::domain::topic::NewTopic;
use collab_board::repository::{
    CategoryListQuery, CategoryReader, CategoryWriter, DieselRepository, RepositoryError,
};
use diesel::prelude::*;

mod common;

#[test]
fn create_then_get_by_title_round_trips_info_and_zeroed_stats() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_category("title 1", "desc 1")
        .expect("should create category");
    assert_eq!(created.stats().total_likes_count, 0);
    assert_eq!(created.stats().total_comments_count, 0);
    assert!(created.topics().is_empty());

    let reloaded = repo
        .get_category_by_title("title 1")
        .expect("lookup should succeed")
        .expect("created category should be found");

    let expected_info = Info::new("title 1", "desc 1").expect("valid info");
    assert_eq!(reloaded.info(), &expected_info);
    assert_eq!(reloaded.stats().total_likes_count, 0);
    assert_eq!(reloaded.stats().total_comments_count, 0);
    assert_eq!(reloaded, created);
}

#[test]
fn get_by_title_miss_returns_none() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let missing = repo
        .get_category_by_title("no such title")
        .expect("lookup should not fail on a miss");
    assert!(missing.is_none());
}

#[test]
fn get_by_id_finds_created_category() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_category("title 1", "desc 1")
        .expect("should create category");

    let reloaded = repo
        .get_category_by_id(created.id())
        .expect("lookup should succeed")
        .expect("created category should be found");
    assert_eq!(reloaded.id(), created.id());
    assert_eq!(reloaded.info(), created.info());
}

#[test]
fn inc_like_survives_save_and_reload() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let mut category = repo
        .create_category("title 1", "desc 1")
        .expect("should create category");

    for _ in 0..5 {
        category.inc_like();
    }
    category.inc_comment();
    assert!(category.stats_changed());

    let affected = repo
        .save_category(&mut category)
        .expect("save should succeed");
    assert_eq!(affected, 1);
    assert!(!category.stats_changed());

    let reloaded = repo
        .get_category_by_title("title 1")
        .expect("lookup should succeed")
        .expect("category should be found");
    assert_eq!(reloaded.stats().total_likes_count, 5);
    assert_eq!(reloaded.stats().total_comments_count, 1);

    // the counters really hit the row, not just the in-memory aggregate
    use collab_board::schema::categories;
    let mut conn = test_db.pool().get().expect("should acquire DB connection");
    let row: (i32, i32) = categories::table
        .filter(categories::id.eq(category.id().get()))
        .select((
            categories::total_likes_count,
            categories::total_comments_count,
        ))
        .first(&mut conn)
        .expect("row should exist");
    assert_eq!(row, (5, 1));
}

#[test]
fn added_topics_survive_save_and_reload() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let mut category = repo
        .create_category("title 1", "desc 1")
        .expect("should create category");

    let topic = NewTopic::new("top title 1", "top desc 1").expect("valid topic");
    category.add_topic(topic);
    assert_eq!(category.added_topics().len(), 1);

    let affected = repo
        .save_category(&mut category)
        .expect("save should succeed");
    assert_eq!(affected, 1);
    assert!(category.added_topics().is_empty());
    assert_eq!(category.topics().len(), 1);

    let reloaded = repo
        .get_category_by_title("title 1")
        .expect("lookup should succeed")
        .expect("category should be found");
    assert_eq!(reloaded.topics().len(), 1);
    assert_eq!(reloaded.topics()[0].title, "top title 1");
    assert_eq!(reloaded.topics()[0].description, "top desc 1");
}

#[test]
fn multiple_topics_round_trip_in_insertion_order() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let mut category = repo
        .create_category("title 1", "desc 1")
        .expect("should create category");
    category.add_topic(NewTopic::new("t1", "d1").expect("valid topic"));
    category.add_topic(NewTopic::new("t2", "d2").expect("valid topic"));
    repo.save_category(&mut category).expect("save should succeed");

    let reloaded = repo
        .get_category_by_title("title 1")
        .expect("lookup should succeed")
        .expect("category should be found");
    assert_eq!(reloaded.topics().len(), 2);
    assert_eq!(reloaded.topics()[0].title, "t1");
    assert_eq!(reloaded.topics()[1].title, "t2");
    assert!(reloaded.topics()[0].id < reloaded.topics()[1].id);
}

#[test]
fn save_without_pending_changes_writes_nothing() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let mut category = repo
        .create_category("title 1", "desc 1")
        .expect("should create category");

    let affected = repo
        .save_category(&mut category)
        .expect("save should succeed");
    assert_eq!(affected, 0);
}

#[test]
fn create_category_rejects_blank_title() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let err = repo
        .create_category("   ", "desc 1")
        .expect_err("blank title should be rejected");
    assert!(matches!(err, RepositoryError::Validation(_)));
}

#[test]
fn list_categories_orders_by_title_and_paginates() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_category("banana", "b").expect("should create");
    repo.create_category("apple", "a").expect("should create");
    repo.create_category("cherry", "c").expect("should create");

    let (total, all) = repo
        .list_categories(CategoryListQuery::new())
        .expect("should list categories");
    assert_eq!(total, 3);
    let titles: Vec<&str> = all.iter().map(|c| c.info().title.as_str()).collect();
    assert_eq!(titles, ["apple", "banana", "cherry"]);

    let (total, page) = repo
        .list_categories(CategoryListQuery::new().paginate(2, 2))
        .expect("should list categories");
    assert_eq!(total, 3);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].info().title, "cherry");
}
