use chrono::Duration;
use wear_core::model::{CumulativeReading, DailyGoal, DayKey, StudyWeek, WearDay};
use wear_core::time::fixed_now;

use storage::prefs::PrefsRepository;
use storage::repository::{CumulativeRepository, GoalRepository, Storage, WearTimeRepository};
use storage::sqlite::SqliteRepository;

fn today() -> DayKey {
    DayKey::from_datetime(fixed_now())
}

fn build_wear_day(worn: u32, not_worn: u32) -> WearDay {
    WearDay::from_persisted(today(), StudyWeek::new(2), fixed_now(), worn, not_worn).unwrap()
}

fn build_reading(offset_minutes: i64, cumulative: u32) -> CumulativeReading {
    CumulativeReading::new(
        today(),
        StudyWeek::new(2),
        fixed_now() + Duration::minutes(offset_minutes),
        cumulative,
        cumulative / 2,
    )
}

#[tokio::test]
async fn sqlite_wear_day_upsert_replaces_the_row() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_wear?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    repo.upsert_day(&build_wear_day(100, 50)).await.unwrap();
    repo.upsert_day(&build_wear_day(160, 80)).await.unwrap();

    let fetched = WearTimeRepository::last_for_day(&repo, today())
        .await
        .expect("fetch")
        .expect("row");
    assert_eq!(fetched.worn_minutes(), 160);
    assert_eq!(fetched.not_worn_minutes(), 80);

    let week_rows = repo.entries_for_week(StudyWeek::new(2)).await.unwrap();
    assert_eq!(week_rows.len(), 1);
    assert!(repo.entries_for_week(StudyWeek::new(4)).await.unwrap().is_empty());
}

#[tokio::test]
async fn sqlite_cumulative_keeps_history_and_serves_the_latest() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_cumulative?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    CumulativeRepository::append(&repo, &build_reading(0, 30))
        .await
        .unwrap();
    CumulativeRepository::append(&repo, &build_reading(10, 45))
        .await
        .unwrap();
    CumulativeRepository::append(&repo, &build_reading(20, 70))
        .await
        .unwrap();

    let last = CumulativeRepository::last_for_day(&repo, today())
        .await
        .expect("fetch")
        .expect("row");
    assert_eq!(last.cumulative_minutes, 70);

    let mid = repo
        .closest_before(fixed_now() + Duration::minutes(15), today())
        .await
        .expect("fetch")
        .expect("row");
    assert_eq!(mid.cumulative_minutes, 45);

    let other_day = DayKey::from_datetime(fixed_now() + Duration::days(1));
    assert!(CumulativeRepository::last_for_day(&repo, other_day)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn sqlite_latest_goal_wins() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_goal?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert!(repo.latest().await.unwrap().is_none());

    let first = DailyGoal::from_persisted(today(), StudyWeek::new(2), fixed_now(), 840).unwrap();
    let second = DailyGoal::from_persisted(
        today(),
        StudyWeek::new(3),
        fixed_now() + Duration::hours(2),
        780,
    )
    .unwrap();
    GoalRepository::append(&repo, &first).await.unwrap();
    GoalRepository::append(&repo, &second).await.unwrap();

    let latest = repo.latest().await.expect("fetch").expect("row");
    assert_eq!(latest.goal_minutes(), 780);
    assert_eq!(latest.week(), StudyWeek::new(3));
}

#[tokio::test]
async fn sqlite_prefs_roundtrip() {
    let repo = SqliteRepository::connect("sqlite:file:memdb_prefs?mode=memory&cache=shared")
        .await
        .expect("connect");
    repo.migrate().await.expect("migrate");

    assert!(repo.week().await.unwrap().is_none());
    assert!(repo.heartbeat_at().await.unwrap().is_none());

    repo.set_week(StudyWeek::new(4)).await.unwrap();
    repo.record_heartbeat(fixed_now()).await.unwrap();

    assert_eq!(repo.week().await.unwrap(), Some(StudyWeek::new(4)));
    assert_eq!(repo.heartbeat_at().await.unwrap(), Some(fixed_now()));

    repo.set_week(StudyWeek::new(5)).await.unwrap();
    assert_eq!(repo.week().await.unwrap(), Some(StudyWeek::new(5)));
}

#[tokio::test]
async fn sqlite_storage_aggregate_serves_all_stores() {
    let storage = Storage::sqlite("sqlite:file:memdb_aggregate?mode=memory&cache=shared")
        .await
        .expect("storage");

    storage.wear.upsert_day(&build_wear_day(90, 10)).await.unwrap();
    storage.cumulative.append(&build_reading(0, 25)).await.unwrap();
    storage
        .goals
        .append(&DailyGoal::from_persisted(today(), StudyWeek::new(2), fixed_now(), 840).unwrap())
        .await
        .unwrap();
    storage.prefs.set_week(StudyWeek::new(2)).await.unwrap();

    assert_eq!(
        storage
            .wear
            .last_for_day(today())
            .await
            .unwrap()
            .unwrap()
            .worn_minutes(),
        90
    );
    assert_eq!(
        storage
            .cumulative
            .last_for_day(today())
            .await
            .unwrap()
            .unwrap()
            .cumulative_minutes,
        25
    );
    assert_eq!(
        storage.goals.latest().await.unwrap().unwrap().goal_minutes(),
        840
    );
    assert_eq!(storage.prefs.week().await.unwrap(), Some(StudyWeek::new(2)));
}
