use uuid::Uuid;

use collab_dashboard::domain::types::{DataSource, RECENT_ACTIVITIES_LIMIT};
use collab_dashboard::error::DashboardServiceError;
use collab_dashboard::usecase::activities::RecentActivitiesUseCase;

use crate::helpers::{MockActivityRepo, activity};

#[tokio::test]
async fn should_list_own_activities_newest_first() {
    let me = Uuid::now_v7();
    let repo = MockActivityRepo::new(vec![
        activity(me, "Payment Processed", 96),
        activity(me, "New Mission Created", 2),
        activity(Uuid::now_v7(), "Someone else's", 1),
        activity(me, "Mission Accepted", 24),
    ]);
    let uc = RecentActivitiesUseCase {
        activities: repo,
        sample_fallback: true,
    };

    let result = uc.execute(me).await.unwrap();

    assert_eq!(result.source, DataSource::Live);
    let titles: Vec<_> = result.data.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(
        titles,
        ["New Mission Created", "Mission Accepted", "Payment Processed"]
    );
}

#[tokio::test]
async fn should_cap_timeline_at_ten_entries() {
    let me = Uuid::now_v7();
    let repo = MockActivityRepo::new(
        (0..15)
            .map(|hours_ago| activity(me, &format!("event {hours_ago}"), hours_ago))
            .collect(),
    );
    let uc = RecentActivitiesUseCase {
        activities: repo,
        sample_fallback: true,
    };

    let result = uc.execute(me).await.unwrap();

    assert_eq!(result.data.len() as u64, RECENT_ACTIVITIES_LIMIT);
    assert_eq!(result.data[0].title, "event 0");
    assert_eq!(result.data[9].title, "event 9");
}

#[tokio::test]
async fn should_serve_sample_timeline_for_new_account() {
    let me = Uuid::now_v7();
    let uc = RecentActivitiesUseCase {
        activities: MockActivityRepo::default(),
        sample_fallback: true,
    };

    let result = uc.execute(me).await.unwrap();

    assert_eq!(result.source, DataSource::Sample);
    assert_eq!(result.data.len(), 4);
    assert_eq!(result.data[0].title, "New Mission Created");
    assert_eq!(result.data[3].title, "Payment Processed");
    assert!(result.data.iter().all(|a| a.user_id == me));
}

#[tokio::test]
async fn should_stay_empty_when_fallback_disabled() {
    let uc = RecentActivitiesUseCase {
        activities: MockActivityRepo::default(),
        sample_fallback: false,
    };

    let result = uc.execute(Uuid::now_v7()).await.unwrap();

    assert_eq!(result.source, DataSource::Live);
    assert!(result.data.is_empty());
}

#[tokio::test]
async fn should_propagate_store_failure() {
    let uc = RecentActivitiesUseCase {
        activities: MockActivityRepo::failing(),
        sample_fallback: true,
    };
    let result = uc.execute(Uuid::now_v7()).await;
    assert!(matches!(result, Err(DashboardServiceError::Internal(_))));
}
