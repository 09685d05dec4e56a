use uuid::Uuid;

use collab_dashboard::domain::types::DataSource;
use collab_dashboard::error::DashboardServiceError;
use collab_dashboard::usecase::missions::{AssignedMissionsUseCase, BrandMissionsUseCase};
use collab_dashboard::usecase::sample::SAMPLE_BRAND_ID;
use collab_domain::mission::MissionStatus;

use crate::helpers::{MockMissionRepo, mission};

#[tokio::test]
async fn should_list_brand_missions_newest_first() {
    let brand = Uuid::now_v7();
    let other_brand = Uuid::now_v7();
    let repo = MockMissionRepo::new(vec![
        mission(brand, &[], MissionStatus::Pending, 10, 5),
        mission(other_brand, &[], MissionStatus::Pending, 0, 5),
        mission(brand, &[], MissionStatus::Completed, 1, 5),
    ]);

    let uc = BrandMissionsUseCase {
        missions: repo,
        sample_fallback: true,
    };
    let result = uc.execute(brand).await.unwrap();

    assert_eq!(result.source, DataSource::Live);
    assert_eq!(result.data.len(), 2);
    assert!(result.data.iter().all(|m| m.brand_id == brand));
    assert!(result.data[0].created_at > result.data[1].created_at);
}

#[tokio::test]
async fn should_serve_sample_missions_when_brand_has_none() {
    let uc = BrandMissionsUseCase {
        missions: MockMissionRepo::default(),
        sample_fallback: true,
    };
    let result = uc.execute(Uuid::now_v7()).await.unwrap();

    assert_eq!(result.source, DataSource::Sample);
    assert_eq!(result.data.len(), 3);
    assert!(result.data.iter().all(|m| m.brand_id == SAMPLE_BRAND_ID));
}

#[tokio::test]
async fn should_return_empty_when_fallback_disabled() {
    let uc = BrandMissionsUseCase {
        missions: MockMissionRepo::default(),
        sample_fallback: false,
    };
    let result = uc.execute(Uuid::now_v7()).await.unwrap();

    assert_eq!(result.source, DataSource::Live);
    assert!(result.data.is_empty());
}

#[tokio::test]
async fn should_propagate_store_failure_instead_of_sample() {
    let uc = BrandMissionsUseCase {
        missions: MockMissionRepo::failing(),
        sample_fallback: true,
    };
    let result = uc.execute(Uuid::now_v7()).await;
    assert!(matches!(result, Err(DashboardServiceError::Internal(_))));
}

#[tokio::test]
async fn should_list_assigned_missions_by_deadline() {
    let creator = Uuid::now_v7();
    let brand = Uuid::now_v7();
    let repo = MockMissionRepo::new(vec![
        mission(brand, &[creator], MissionStatus::InProgress, 3, 14),
        mission(brand, &[Uuid::now_v7()], MissionStatus::Pending, 2, 1),
        mission(brand, &[creator, Uuid::now_v7()], MissionStatus::Pending, 1, 2),
    ]);

    let uc = AssignedMissionsUseCase {
        missions: repo,
        sample_fallback: true,
    };
    let result = uc.execute(creator).await.unwrap();

    assert_eq!(result.source, DataSource::Live);
    assert_eq!(result.data.len(), 2);
    assert!(result.data[0].deadline < result.data[1].deadline);
    assert!(result.data.iter().all(|m| m.assigned_creator_ids.contains(&creator)));
}

#[tokio::test]
async fn should_serve_sample_assignments_by_deadline() {
    let uc = AssignedMissionsUseCase {
        missions: MockMissionRepo::default(),
        sample_fallback: true,
    };
    let result = uc.execute(Uuid::now_v7()).await.unwrap();

    assert_eq!(result.source, DataSource::Sample);
    assert!(result.data.windows(2).all(|w| w[0].deadline <= w[1].deadline));
}
