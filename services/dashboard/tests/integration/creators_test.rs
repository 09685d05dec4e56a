use collab_dashboard::domain::types::{DataSource, RECOMMENDED_CREATORS_LIMIT};
use collab_dashboard::error::DashboardServiceError;
use collab_dashboard::usecase::creators::RecommendCreatorsUseCase;

use crate::helpers::{MockCreatorRepo, creator};

#[tokio::test]
async fn should_recommend_creators_in_category() {
    let repo = MockCreatorRepo::new(vec![
        creator("Sarah Creator", &["fashion", "beauty"]),
        creator("Mike Vlogger", &["tech"]),
        creator("Emma Beauty", &["beauty", "makeup"]),
    ]);
    let uc = RecommendCreatorsUseCase {
        creators: repo,
        sample_fallback: true,
    };

    let result = uc.execute("beauty").await.unwrap();

    assert_eq!(result.source, DataSource::Live);
    let mut names: Vec<_> = result.data.iter().map(|c| c.name.as_str()).collect();
    names.sort_unstable();
    assert_eq!(names, ["Emma Beauty", "Sarah Creator"]);
}

#[tokio::test]
async fn should_cap_recommendations() {
    let creators = (0..8)
        .map(|i| creator(&format!("Creator {i}"), &["fashion"]))
        .collect();
    let uc = RecommendCreatorsUseCase {
        creators: MockCreatorRepo::new(creators),
        sample_fallback: true,
    };

    let result = uc.execute("fashion").await.unwrap();
    assert_eq!(result.data.len() as u64, RECOMMENDED_CREATORS_LIMIT);
}

#[tokio::test]
async fn should_normalize_category() {
    let uc = RecommendCreatorsUseCase {
        creators: MockCreatorRepo::new(vec![creator("Mike Vlogger", &["tech"])]),
        sample_fallback: false,
    };

    let result = uc.execute("  Tech ").await.unwrap();
    assert_eq!(result.data.len(), 1);
}

#[tokio::test]
async fn should_reject_blank_category() {
    let uc = RecommendCreatorsUseCase {
        creators: MockCreatorRepo::default(),
        sample_fallback: true,
    };
    let result = uc.execute("   ").await;
    assert!(matches!(result, Err(DashboardServiceError::MissingData)));
}

#[tokio::test]
async fn should_serve_sample_creators_for_unknown_category() {
    let uc = RecommendCreatorsUseCase {
        creators: MockCreatorRepo::new(vec![creator("Mike Vlogger", &["tech"])]),
        sample_fallback: true,
    };

    let result = uc.execute("pottery").await.unwrap();
    assert_eq!(result.source, DataSource::Sample);
    assert_eq!(result.data[0].name, "Sarah Creator");
}

#[tokio::test]
async fn should_propagate_store_failure() {
    let uc = RecommendCreatorsUseCase {
        creators: MockCreatorRepo::failing(),
        sample_fallback: true,
    };
    let result = uc.execute("fashion").await;
    assert!(matches!(result, Err(DashboardServiceError::Internal(_))));
}
