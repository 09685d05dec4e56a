//! Built-in records served when the store has nothing to show yet, so a fresh
//! deployment still renders a populated dashboard.

use chrono::{DateTime, Duration, Utc};
use tracing::info;
use uuid::Uuid;

use collab_domain::mission::{MissionStatus, PaymentStatus};

use crate::domain::types::{
    Activity, BrandStats, Creator, CreatorStats, Mission, MissionStats, Payment, Sourced,
};

pub const SAMPLE_BRAND_ID: Uuid = Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0b01);
pub const SAMPLE_CREATOR_IDS: [Uuid; 3] = [
    Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0c01),
    Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0c02),
    Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0c03),
];
const SAMPLE_MISSION_IDS: [Uuid; 3] = [
    Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0d01),
    Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0d02),
    Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0d03),
];

/// Tag `rows` as live, or swap in `sample()` when they are empty and fallback is on.
pub fn live_or_sample<T>(
    rows: Vec<T>,
    fallback: bool,
    query: &'static str,
    sample: impl FnOnce() -> Vec<T>,
) -> Sourced<Vec<T>> {
    if rows.is_empty() && fallback {
        info!(query, "store returned no rows, serving sample data");
        Sourced::sample(sample())
    } else {
        Sourced::live(rows)
    }
}

fn avatar(name: &str, background: &str) -> String {
    format!(
        "https://ui-avatars.com/api/?name={}&background={background}&color=fff",
        name.replace(' ', "+")
    )
}

pub fn creators() -> Vec<Creator> {
    let [sarah, mike, emma] = SAMPLE_CREATOR_IDS;
    vec![
        Creator {
            id: sarah,
            user_id: None,
            name: "Sarah Creator".to_owned(),
            email: "sarah@creator.com".to_owned(),
            categories: vec!["fashion".into(), "beauty".into(), "lifestyle".into()],
            bio: "Content creator specializing in fashion and lifestyle content with over 5 years of experience.".to_owned(),
            photo_url: avatar("Sarah Creator", "FF5733"),
            rating: 4.8,
        },
        Creator {
            id: mike,
            user_id: None,
            name: "Mike Vlogger".to_owned(),
            email: "mike@vlogger.com".to_owned(),
            categories: vec!["tech".into(), "gaming".into(), "reviews".into()],
            bio: "Tech enthusiast and product reviewer with a focus on honest, detailed reviews.".to_owned(),
            photo_url: avatar("Mike Vlogger", "9C27B0"),
            rating: 4.6,
        },
        Creator {
            id: emma,
            user_id: None,
            name: "Emma Beauty".to_owned(),
            email: "emma@beauty.com".to_owned(),
            categories: vec!["beauty".into(), "skincare".into(), "makeup".into()],
            bio: "Certified makeup artist sharing beauty tips, product reviews, and tutorials.".to_owned(),
            photo_url: avatar("Emma Beauty", "E91E63"),
            rating: 4.9,
        },
    ]
}

/// Sample missions, newest first. Deadlines are relative to `now`.
pub fn missions(now: DateTime<Utc>) -> Vec<Mission> {
    let [sarah, mike, _] = SAMPLE_CREATOR_IDS;
    let [showcase, unboxing, lifestyle] = SAMPLE_MISSION_IDS;
    vec![
        Mission {
            id: showcase,
            title: "Summer Collection Showcase".to_owned(),
            kind: "Product Photography".to_owned(),
            brand_id: SAMPLE_BRAND_ID,
            brand_name: "Fashion Brand".to_owned(),
            assigned_creator_ids: vec![sarah],
            deadline: now + Duration::days(7),
            budget: 500,
            status: MissionStatus::InProgress,
            completed_at: None,
            created_at: now,
        },
        Mission {
            id: unboxing,
            title: "Product Unboxing Video".to_owned(),
            kind: "Video Content".to_owned(),
            brand_id: SAMPLE_BRAND_ID,
            brand_name: "Tech Company".to_owned(),
            assigned_creator_ids: vec![mike],
            deadline: now + Duration::days(14),
            budget: 750,
            status: MissionStatus::Pending,
            completed_at: None,
            created_at: now - Duration::days(2),
        },
        Mission {
            id: lifestyle,
            title: "Lifestyle Integration".to_owned(),
            kind: "Instagram Post".to_owned(),
            brand_id: SAMPLE_BRAND_ID,
            brand_name: "Lifestyle Brand".to_owned(),
            assigned_creator_ids: vec![sarah],
            deadline: now - Duration::days(5),
            budget: 300,
            status: MissionStatus::Completed,
            completed_at: Some(now - Duration::days(6)),
            created_at: now - Duration::days(15),
        },
    ]
}

/// Sample missions ordered by deadline, the way assigned missions are listed.
pub fn missions_by_deadline(now: DateTime<Utc>) -> Vec<Mission> {
    let mut missions = missions(now);
    missions.sort_by_key(|m| m.deadline);
    missions
}

pub fn payments(now: DateTime<Utc>) -> Vec<Payment> {
    let [sarah, _, _] = SAMPLE_CREATOR_IDS;
    let [showcase, _, lifestyle] = SAMPLE_MISSION_IDS;
    vec![
        Payment {
            id: Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0e02),
            mission_id: showcase,
            creator_id: sarah,
            brand_id: SAMPLE_BRAND_ID,
            amount_cents: 50_000,
            currency: "USD".to_owned(),
            status: PaymentStatus::Pending,
            created_at: now - Duration::hours(2),
        },
        Payment {
            id: Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0e01),
            mission_id: lifestyle,
            creator_id: sarah,
            brand_id: SAMPLE_BRAND_ID,
            amount_cents: 30_000,
            currency: "USD".to_owned(),
            status: PaymentStatus::Paid,
            created_at: now - Duration::days(4),
        },
    ]
}

pub fn brand_stats() -> BrandStats {
    BrandStats {
        missions: MissionStats {
            total: 12,
            pending: 2,
            in_progress: 2,
            completed: 8,
            cancelled: 0,
        },
        total_creators: 15,
    }
}

pub fn creator_stats() -> CreatorStats {
    CreatorStats {
        missions: MissionStats {
            total: 8,
            pending: 1,
            in_progress: 1,
            completed: 6,
            cancelled: 0,
        },
        total_earnings_cents: 250_000,
        average_rating: Some(4.8),
        completion_rate: Some(95),
        on_time_delivery_rate: Some(98),
    }
}

/// Sample timeline for `user_id`, newest first. Times are relative to `now`.
pub fn activities(user_id: Uuid, now: DateTime<Utc>) -> Vec<Activity> {
    [
        (
            0x0f01,
            "New Mission Created",
            "You created a new mission: Summer Collection Showcase",
            Duration::hours(2),
        ),
        (
            0x0f02,
            "Mission Accepted",
            "Sarah Creator accepted your mission: Product Unboxing Video",
            Duration::days(1),
        ),
        (
            0x0f03,
            "Content Delivered",
            "Mike Vlogger delivered content for: Lifestyle Integration",
            Duration::days(3),
        ),
        (
            0x0f04,
            "Payment Processed",
            "Payment of $300 processed for: Lifestyle Integration",
            Duration::days(4),
        ),
    ]
    .into_iter()
    .map(|(suffix, title, description, ago)| Activity {
        id: Uuid::from_u128(0x0190_0000_0000_7000_8000_0000_0000_0000 | suffix),
        user_id,
        title: title.to_owned(),
        description: description.to_owned(),
        occurred_at: now - ago,
    })
    .collect()
}
