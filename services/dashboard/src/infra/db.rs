use std::collections::HashSet;

use anyhow::{Context as _, anyhow};
use chrono::{DateTime, Utc};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    sea_query::Expr,
};
use uuid::Uuid;

use collab_core::sea_ext::OrderByRandom;
use collab_dashboard_schema::{activities, creators, missions, payments};
use collab_domain::mission::{MissionStatus, PaymentStatus};
use collab_domain::pagination::PageRequest;

use crate::domain::repository::{
    ActivityRepository, CreatorRepository, MissionRepository, PaymentRepository,
};
use crate::domain::types::{Activity, Creator, Delivery, Mission, Payment, UserType};
use crate::error::DashboardServiceError;

// ── Creator repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCreatorRepository {
    pub db: DatabaseConnection,
}

impl CreatorRepository for DbCreatorRepository {
    async fn recommended(
        &self,
        category: &str,
        limit: u64,
    ) -> Result<Vec<Creator>, DashboardServiceError> {
        let models = creators::Entity::find()
            .filter(Expr::cust_with_values(
                "? = ANY(categories)",
                [category.to_owned()],
            ))
            .order_by_random()
            .limit(limit)
            .all(&self.db)
            .await
            .context("list recommended creators")?;
        Ok(models.into_iter().map(creator_from_model).collect())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Creator>, DashboardServiceError> {
        let models = creators::Entity::find()
            .order_by_asc(creators::Column::Name)
            .order_by_asc(creators::Column::Id)
            .limit(page.limit())
            .offset(page.offset())
            .all(&self.db)
            .await
            .context("list creators")?;
        Ok(models.into_iter().map(creator_from_model).collect())
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Creator>, DashboardServiceError> {
        let model = creators::Entity::find()
            .filter(creators::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find creator by user")?;
        Ok(model.map(creator_from_model))
    }
}

fn creator_from_model(model: creators::Model) -> Creator {
    Creator {
        id: model.id,
        user_id: model.user_id,
        name: model.name,
        email: model.email,
        categories: model.categories,
        bio: model.bio,
        photo_url: model.photo_url,
        rating: model.rating,
    }
}

// ── Mission repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbMissionRepository {
    pub db: DatabaseConnection,
}

fn assigned_to(creator_id: Uuid) -> sea_orm::sea_query::SimpleExpr {
    Expr::cust_with_values("? = ANY(assigned_creator_ids)", [creator_id])
}

impl MissionRepository for DbMissionRepository {
    async fn list_by_brand(&self, brand_id: Uuid) -> Result<Vec<Mission>, DashboardServiceError> {
        let models = missions::Entity::find()
            .filter(missions::Column::BrandId.eq(brand_id))
            .order_by_desc(missions::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list brand missions")?;
        models.into_iter().map(mission_from_model).collect()
    }

    async fn list_assigned(
        &self,
        creator_id: Uuid,
    ) -> Result<Vec<Mission>, DashboardServiceError> {
        let models = missions::Entity::find()
            .filter(assigned_to(creator_id))
            .order_by_asc(missions::Column::Deadline)
            .all(&self.db)
            .await
            .context("list assigned missions")?;
        models.into_iter().map(mission_from_model).collect()
    }

    async fn count_by_status(
        &self,
        user_id: Uuid,
        user_type: UserType,
    ) -> Result<Vec<(MissionStatus, u64)>, DashboardServiceError> {
        let party = match user_type {
            UserType::Brand => missions::Column::BrandId.eq(user_id),
            UserType::Creator => assigned_to(user_id),
        };
        let rows: Vec<(String, i64)> = missions::Entity::find()
            .select_only()
            .column(missions::Column::Status)
            .column_as(Expr::col(missions::Column::Id).count(), "count")
            .filter(party)
            .group_by(missions::Column::Status)
            .into_tuple()
            .all(&self.db)
            .await
            .context("count missions by status")?;

        rows.into_iter()
            .map(|(status, count)| {
                let status = parse_mission_status(&status)?;
                Ok((status, u64::try_from(count).unwrap_or_default()))
            })
            .collect()
    }

    async fn count_assigned_creators(&self, brand_id: Uuid) -> Result<u64, DashboardServiceError> {
        let assigned: Vec<Vec<Uuid>> = missions::Entity::find()
            .select_only()
            .column(missions::Column::AssignedCreatorIds)
            .filter(missions::Column::BrandId.eq(brand_id))
            .into_tuple()
            .all(&self.db)
            .await
            .context("list assigned creators for brand")?;
        let distinct: HashSet<Uuid> = assigned.into_iter().flatten().collect();
        Ok(distinct.len() as u64)
    }

    async fn deliveries(&self, creator_id: Uuid) -> Result<Vec<Delivery>, DashboardServiceError> {
        let rows: Vec<(DateTime<Utc>, Option<DateTime<Utc>>)> = missions::Entity::find()
            .select_only()
            .column(missions::Column::Deadline)
            .column(missions::Column::CompletedAt)
            .filter(assigned_to(creator_id))
            .filter(missions::Column::Status.eq(MissionStatus::Completed.as_str()))
            .filter(missions::Column::CompletedAt.is_not_null())
            .into_tuple()
            .all(&self.db)
            .await
            .context("list deliveries")?;
        Ok(rows
            .into_iter()
            .filter_map(|(deadline, completed_at)| {
                completed_at.map(|completed_at| Delivery {
                    deadline,
                    completed_at,
                })
            })
            .collect())
    }

    async fn list(
        &self,
        status: Option<MissionStatus>,
        page: PageRequest,
    ) -> Result<Vec<Mission>, DashboardServiceError> {
        let mut query = missions::Entity::find();
        if let Some(status) = status {
            query = query.filter(missions::Column::Status.eq(status.as_str()));
        }
        let models = query
            .order_by_desc(missions::Column::CreatedAt)
            .limit(page.limit())
            .offset(page.offset())
            .all(&self.db)
            .await
            .context("list missions")?;
        models.into_iter().map(mission_from_model).collect()
    }
}

fn parse_mission_status(raw: &str) -> Result<MissionStatus, DashboardServiceError> {
    MissionStatus::parse(raw).ok_or_else(|| anyhow!("unknown mission status {raw:?}").into())
}

fn mission_from_model(model: missions::Model) -> Result<Mission, DashboardServiceError> {
    Ok(Mission {
        status: parse_mission_status(&model.status)?,
        id: model.id,
        title: model.title,
        kind: model.kind,
        brand_id: model.brand_id,
        brand_name: model.brand_name,
        assigned_creator_ids: model.assigned_creator_ids,
        deadline: model.deadline,
        budget: model.budget,
        completed_at: model.completed_at,
        created_at: model.created_at,
    })
}

// ── Payment repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPaymentRepository {
    pub db: DatabaseConnection,
}

impl PaymentRepository for DbPaymentRepository {
    async fn list_for_party(
        &self,
        user_id: Uuid,
        page: PageRequest,
    ) -> Result<Vec<Payment>, DashboardServiceError> {
        let models = payments::Entity::find()
            .filter(
                Condition::any()
                    .add(payments::Column::BrandId.eq(user_id))
                    .add(payments::Column::CreatorId.eq(user_id)),
            )
            .order_by_desc(payments::Column::CreatedAt)
            .limit(page.limit())
            .offset(page.offset())
            .all(&self.db)
            .await
            .context("list payments for party")?;
        models.into_iter().map(payment_from_model).collect()
    }

    async fn list(
        &self,
        status: Option<PaymentStatus>,
        page: PageRequest,
    ) -> Result<Vec<Payment>, DashboardServiceError> {
        let mut query = payments::Entity::find();
        if let Some(status) = status {
            query = query.filter(payments::Column::Status.eq(status.as_str()));
        }
        let models = query
            .order_by_desc(payments::Column::CreatedAt)
            .limit(page.limit())
            .offset(page.offset())
            .all(&self.db)
            .await
            .context("list payments")?;
        models.into_iter().map(payment_from_model).collect()
    }

    async fn total_paid_to(&self, creator_id: Uuid) -> Result<i64, DashboardServiceError> {
        // SUM over bigint is numeric in Postgres.
        let total: Option<i64> = payments::Entity::find()
            .select_only()
            .column_as(Expr::cust("COALESCE(SUM(amount_cents), 0)::BIGINT"), "total")
            .filter(payments::Column::CreatorId.eq(creator_id))
            .filter(payments::Column::Status.eq(PaymentStatus::Paid.as_str()))
            .into_tuple()
            .one(&self.db)
            .await
            .context("sum paid payments")?;
        Ok(total.unwrap_or_default())
    }
}

fn payment_from_model(model: payments::Model) -> Result<Payment, DashboardServiceError> {
    let status = PaymentStatus::parse(&model.status)
        .ok_or_else(|| anyhow!("unknown payment status {:?}", model.status))?;
    Ok(Payment {
        id: model.id,
        mission_id: model.mission_id,
        creator_id: model.creator_id,
        brand_id: model.brand_id,
        amount_cents: model.amount_cents,
        currency: model.currency,
        status,
        created_at: model.created_at,
    })
}

// ── Activity repository ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbActivityRepository {
    pub db: DatabaseConnection,
}

impl ActivityRepository for DbActivityRepository {
    async fn recent(
        &self,
        user_id: Uuid,
        limit: u64,
    ) -> Result<Vec<Activity>, DashboardServiceError> {
        let models = activities::Entity::find()
            .filter(activities::Column::UserId.eq(user_id))
            .order_by_desc(activities::Column::OccurredAt)
            .limit(limit)
            .all(&self.db)
            .await
            .context("list recent activities")?;
        Ok(models.into_iter().map(activity_from_model).collect())
    }
}

fn activity_from_model(model: activities::Model) -> Activity {
    Activity {
        id: model.id,
        user_id: model.user_id,
        title: model.title,
        description: model.description,
        occurred_at: model.occurred_at,
    }
}
