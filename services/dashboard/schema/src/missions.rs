use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "missions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    /// Deliverable type, e.g. "Product Photography".
    pub kind: String,
    pub brand_id: Uuid,
    pub brand_name: String,
    pub assigned_creator_ids: Vec<Uuid>,
    pub deadline: chrono::DateTime<chrono::Utc>,
    /// Whole currency units.
    pub budget: i64,
    /// `MissionStatus` wire name.
    pub status: String,
    /// Set when the mission moves to `completed`.
    pub completed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
