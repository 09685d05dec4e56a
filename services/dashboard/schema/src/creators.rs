use sea_orm::entity::prelude::*;

/// Creator listing shown to brands.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "creators")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning account in the auth service, if the creator has signed up.
    pub user_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub categories: Vec<String>,
    pub bio: String,
    pub photo_url: String,
    pub rating: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
