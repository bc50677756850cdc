use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::entity::prelude::*;

use crate::models::{Customer, CustomerInput};

/// Sea-ORM entity for the `customers` table
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    pub active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub const TAG: &'static str = "customers";
}

impl From<Model> for Customer {
    fn from(model: Model) -> Self {
        Self {
            // SERIAL keys start at 1
            id: model.id.unsigned_abs(),
            name: model.name,
            email: model.email,
            phone: model.phone,
            address: model.address,
            active: model.active,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

impl From<CustomerInput> for ActiveModel {
    fn from(input: CustomerInput) -> Self {
        let input = input.normalized();
        let now = chrono::Utc::now();

        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            email: Set(input.email),
            phone: Set(input.phone),
            address: Set(input.address),
            active: Set(input.active),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}

impl ActiveModel {
    /// Full replacement of the client-controlled columns of row `id`.
    pub fn for_update(id: i32, input: CustomerInput) -> Self {
        let input = input.normalized();

        ActiveModel {
            id: Unchanged(id),
            name: Set(input.name),
            email: Set(input.email),
            phone: Set(input.phone),
            address: Set(input.address),
            active: Set(input.active),
            created_at: NotSet,
            updated_at: Set(chrono::Utc::now().into()),
        }
    }
}
