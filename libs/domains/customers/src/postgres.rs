use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbBackend, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, Statement, Value,
};

use crate::{
    entity,
    error::{RepositoryError, RepositoryResult},
    models::{Customer, CustomerInput},
    repository::CustomerRepository,
};

const SEARCH_BY_NAME: &str =
    r#"SELECT * FROM "customers" WHERE "name" ILIKE $1 ORDER BY "id""#;

/// Postgres implementation of CustomerRepository
#[derive(Clone)]
pub struct PgCustomerRepository {
    db: DatabaseConnection,
}

impl PgCustomerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Ids beyond the `SERIAL` range cannot exist in the table.
fn primary_key(id: u32) -> RepositoryResult<i32> {
    i32::try_from(id).map_err(|_| RepositoryError::NotFound(id))
}

/// `ILIKE` pattern matching `needle` literally anywhere in the value.
pub(crate) fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl CustomerRepository for PgCustomerRepository {
    async fn create(&self, input: CustomerInput) -> RepositoryResult<Customer> {
        let active_model: entity::ActiveModel = input.into();
        let model = active_model.insert(&self.db).await?;

        tracing::info!(customer_id = model.id, "Created customer");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: u32) -> RepositoryResult<Customer> {
        let model = entity::Entity::find_by_id(primary_key(id)?)
            .one(&self.db)
            .await?;

        model.map(Into::into).ok_or(RepositoryError::NotFound(id))
    }

    async fn get_all(&self) -> RepositoryResult<Vec<Customer>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn get_by_name(&self, name: &str) -> RepositoryResult<Vec<Customer>> {
        let models = entity::Entity::find()
            .from_raw_sql(Statement::from_sql_and_values(
                DbBackend::Postgres,
                SEARCH_BY_NAME,
                [Value::from(contains_pattern(name))],
            ))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: u32, input: CustomerInput) -> RepositoryResult<Customer> {
        let active_model = entity::ActiveModel::for_update(primary_key(id)?, input);

        let model = match active_model.update(&self.db).await {
            Ok(model) => model,
            Err(DbErr::RecordNotUpdated) => return Err(RepositoryError::NotFound(id)),
            Err(e) => return Err(e.into()),
        };

        tracing::info!(customer_id = id, "Updated customer");
        Ok(model.into())
    }

    async fn delete(&self, id: u32) -> RepositoryResult<()> {
        let result = entity::Entity::delete_by_id(primary_key(id)?)
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        tracing::info!(customer_id = id, "Deleted customer");
        Ok(())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        Ok(entity::Entity::find().count(&self.db).await?)
    }
}
