use chrono::Utc;
use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto, CustomerId};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_customer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub gender: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Customer {
    fn from(m: Model) -> Self {
        Customer {
            id: CustomerId(m.id),
            first_name: m.first_name,
            last_name: m.last_name,
            phone: m.phone,
            email: m.email,
            address: m.address,
            gender: m.gender,
        }
    }
}

pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Customer>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_asc(Column::Id)
        .all(db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(db: &DatabaseConnection, id: CustomerId) -> anyhow::Result<Option<Customer>> {
    let result = Entity::find_by_id(id.value())
        .filter(Column::IsDeleted.eq(false))
        .one(db)
        .await?;
    Ok(result.map(Into::into))
}

/// Вставка новой записи; ID назначает SQLite
pub async fn insert(db: &DatabaseConnection, dto: &CustomerDto) -> anyhow::Result<CustomerId> {
    let now = Utc::now();
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        first_name: Set(dto.first_name.trim().to_string()),
        last_name: Set(dto.last_name.trim().to_string()),
        phone: Set(dto.phone.trim().to_string()),
        email: Set(dto.email.trim().to_string()),
        address: Set(dto.address.trim().to_string()),
        gender: Set(dto.gender.trim().to_string()),
        is_deleted: Set(false),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
    };
    let model = active.insert(db).await?;
    Ok(CustomerId(model.id))
}

pub async fn update(db: &DatabaseConnection, customer: &Customer) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(customer.id.value()),
        first_name: Set(customer.first_name.clone()),
        last_name: Set(customer.last_name.clone()),
        phone: Set(customer.phone.clone()),
        email: Set(customer.email.clone()),
        address: Set(customer.address.clone()),
        gender: Set(customer.gender.clone()),
        is_deleted: sea_orm::ActiveValue::NotSet,
        created_at: sea_orm::ActiveValue::NotSet,
        updated_at: Set(Some(Utc::now())),
    };
    active.update(db).await?;
    Ok(())
}

pub async fn soft_delete(db: &DatabaseConnection, id: CustomerId) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.value()))
        .filter(Column::IsDeleted.eq(false))
        .exec(db)
        .await?;
    Ok(result.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::connect_in_memory;

    fn dto(first: &str, last: &str) -> CustomerDto {
        CustomerDto {
            id: None,
            first_name: first.into(),
            last_name: last.into(),
            phone: "0771234567".into(),
            email: format!("{}@example.com", first.to_lowercase()),
            address: "Colombo".into(),
            gender: "Female".into(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids_and_lists_in_order() {
        let db = connect_in_memory().await.unwrap();
        let a = insert(&db, &dto("Ann", "Lee")).await.unwrap();
        let b = insert(&db, &dto("Bea", "Fox")).await.unwrap();
        assert!(a < b);

        let all = list_all(&db).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, a);
        assert_eq!(all[0].first_name, "Ann");
        assert_eq!(all[1].id, b);
    }

    #[tokio::test]
    async fn test_soft_delete_hides_record_and_is_not_repeatable() {
        let db = connect_in_memory().await.unwrap();
        let a = insert(&db, &dto("Ann", "Lee")).await.unwrap();
        let b = insert(&db, &dto("Bea", "Fox")).await.unwrap();

        assert!(soft_delete(&db, a).await.unwrap());
        assert!(!soft_delete(&db, a).await.unwrap());
        assert!(get_by_id(&db, a).await.unwrap().is_none());

        let all = list_all(&db).await.unwrap();
        assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), vec![b]);
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let db = connect_in_memory().await.unwrap();
        let id = insert(&db, &dto("Ann", "Lee")).await.unwrap();
        let mut customer = get_by_id(&db, id).await.unwrap().unwrap();
        customer.address = "Kandy".into();
        update(&db, &customer).await.unwrap();

        let reloaded = get_by_id(&db, id).await.unwrap().unwrap();
        assert_eq!(reloaded.address, "Kandy");
        assert_eq!(reloaded.first_name, "Ann");
    }

    #[tokio::test]
    async fn test_missing_id_is_none() {
        let db = connect_in_memory().await.unwrap();
        assert!(get_by_id(&db, CustomerId(404)).await.unwrap().is_none());
        assert!(!soft_delete(&db, CustomerId(404)).await.unwrap());
    }
}
