use super::repository;
use super::CustomerError;
use contracts::domain::a001_customer::aggregate::{Customer, CustomerDto, CustomerId};
use sea_orm::DatabaseConnection;

/// Создание нового клиента
pub async fn create(db: &DatabaseConnection, dto: CustomerDto) -> anyhow::Result<CustomerId> {
    // Валидация на временном агрегате: ID ещё не назначен
    Customer::from_dto(CustomerId(0), &dto)
        .validate()
        .map_err(CustomerError::Validation)?;

    let id = repository::insert(db, &dto).await?;
    tracing::info!(customer_id = %id, "customer created");
    Ok(id)
}

/// Обновление существующего клиента
pub async fn update(db: &DatabaseConnection, dto: CustomerDto) -> anyhow::Result<CustomerId> {
    let id = dto
        .id
        .ok_or_else(|| CustomerError::Validation("customer_id is required for update".into()))?;

    let mut aggregate = repository::get_by_id(db, id)
        .await?
        .ok_or(CustomerError::NotFound(id))?;

    aggregate.update(&dto);
    aggregate.validate().map_err(CustomerError::Validation)?;

    repository::update(db, &aggregate).await?;
    tracing::info!(customer_id = %id, "customer updated");
    Ok(id)
}

/// Создание или обновление в зависимости от наличия ID
pub async fn upsert(db: &DatabaseConnection, dto: CustomerDto) -> anyhow::Result<CustomerId> {
    if dto.id.is_some() {
        update(db, dto).await
    } else {
        create(db, dto).await
    }
}

/// Мягкое удаление клиента
pub async fn delete(db: &DatabaseConnection, id: CustomerId) -> anyhow::Result<()> {
    if repository::soft_delete(db, id).await? {
        tracing::info!(customer_id = %id, "customer deleted");
        Ok(())
    } else {
        Err(CustomerError::NotFound(id).into())
    }
}

/// Получение клиента по ID
pub async fn get_by_id(db: &DatabaseConnection, id: CustomerId) -> anyhow::Result<Customer> {
    repository::get_by_id(db, id)
        .await?
        .ok_or_else(|| CustomerError::NotFound(id).into())
}

/// Получение списка всех клиентов
pub async fn list_all(db: &DatabaseConnection) -> anyhow::Result<Vec<Customer>> {
    repository::list_all(db).await
}

fn test_data() -> Vec<CustomerDto> {
    let row = |first: &str, last: &str, phone: &str, email: &str, address: &str, gender: &str| {
        CustomerDto {
            id: None,
            first_name: first.into(),
            last_name: last.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
            gender: gender.into(),
        }
    };
    vec![
        row("Ann", "Perera", "0771234567", "ann.perera@example.com", "12 Galle Rd, Colombo", "Female"),
        row("Kasun", "Silva", "0712345678", "kasun.silva@example.com", "45 Kandy Rd, Kadawatha", "Male"),
        row("Nimali", "Fernando", "0763456789", "nimali@example.com", "8 Lake Dr, Kandy", "Female"),
    ]
}

/// Вставка тестовых данных
pub async fn insert_test_data(db: &DatabaseConnection) -> anyhow::Result<usize> {
    let data = test_data();
    let count = data.len();
    for dto in data {
        create(db, dto).await?;
    }
    Ok(count)
}
