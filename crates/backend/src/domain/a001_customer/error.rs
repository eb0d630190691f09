use contracts::domain::a001_customer::aggregate::CustomerId;
use thiserror::Error;

/// Ошибки клиента, которые обработчики превращают в 4xx
#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("customer {0} not found")]
    NotFound(CustomerId),
}
