use serde::{Deserialize, Serialize};

use crate::domain::common::{AggregateId, AggregateRoot};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный числовой идентификатор клиента
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(pub i64);

impl CustomerId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AggregateId for CustomerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        <i64 as AggregateId>::from_string(s).map(CustomerId::new)
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Клиент
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "customer_id")]
    pub id: CustomerId,

    #[serde(rename = "customer_firstName")]
    pub first_name: String,

    #[serde(rename = "customer_lastName")]
    pub last_name: String,

    #[serde(rename = "customer_phone")]
    pub phone: String,

    #[serde(rename = "customer_email")]
    pub email: String,

    #[serde(rename = "customer_address")]
    pub address: String,

    #[serde(default)]
    pub gender: String,
}

impl Customer {
    /// Создать клиента из DTO с уже назначенным ID
    pub fn from_dto(id: CustomerId, dto: &CustomerDto) -> Self {
        let mut customer = Self {
            id,
            first_name: String::new(),
            last_name: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            gender: String::new(),
        };
        customer.update(dto);
        customer
    }

    /// Обновить данные из DTO (ID не меняется)
    pub fn update(&mut self, dto: &CustomerDto) {
        self.first_name = dto.first_name.trim().to_string();
        self.last_name = dto.last_name.trim().to_string();
        self.phone = dto.phone.trim().to_string();
        self.email = dto.email.trim().to_string();
        self.address = dto.address.trim().to_string();
        self.gender = dto.gender.trim().to_string();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.first_name.trim().is_empty() {
            return Err("First name must not be empty".into());
        }
        if self.last_name.trim().is_empty() {
            return Err("Last name must not be empty".into());
        }
        if self.phone.trim().is_empty() {
            return Err("Contact number must not be empty".into());
        }
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            return Err(format!("Invalid email address: {}", self.email));
        }
        Ok(())
    }
}

impl AggregateRoot for Customer {
    type Id = CustomerId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn aggregate_index() -> &'static str {
        "a001"
    }

    fn collection_name() -> &'static str {
        "customer"
    }

    fn element_name() -> &'static str {
        "Customer"
    }

    fn list_name() -> &'static str {
        "Customers"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления клиента
///
/// `id == None` означает создание новой записи.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CustomerDto {
    #[serde(rename = "customer_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CustomerId>,

    #[serde(rename = "customer_firstName")]
    pub first_name: String,

    #[serde(rename = "customer_lastName")]
    pub last_name: String,

    #[serde(rename = "customer_phone")]
    pub phone: String,

    #[serde(rename = "customer_email", default)]
    pub email: String,

    #[serde(rename = "customer_address", default)]
    pub address: String,

    #[serde(default)]
    pub gender: String,
}

impl From<&Customer> for CustomerDto {
    fn from(c: &Customer) -> Self {
        Self {
            id: Some(c.id),
            first_name: c.first_name.clone(),
            last_name: c.last_name.clone(),
            phone: c.phone.clone(),
            email: c.email.clone(),
            address: c.address.clone(),
            gender: c.gender.clone(),
        }
    }
}

/// Ответ на POST /api/customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSaveResponse {
    pub id: CustomerId,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> Customer {
        Customer {
            id: CustomerId(3),
            first_name: "Ann".into(),
            last_name: "Lee".into(),
            phone: "0771234567".into(),
            email: "ann@example.com".into(),
            address: "12 Main St".into(),
            gender: "Female".into(),
        }
    }

    #[test]
    fn test_customer_uses_wire_field_names() {
        let json = serde_json::to_value(ann()).unwrap();
        assert_eq!(json["customer_id"], 3);
        assert_eq!(json["customer_firstName"], "Ann");
        assert_eq!(json["customer_lastName"], "Lee");
        assert_eq!(json["customer_phone"], "0771234567");
        assert_eq!(json["customer_email"], "ann@example.com");
        assert_eq!(json["customer_address"], "12 Main St");
        assert_eq!(json["gender"], "Female");
    }

    #[test]
    fn test_customer_parses_from_api_payload() {
        let payload = r#"{
            "customer_id": 3,
            "customer_firstName": "Ann",
            "customer_lastName": "Lee",
            "customer_phone": "0771234567",
            "customer_email": "ann@example.com",
            "customer_address": "12 Main St",
            "gender": "Female"
        }"#;
        let parsed: Customer = serde_json::from_str(payload).unwrap();
        assert_eq!(parsed, ann());
    }

    #[test]
    fn test_dto_without_id_means_create() {
        let payload = r#"{
            "customer_firstName": "Bob",
            "customer_lastName": "Ray",
            "customer_phone": "123"
        }"#;
        let dto: CustomerDto = serde_json::from_str(payload).unwrap();
        assert_eq!(dto.id, None);
        assert_eq!(dto.email, "");

        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("customer_id").is_none());
    }

    #[test]
    fn test_validate_rejects_blank_required_fields() {
        let mut c = ann();
        assert!(c.validate().is_ok());

        c.first_name = "  ".into();
        assert!(c.validate().is_err());

        let mut c = ann();
        c.phone = String::new();
        assert!(c.validate().is_err());

        let mut c = ann();
        c.email = "not-an-email".into();
        assert!(c.validate().is_err());

        let mut c = ann();
        c.email = String::new();
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_update_from_dto_trims_and_keeps_id() {
        let mut c = ann();
        let dto = CustomerDto {
            id: Some(CustomerId(99)),
            first_name: " Anna ".into(),
            ..CustomerDto::from(&c)
        };
        c.update(&dto);
        assert_eq!(c.id, CustomerId(3));
        assert_eq!(c.first_name, "Anna");
    }

    #[test]
    fn test_aggregate_metadata() {
        assert_eq!(<Customer as AggregateRoot>::full_name(), "a001_customer");
        assert_eq!(Customer::api_path(), "/api/customer");
    }
}
