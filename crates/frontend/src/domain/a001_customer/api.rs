//! REST client for `/api/customer`.

use crate::shared::api_utils::api_url;
use contracts::domain::a001_customer::aggregate::{
    Customer, CustomerDto, CustomerId, CustomerSaveResponse,
};
use contracts::domain::common::AggregateRoot;
use gloo_net::http::Request;

fn collection_url() -> String {
    api_url(&Customer::api_path())
}

fn item_url(id: CustomerId) -> String {
    format!("{}/{}", collection_url(), id)
}

/// Получить список клиентов
pub async fn list_customers() -> Result<Vec<Customer>, String> {
    let response = Request::get(&collection_url())
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<Customer>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Получить клиента по ID
pub async fn get_customer(id: CustomerId) -> Result<Customer, String> {
    let response = Request::get(&item_url(id))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.status() == 404 {
        return Err(format!("Customer {} not found", id));
    }
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Customer>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Удалить клиента
pub async fn delete_customer(id: CustomerId) -> Result<(), String> {
    let response = Request::delete(&item_url(id))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

/// Создать или обновить клиента (зависит от `dto.id`)
pub async fn save_customer(dto: &CustomerDto) -> Result<CustomerId, String> {
    let response = Request::post(&collection_url())
        .header("Accept", "application/json")
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if response.status() == 400 {
        return Err("The server rejected the customer data".to_string());
    }
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let saved: CustomerSaveResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(saved.id)
}
