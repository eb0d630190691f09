use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Трейт для типов идентификаторов агрегатов
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки (например, из сегмента пути `/api/customer/:id`)
    fn from_string(s: &str) -> Result<Self, String>;
}

impl AggregateId for i64 {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map_err(|e| format!("Invalid i64: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i64_id_parses_path_segment() {
        assert_eq!(<i64 as AggregateId>::from_string("42"), Ok(42));
        assert_eq!(<i64 as AggregateId>::from_string(" 7 "), Ok(7));
        assert!(<i64 as AggregateId>::from_string("abc").is_err());
        assert_eq!(AggregateId::as_string(&0_i64), "0");
    }
}
