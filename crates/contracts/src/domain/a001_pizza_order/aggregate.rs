use serde::{Deserialize, Serialize};

// ============================================================================
// Catalog
// ============================================================================

/// Топпинг из каталога: идентификатор (значение чекбокса) и отображаемое имя
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topping {
    pub id: &'static str,
    pub name: &'static str,
}

/// Каталог топпингов в порядке отображения
pub const TOPPINGS: &[Topping] = &[
    Topping { id: "1", name: "Pepperoni" },
    Topping { id: "2", name: "Green Peppers" },
    Topping { id: "3", name: "Pineapple" },
    Topping { id: "4", name: "Mushrooms" },
    Topping { id: "5", name: "Ham" },
];

/// Позиция топпинга в каталоге, `None` для неизвестного идентификатора
pub fn topping_position(id: &str) -> Option<usize> {
    TOPPINGS.iter().position(|t| t.id == id)
}

/// Размер пиццы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PizzaSize {
    S,
    M,
    L,
}

impl PizzaSize {
    pub const ALL: [PizzaSize; 3] = [PizzaSize::S, PizzaSize::M, PizzaSize::L];

    pub fn code(&self) -> &'static str {
        match self {
            PizzaSize::S => "S",
            PizzaSize::M => "M",
            PizzaSize::L => "L",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PizzaSize::S => "Small",
            PizzaSize::M => "Medium",
            PizzaSize::L => "Large",
        }
    }

    /// Exact match on the select value; no trimming, no case folding.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}

// ============================================================================
// Form state
// ============================================================================

/// Поля формы, проходящие поштучную валидацию
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderField {
    FullName,
    Size,
}

/// Сырые значения формы заказа, как их ввёл пользователь
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderFormValues {
    pub full_name: String,
    /// Raw select value: "" until the user picks a size.
    pub size: String,
    /// Catalog ids, unique, kept in catalog order.
    pub toppings: Vec<String>,
}

impl OrderFormValues {
    pub fn has_topping(&self, id: &str) -> bool {
        self.toppings.iter().any(|t| t == id)
    }
}

/// Сообщения об ошибках по полям; пустая строка означает отсутствие ошибки
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OrderFormErrors {
    pub full_name: String,
    pub size: String,
}

impl OrderFormErrors {
    pub fn set(&mut self, field: OrderField, message: String) {
        match field {
            OrderField::FullName => self.full_name = message,
            OrderField::Size => self.size = message,
        }
    }
}

// ============================================================================
// Wire DTOs
// ============================================================================

/// Тело запроса `POST /api/order`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    #[serde(rename = "fullName")]
    pub full_name: String,
    pub size: PizzaSize,
    pub toppings: Vec<String>,
}

/// Ответ сервера (и при успехе, и при ошибке)
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderReply {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique_and_ordered() {
        let ids: Vec<&str> = TOPPINGS.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
        assert_eq!(topping_position("3"), Some(2));
        assert_eq!(topping_position("6"), None);
    }

    #[test]
    fn test_size_codes() {
        assert_eq!(PizzaSize::from_code("M"), Some(PizzaSize::M));
        assert_eq!(PizzaSize::from_code("m"), None);
        assert_eq!(PizzaSize::from_code(""), None);
        assert_eq!(PizzaSize::L.label(), "Large");
    }

    #[test]
    fn test_request_wire_format() {
        let request = OrderRequest {
            full_name: "Alice Smith".to_string(),
            size: PizzaSize::L,
            toppings: vec!["1".to_string(), "3".to_string()],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "fullName": "Alice Smith",
                "size": "L",
                "toppings": ["1", "3"]
            })
        );
    }

    #[test]
    fn test_reply_tolerates_missing_and_extra_fields() {
        let reply: OrderReply = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert_eq!(reply.message, None);
        let reply: OrderReply = serde_json::from_str(r#"{"message":"hi","id":7}"#).unwrap();
        assert_eq!(reply.message.as_deref(), Some("hi"));
    }
}
