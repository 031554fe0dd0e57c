//! Схема валидации формы заказа
//!
//! Правила полей:
//! - `fullName`: обязательное, обрезается по краям, длина 3..=20 символов
//! - `size`: обязательное, одно из S / M / L
//! - `toppings`: список строк без ограничений на элементы

use thiserror::Error;

use super::aggregate::{topping_position, OrderField, OrderFormValues, OrderRequest, PizzaSize};

pub const FULL_NAME_MIN_LEN: usize = 3;
pub const FULL_NAME_MAX_LEN: usize = 20;

/// Ошибка валидации; `Display` даёт текст, который показывается в UI
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Full name is required")]
    FullNameRequired,
    #[error("full name must be at least 3 characters")]
    FullNameTooShort,
    #[error("full name must be at most 20 characters")]
    FullNameTooLong,
    #[error("Must select size")]
    SizeRequired,
    #[error("size must be S or M or L")]
    SizeIncorrect,
    #[error("unknown topping: {0}")]
    UnknownTopping(String),
}

fn validate_full_name(value: &str) -> Result<(), ValidationError> {
    // Length is counted in chars after trimming.
    let len = value.trim().chars().count();
    if len == 0 {
        return Err(ValidationError::FullNameRequired);
    }
    if len < FULL_NAME_MIN_LEN {
        return Err(ValidationError::FullNameTooShort);
    }
    if len > FULL_NAME_MAX_LEN {
        return Err(ValidationError::FullNameTooLong);
    }
    Ok(())
}

fn validate_size(value: &str) -> Result<PizzaSize, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::SizeRequired);
    }
    PizzaSize::from_code(value).ok_or(ValidationError::SizeIncorrect)
}

/// Проверка одного поля в изоляции от остальных
pub fn validate_field(field: OrderField, value: &str) -> Result<(), ValidationError> {
    match field {
        OrderField::FullName => validate_full_name(value),
        OrderField::Size => validate_size(value).map(|_| ()),
    }
}

/// Сообщение об ошибке поля или пустая строка, если поле валидно
pub fn field_message(field: OrderField, value: &str) -> String {
    match validate_field(field, value) {
        Ok(()) => String::new(),
        Err(e) => e.to_string(),
    }
}

/// Проверка каждого идентификатора топпинга по каталогу
pub fn validate_toppings(toppings: &[String]) -> Result<(), ValidationError> {
    match toppings.iter().find(|id| topping_position(id).is_none()) {
        Some(unknown) => Err(ValidationError::UnknownTopping(unknown.clone())),
        None => Ok(()),
    }
}

/// Валидация всей формы. При успехе возвращает готовое тело запроса.
///
/// Toppings are not part of validity, but an id outside the catalog is still
/// reported so a tampered payload never reaches the server.
pub fn validate(values: &OrderFormValues) -> Result<OrderRequest, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = validate_full_name(&values.full_name) {
        errors.push(e);
    }
    let size = match validate_size(&values.size) {
        Ok(size) => Some(size),
        Err(e) => {
            errors.push(e);
            None
        }
    };
    if let Err(e) = validate_toppings(&values.toppings) {
        errors.push(e);
    }

    match size {
        Some(size) if errors.is_empty() => Ok(OrderRequest {
            full_name: values.full_name.clone(),
            size,
            toppings: values.toppings.clone(),
        }),
        _ => Err(errors),
    }
}

/// Whole-form validity used to gate the submit control.
pub fn is_form_valid(values: &OrderFormValues) -> bool {
    validate_full_name(&values.full_name).is_ok() && validate_size(&values.size).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(full_name: &str, size: &str, toppings: &[&str]) -> OrderFormValues {
        OrderFormValues {
            full_name: full_name.to_string(),
            size: size.to_string(),
            toppings: toppings.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_full_name_length_bounds() {
        for len in 0..=25 {
            let name = "a".repeat(len);
            let message = field_message(OrderField::FullName, &name);
            if (FULL_NAME_MIN_LEN..=FULL_NAME_MAX_LEN).contains(&len) {
                assert_eq!(message, "", "len {}", len);
            } else {
                assert!(!message.is_empty(), "len {}", len);
            }
        }
    }

    #[test]
    fn test_full_name_messages() {
        assert_eq!(
            field_message(OrderField::FullName, ""),
            "Full name is required"
        );
        assert_eq!(
            field_message(OrderField::FullName, "    "),
            "Full name is required"
        );
        assert_eq!(
            field_message(OrderField::FullName, "Al"),
            "full name must be at least 3 characters"
        );
        assert_eq!(
            field_message(OrderField::FullName, "Alexandra Maximiliana"),
            "full name must be at most 20 characters"
        );
    }

    #[test]
    fn test_full_name_is_trimmed_before_length_check() {
        assert_eq!(field_message(OrderField::FullName, "  Al  "), "full name must be at least 3 characters");
        assert_eq!(field_message(OrderField::FullName, "   Bob   "), "");
        let padded = format!("  {}  ", "x".repeat(20));
        assert_eq!(field_message(OrderField::FullName, &padded), "");
    }

    #[test]
    fn test_full_name_counts_chars_not_bytes() {
        assert_eq!(field_message(OrderField::FullName, "Жан"), "");
        assert_eq!(field_message(OrderField::FullName, &"ё".repeat(20)), "");
    }

    #[test]
    fn test_size_messages() {
        assert_eq!(field_message(OrderField::Size, ""), "Must select size");
        assert_eq!(field_message(OrderField::Size, "XL"), "size must be S or M or L");
        assert_eq!(field_message(OrderField::Size, "s"), "size must be S or M or L");
        for code in ["S", "M", "L"] {
            assert_eq!(field_message(OrderField::Size, code), "");
        }
    }

    #[test]
    fn test_form_validity_ignores_toppings() {
        assert!(is_form_valid(&values("Alice", "S", &[])));
        assert!(is_form_valid(&values("Alice", "S", &["1", "2", "3", "4", "5"])));
        assert!(!is_form_valid(&values("Al", "M", &["1"])));
        assert!(!is_form_valid(&values("Alice", "", &["1"])));
    }

    #[test]
    fn test_validate_builds_request() {
        let request = validate(&values("Alice Smith", "L", &["1", "3"])).unwrap();
        assert_eq!(request.full_name, "Alice Smith");
        assert_eq!(request.size, PizzaSize::L);
        assert_eq!(request.toppings, vec!["1", "3"]);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let errors = validate(&values("Al", "", &["9"])).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::FullNameTooShort,
                ValidationError::SizeRequired,
                ValidationError::UnknownTopping("9".to_string()),
            ]
        );
    }
}
