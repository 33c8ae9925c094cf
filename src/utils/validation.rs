use crate::utils::error::{CatalogError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_mongo_uri(field_name: &str, uri: &str) -> Result<()> {
    if uri.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: uri.to_string(),
            reason: "URI cannot be empty".to_string(),
        });
    }

    match Url::parse(uri) {
        Ok(url) => match url.scheme() {
            "mongodb" | "mongodb+srv" => Ok(()),
            scheme => Err(CatalogError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: uri.to_string(),
                reason: format!("Unsupported URI scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: uri.to_string(),
            reason: format!("Invalid URI format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CatalogError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_mongo_uri() {
        assert!(validate_mongo_uri("database.uri", "mongodb://localhost:27017").is_ok());
        assert!(validate_mongo_uri("database.uri", "mongodb+srv://cluster0.example.net").is_ok());
        assert!(validate_mongo_uri("database.uri", "").is_err());
        assert!(validate_mongo_uri("database.uri", "not-a-uri").is_err());
        assert!(validate_mongo_uri("database.uri", "http://localhost:27017").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("server_selection_timeout_secs", 5, 1).is_ok());
        assert!(validate_positive_number("server_selection_timeout_secs", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("database.name", "courses").is_ok());
        assert!(validate_non_empty_string("database.name", "   ").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("courses".to_string());
        let absent: Option<String> = None;
        assert!(validate_required_field("database.collection", &present).is_ok());
        assert!(validate_required_field("database.collection", &absent).is_err());
    }
}
