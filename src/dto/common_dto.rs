use serde::{Deserialize, Serialize};

use crate::repositories::{Page, DEFAULT_PAGE_LIMIT};
use crate::utils::errors::AppResult;

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}

// Response sin datos (borrados)
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn success(message: String) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

// Parámetros de paginación (?skip=0&limit=100, `offset` como alias de `skip`).
// Los negativos los rechaza `Page::new`.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    #[serde(alias = "offset")]
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

impl PaginationParams {
    pub fn into_page(self) -> AppResult<Page> {
        Page::new(
            self.skip.unwrap_or(0),
            self.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::AppError;

    #[test]
    fn test_defaults() {
        let page = PaginationParams::default().into_page().unwrap();
        assert_eq!(page, Page { offset: 0, limit: 100 });
    }

    #[test]
    fn test_negative_values_are_bad_requests() {
        let params = PaginationParams {
            skip: Some(-1),
            limit: None,
        };
        assert!(matches!(params.into_page(), Err(AppError::BadRequest(_))));

        let params = PaginationParams {
            skip: None,
            limit: Some(-5),
        };
        assert!(matches!(params.into_page(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_offset_alias() {
        let params: PaginationParams = serde_json::from_str(r#"{"offset": 20, "limit": 5}"#).unwrap();
        assert_eq!(params.into_page().unwrap(), Page { offset: 20, limit: 5 });
    }
}
