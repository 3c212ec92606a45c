use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Client, NewClient};
use crate::utils::errors::AppResult;
use crate::utils::validation::{
    decimal_to_f64, to_optional_decimal, validate_latitude, validate_longitude,
    validate_not_blank, COORDINATE_SCALE,
};

// Request para crear un cliente
#[derive(Debug, Deserialize, Validate)]
pub struct CreateClientRequest {
    #[validate(length(min = 1, max = 100), custom = "validate_not_blank")]
    pub name: String,

    #[validate(length(max = 200))]
    pub address: Option<String>,

    #[validate(length(max = 20))]
    pub phone: Option<String>,

    #[validate(email, length(max = 100))]
    pub email: Option<String>,

    #[validate(custom = "validate_latitude")]
    pub latitude: Option<f64>,

    #[validate(custom = "validate_longitude")]
    pub longitude: Option<f64>,
}

impl CreateClientRequest {
    pub fn into_new_client(self) -> AppResult<NewClient> {
        Ok(NewClient {
            name: self.name.trim().to_string(),
            address: self.address,
            phone: self.phone,
            email: self.email,
            latitude: to_optional_decimal(self.latitude, COORDINATE_SCALE, "latitude")?,
            longitude: to_optional_decimal(self.longitude, COORDINATE_SCALE, "longitude")?,
        })
    }
}

// Response de cliente (coordenadas como número JSON)
#[derive(Debug, Serialize)]
pub struct ClientResponse {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            address: client.address,
            phone: client.phone,
            email: client.email,
            latitude: client.latitude.map(decimal_to_f64),
            longitude: client.longitude.map(decimal_to_f64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn request() -> CreateClientRequest {
        CreateClientRequest {
            name: " Abarrotes Lupita ".to_string(),
            address: Some("Blvd. López Mateos 1500".to_string()),
            phone: Some("4771234567".to_string()),
            email: Some("lupita@example.com".to_string()),
            latitude: Some(21.1221),
            longitude: Some(-101.6860),
        }
    }

    #[test]
    fn test_valid_request_converts() {
        let req = request();
        assert!(req.validate().is_ok());
        let new_client = req.into_new_client().unwrap();
        assert_eq!(new_client.name, "Abarrotes Lupita");
        assert_eq!(new_client.latitude, Some(Decimal::new(211221, 4)));
    }

    #[test]
    fn test_invalid_fields() {
        let mut req = request();
        req.latitude = Some(123.0);
        assert!(req.validate().is_err());

        let mut req = request();
        req.email = Some("no-es-correo".to_string());
        assert!(req.validate().is_err());

        let mut req = request();
        req.name = "   ".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_response_coerces_decimals() {
        let response = ClientResponse::from(Client {
            id: 1,
            name: "A".to_string(),
            address: None,
            phone: None,
            email: None,
            latitude: Some(Decimal::new(209168, 4)),
            longitude: None,
        });
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["latitude"], 20.9168);
        assert!(json["longitude"].is_null());
    }
}
