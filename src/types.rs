//! Request and response types for the PayLane REST API.
//!
//! Any `Serialize` value can be passed as request parameters. [`Params`] is the
//! plain key/value form; the records below cover the common payload shapes and
//! serialize to exactly the same JSON as the equivalent map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Plain key/value request parameters.
pub type Params = Map<String, Value>;

/// Decoded result of a PayLane call.
///
/// # Examples
///
/// ```
/// use paylane_rs::types::PaymentResponse;
/// use serde_json::json;
///
/// let response = PaymentResponse::from_value(json!({"success": true, "id_sale": 1}));
/// assert!(response.is_success());
/// assert_eq!(response.get("id_sale"), Some(&json!(1)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaymentResponse {
    /// Decoded JSON object, or `None` when the body was not a JSON object
    pub data: Option<Map<String, Value>>,

    /// `true` only when `data` carried `"success": true`
    pub success: bool,
}

impl PaymentResponse {
    /// Builds a response from decoded body data.
    pub fn new(data: Option<Map<String, Value>>) -> Self {
        let success = matches!(
            data.as_ref().and_then(|d| d.get("success")),
            Some(Value::Bool(true))
        );
        Self { data, success }
    }

    /// Builds a response from an arbitrary JSON value; non-objects yield no data.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::new(Some(map)),
            _ => Self::new(None),
        }
    }

    /// Whether the server reported business-level success.
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Looks up a top-level field of the response.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.as_ref().and_then(|d| d.get(key))
    }

    /// Consumes the response, returning the decoded object.
    pub fn into_data(self) -> Option<Map<String, Value>> {
        self.data
    }
}

/// Sale details shared by most payment methods.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Sale {
    /// Amount in major units, e.g. `100.00`
    pub amount: f64,

    /// ISO 4217 currency code
    pub currency: String,

    /// Free-text description shown to the merchant
    pub description: String,
}

/// Postal address of a customer.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Address {
    pub street_house: String,
    pub city: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    pub zip: String,

    /// ISO 3166-1 alpha-2 country code
    pub country_code: String,
}

/// Customer placing the order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Customer {
    pub name: String,
    pub email: String,

    /// IP address the customer connected from
    pub ip: String,

    pub address: Address,
}

/// Card data for card payments.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Card {
    pub card_number: String,
    pub expiration_month: String,
    pub expiration_year: String,
    pub name_on_card: String,

    /// CVV/CVC code
    pub card_code: String,
}

/// Parameters for [`crate::client::PayLaneClient::card_sale`].
///
/// # Examples
///
/// ```
/// use paylane_rs::types::{Address, Card, CardSaleRequest, Customer, Sale};
///
/// let request = CardSaleRequest {
///     sale: Sale {
///         amount: 100.0,
///         currency: "EUR".to_string(),
///         description: "Order #1".to_string(),
///     },
///     customer: Customer {
///         name: "John Doe".to_string(),
///         email: "john@doe.com".to_string(),
///         ip: "127.0.0.1".to_string(),
///         address: Address {
///             street_house: "1600 Pennsylvania Avenue Northwest".to_string(),
///             city: "Washington".to_string(),
///             state: Some("DC".to_string()),
///             zip: "500".to_string(),
///             country_code: "US".to_string(),
///         },
///     },
///     card: Card {
///         card_number: "4111111111111111".to_string(),
///         expiration_month: "03".to_string(),
///         expiration_year: "2030".to_string(),
///         name_on_card: "John Doe".to_string(),
///         card_code: "123".to_string(),
///     },
/// };
///
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["card"]["card_code"], "123");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CardSaleRequest {
    pub sale: Sale,
    pub customer: Customer,
    pub card: Card,
}

/// Parameters for [`crate::client::PayLaneClient::capture_authorization`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CaptureRequest {
    pub id_authorization: u64,
    pub amount: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parameters for [`crate::client::PayLaneClient::refund`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RefundRequest {
    pub id_sale: u64,
    pub amount: f64,
    pub reason: String,
}

/// Parameters for sale lookups such as [`crate::client::PayLaneClient::get_sale_info`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SaleInfoRequest {
    pub id_sale: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_requires_boolean_true() {
        assert!(PaymentResponse::from_value(json!({"success": true})).is_success());
        assert!(!PaymentResponse::from_value(json!({"success": false})).is_success());
        assert!(!PaymentResponse::from_value(json!({"success": "true"})).is_success());
        assert!(!PaymentResponse::from_value(json!({"success": 1})).is_success());
        assert!(!PaymentResponse::from_value(json!({"id_sale": 5})).is_success());
    }

    #[test]
    fn test_non_object_has_no_data() {
        let response = PaymentResponse::from_value(json!([1, 2, 3]));
        assert!(response.data.is_none());
        assert!(!response.is_success());
        assert_eq!(response, PaymentResponse::default());
    }

    #[test]
    fn test_record_matches_map() {
        let record = RefundRequest {
            id_sale: 42,
            amount: 9.99,
            reason: "damaged".to_string(),
        };
        let map = json!({"id_sale": 42, "amount": 9.99, "reason": "damaged"});
        assert_eq!(serde_json::to_value(&record).unwrap(), map);
    }

    #[test]
    fn test_optional_fields_omitted() {
        let capture = CaptureRequest {
            id_authorization: 7,
            amount: 10.0,
            description: None,
        };
        let json = serde_json::to_string(&capture).unwrap();
        assert!(!json.contains("description"));
    }
}
