//! HTTP DTOs for the contact endpoint.

use serde::{Deserialize, Serialize};

use crate::application::SubmitContactResult;
use crate::domain::locale::Locale;

/// Contact form fields.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub business: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Confirmation shown after the request was delivered.
#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub item_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    pub message: String,
}

impl ContactResponse {
    pub fn new(result: SubmitContactResult, locale: Locale) -> Self {
        Self {
            item_count: result.item_count,
            message_id: result.receipt.message_id,
            message: confirmation(locale).to_string(),
        }
    }
}

fn confirmation(locale: Locale) -> &'static str {
    match locale {
        Locale::En => "Thanks! We received your request and will be in touch soon.",
        Locale::Ko => "감사합니다! 요청을 받았으며 곧 연락드리겠습니다.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::DeliveryReceipt;

    #[test]
    fn optional_fields_may_be_omitted() {
        let request: ContactRequest =
            serde_json::from_str(r#"{"name": "Sam", "email": "sam@example.com"}"#).unwrap();
        assert!(request.phone.is_none());
        assert!(request.business.is_none());
        assert!(request.message.is_none());
    }

    #[test]
    fn confirmation_is_localized() {
        let result = SubmitContactResult {
            receipt: DeliveryReceipt { message_id: None },
            item_count: 2,
        };
        let response = ContactResponse::new(result, Locale::Ko);
        assert!(response.message.starts_with("감사합니다"));

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("message_id").is_none());
        assert_eq!(json["item_count"], 2);
    }
}
