//! Customer DTOs
//!
//! Batch requests are plain JSON arrays of objects and are passed to the
//! domain as `RawRecord`s, so only responses have dedicated types.

use serde::Serialize;

use domain_customer::{Customer, CustomerStatus};

/// Separator used to render the contact list as a single string
pub const CONTACT_SEPARATOR: &str = "; ";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub contacts: String,
    pub status: CustomerStatus,
}

impl From<&Customer> for CustomerResponse {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id(),
            first_name: customer.first_name().to_string(),
            last_name: customer.last_name().to_string(),
            contacts: customer.contacts().join(CONTACT_SEPARATOR),
            status: customer.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_shape() {
        let mut customer = Customer::new();
        customer
            .set_id(1)
            .set_name(Some("Eric"), Some("Meyer"))
            .add_contact(Some("eric98@yahoo.com"))
            .add_contact(Some("(030) 3945-642298"));

        let json = serde_json::to_value(CustomerResponse::from(&customer)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "firstName": "Eric",
                "lastName": "Meyer",
                "contacts": "eric98@yahoo.com; (030) 3945-642298",
                "status": "New"
            })
        );
    }
}
