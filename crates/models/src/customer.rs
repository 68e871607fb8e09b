use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// A customer record as stored in the registry and published over the API.
///
/// Field names on the wire are capitalized (`ID`, `Name`, ...) to stay
/// compatible with the published JSON shape. Every field is defaultable on
/// input: a body that omits a field decodes with that field zeroed, and
/// unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Customer {
    #[serde(rename = "ID")]
    pub id: u8,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub contacted: bool,
}

/// Parse a path segment as a customer id.
///
/// Ids are non-negative integers that must fit in 0-255; anything else is
/// rejected rather than wrapped or truncated.
pub fn parse_customer_id(raw: &str) -> Result<u8, ModelError> {
    raw.parse::<u8>()
        .map_err(|_| ModelError::InvalidId(raw.to_string()))
}

/// Require the free-text fields a replaced record must carry. Email and phone
/// formats are not checked, only presence.
pub fn validate_required(customer: &Customer) -> Result<(), ModelError> {
    if customer.name.is_empty()
        || customer.role.is_empty()
        || customer.email.is_empty()
        || customer.phone.is_empty()
    {
        return Err(ModelError::Validation(
            "all fields (Name, Role, Email, Phone) are required".into(),
        ));
    }
    Ok(())
}

/// The three canonical records the registry is seeded with at startup.
pub fn seed_customers() -> Vec<Customer> {
    vec![
        Customer {
            id: 1,
            name: "John Doe".into(),
            role: "Subscriber".into(),
            email: "john.doe@gmail.com".into(),
            phone: "123-456-7890".into(),
            contacted: true,
        },
        Customer {
            id: 2,
            name: "Peter Pan".into(),
            role: "Prospect".into(),
            email: "peter.pan@gmail.com".into(),
            phone: "321-654-0987".into(),
            contacted: true,
        },
        Customer {
            id: 3,
            name: "Mary Jane".into(),
            role: "Influencer".into(),
            email: "mary.jane@gmail.com".into(),
            phone: "111-222-3333".into(),
            contacted: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_parsing_accepts_full_u8_range() {
        assert_eq!(parse_customer_id("0").expect("zero"), 0);
        assert_eq!(parse_customer_id("255").expect("max"), 255);
    }

    #[test]
    fn id_parsing_rejects_garbage_and_out_of_range() {
        for raw in ["abc", "-1", "256", "1.5", "", " 1", "99999999999999999999"] {
            assert!(
                matches!(parse_customer_id(raw), Err(ModelError::InvalidId(_))),
                "expected rejection for {:?}",
                raw
            );
        }
    }

    #[test]
    fn wire_shape_uses_capitalized_field_names() {
        let customer = Customer {
            id: 4,
            name: "A".into(),
            role: "B".into(),
            email: "a@b.com".into(),
            phone: "1".into(),
            contacted: false,
        };
        let json = serde_json::to_value(&customer).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "ID": 4,
                "Name": "A",
                "Role": "B",
                "Email": "a@b.com",
                "Phone": "1",
                "Contacted": false
            })
        );
    }

    #[test]
    fn missing_fields_default_and_unknown_fields_are_ignored() {
        let customer: Customer =
            serde_json::from_str(r#"{"ID": 9, "Name": "Solo", "Nickname": "ignored"}"#)
                .expect("deserialize");
        assert_eq!(customer.id, 9);
        assert_eq!(customer.name, "Solo");
        assert_eq!(customer.role, "");
        assert_eq!(customer.email, "");
        assert!(!customer.contacted);
    }

    #[test]
    fn body_ids_outside_u8_fail_to_decode() {
        assert!(serde_json::from_str::<Customer>(r#"{"ID": 300}"#).is_err());
        assert!(serde_json::from_str::<Customer>(r#"{"ID": -1}"#).is_err());
    }

    #[test]
    fn required_field_validation() {
        let mut customer = seed_customers().remove(0);
        validate_required(&customer).expect("seed record is complete");

        customer.phone = String::new();
        assert!(matches!(
            validate_required(&customer),
            Err(ModelError::Validation(_))
        ));
    }

    #[test]
    fn seed_records_cover_ids_one_to_three() {
        let seeds = seed_customers();
        let ids: Vec<u8> = seeds.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(seeds[0].name, "John Doe");
        assert!(!seeds[2].contacted);
    }
}
