use common::error::{AppError, Res};
use db::dtos::order::ShippingAddress;
use serde::Deserialize;

/// Shipping form of `/process_checkout`. Absent fields deserialize as empty
/// and are reported by `validate`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
}

impl CheckoutForm {
    pub fn validate(&self) -> Res<ShippingAddress> {
        let fields = [
            ("address", self.address.trim()),
            ("city", self.city.trim()),
            ("state", self.state.trim()),
            ("zip", self.zip.trim()),
        ];
        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Please fill in the shipping {}",
                missing.join(", ")
            )));
        }

        Ok(ShippingAddress {
            address: fields[0].1.to_string(),
            city: fields[1].1.to_string(),
            state: fields[2].1.to_string(),
            zip: fields[3].1.to_string(),
        })
    }
}
