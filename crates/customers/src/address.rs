use storefront_core::{DomainError, DomainResult, ValueObject};

/// Postal address value object.
///
/// Immutable once constructed; equality is by value. To change a customer's
/// address, construct a new `Address` and pass it to
/// [`Customer::change_address`](crate::Customer::change_address).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    street: String,
    number: u32,
    zip: String,
    city: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: u32,
        zip: impl Into<String>,
        city: impl Into<String>,
    ) -> DomainResult<Self> {
        let address = Self {
            street: street.into(),
            number,
            zip: zip.into(),
            city: city.into(),
        };
        address.validate()?;
        Ok(address)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.street.is_empty() {
            return Err(DomainError::validation("Street is required"));
        }
        if self.zip.is_empty() {
            return Err(DomainError::validation("Zip is required"));
        }
        if self.city.is_empty() {
            return Err(DomainError::validation("City is required"));
        }
        Ok(())
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn zip(&self) -> &str {
        &self.zip
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

impl ValueObject for Address {}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {} {}", self.street, self.number, self.zip, self.city)
    }
}
