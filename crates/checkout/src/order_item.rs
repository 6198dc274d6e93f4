use storefront_core::{DomainError, DomainResult, Entity};

/// Order line: an identified item with its unit price and quantity.
///
/// Prices are in the smallest currency unit (e.g. cents).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    id: String,
    name: String,
    price: i64,
    product_id: String,
    quantity: i64,
}

impl OrderItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: i64,
        product_id: impl Into<String>,
        quantity: i64,
    ) -> DomainResult<Self> {
        if quantity <= 0 {
            return Err(DomainError::validation("Quantity must be greater than 0"));
        }
        if price < 0 {
            return Err(DomainError::validation(
                "Price must be greater than or equal to 0",
            ));
        }
        Ok(Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price in minor units.
    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// `price * quantity`.
    pub fn subtotal(&self) -> i64 {
        self.price * self.quantity
    }
}

impl Entity for OrderItem {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}
