use storefront_core::{AggregateRoot, DomainError, DomainResult, Entity, Repository};

/// Aggregate root: Product.
///
/// Prices are in the smallest currency unit (e.g. cents).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: String,
    name: String,
    price: i64,
}

/// Storage contract for products.
pub trait ProductRepository: Repository<Product> {}

impl<R: Repository<Product>> ProductRepository for R {}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: i64) -> DomainResult<Self> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.id.is_empty() {
            return Err(DomainError::validation("Id is required"));
        }
        if self.name.is_empty() {
            return Err(DomainError::validation("Name is required"));
        }
        if self.price < 0 {
            return Err(DomainError::validation("Price must be greater than zero"));
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price in minor units.
    pub fn price(&self) -> i64 {
        self.price
    }

    pub fn change_name(&mut self, name: impl Into<String>) -> DomainResult<()> {
        self.name = name.into();
        self.validate()
    }

    pub fn change_price(&mut self, price: i64) -> DomainResult<()> {
        self.price = price;
        self.validate()
    }
}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

impl AggregateRoot for Product {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_id() {
        let err = Product::new("", "Product 1", 100).unwrap_err();
        assert_eq!(err, DomainError::validation("Id is required"));
    }

    #[test]
    fn rejects_empty_name() {
        let err = Product::new("p1", "", 100).unwrap_err();
        assert_eq!(err, DomainError::validation("Name is required"));
    }

    #[test]
    fn rejects_negative_price() {
        let err = Product::new("p1", "Product 1", -1).unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("Price must be greater than zero")
        );
    }

    #[test]
    fn change_name_revalidates() {
        let mut product = Product::new("p1", "Product 1", 100).unwrap();
        product.change_name("Product 2").unwrap();
        assert_eq!(product.name(), "Product 2");

        let err = product.change_name("").unwrap_err();
        assert_eq!(err, DomainError::validation("Name is required"));
    }

    #[test]
    fn change_price_revalidates() {
        let mut product = Product::new("p1", "Product 1", 100).unwrap();
        product.change_price(150).unwrap();
        assert_eq!(product.price(), 150);

        let err = product.change_price(-10).unwrap_err();
        assert_eq!(
            err,
            DomainError::validation("Price must be greater than zero")
        );
    }
}
