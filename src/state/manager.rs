use crate::error::{CalcError, Result};
use crate::models::Order;

/// Pending orders, one row per item, in the order they were added.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an order. Adding an item that is already listed raises its
    /// quantity instead of creating a second row; quantities saturate at
    /// `u32::MAX`.
    ///
    /// Returns the row index.
    pub fn add(&mut self, item: &str, quantity: u32) -> Result<usize> {
        if quantity == 0 {
            return Err(CalcError::InvalidInput(format!(
                "quantity for {} must be positive",
                item
            )));
        }

        if let Some(index) = self.position(item) {
            let order = &mut self.orders[index];
            order.quantity = order.quantity.saturating_add(quantity);
            return Ok(index);
        }

        self.orders.push(Order::new(item, quantity));
        Ok(self.orders.len() - 1)
    }

    /// Remove the row at `index`.
    pub fn remove(&mut self, index: usize) -> Result<Order> {
        self.check_index(index)?;
        Ok(self.orders.remove(index))
    }

    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> Result<()> {
        self.check_index(index)?;
        if quantity == 0 {
            return Err(CalcError::InvalidInput("quantity must be positive".to_string()));
        }
        self.orders[index].quantity = quantity;
        Ok(())
    }

    /// Raise the quantity by one, never past `u32::MAX`.
    pub fn increment(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        let order = &mut self.orders[index];
        order.quantity = order.quantity.saturating_add(1);
        Ok(())
    }

    /// Lower the quantity by one, never below one.
    pub fn decrement(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        let order = &mut self.orders[index];
        order.quantity = order.quantity.saturating_sub(1).max(1);
        Ok(())
    }

    pub fn position(&self, item: &str) -> Option<usize> {
        self.orders.iter().position(|o| o.item == item)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn into_orders(self) -> Vec<Order> {
        self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.orders.len() {
            return Err(CalcError::InvalidInput(format!("no order at row {}", index + 1)));
        }
        Ok(())
    }
}
