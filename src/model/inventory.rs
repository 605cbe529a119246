// src/model/inventory.rs

/// On-hand stock for one SKU at one store.
///
/// Demand that cannot be served is lost, not backlogged.
#[derive(Debug, Clone)]
pub struct StockLedger {
    pub on_hand: u32,

    // Running totals
    pub total_sales: u64,
    pub lost_sales: u64,
}

impl StockLedger {
    pub fn new(initial_stock: u32) -> Self {
        Self {
            on_hand: initial_stock,
            total_sales: 0,
            lost_sales: 0,
        }
    }

    /// Goods from the head of the pipeline go on the shelf.
    pub fn receive(&mut self, quantity: u32) {
        self.on_hand = self.on_hand.saturating_add(quantity);
    }

    /// Serves the day's demand, clamping stock at zero.
    ///
    /// `total_sales` tracks the demand series as recorded; the unserved part
    /// is tallied separately in `lost_sales`.
    pub fn consume(&mut self, sales: u32) {
        if sales > self.on_hand {
            self.lost_sales += u64::from(sales - self.on_hand);
            self.on_hand = 0;
        } else {
            self.on_hand -= sales;
        }
        self.total_sales += u64::from(sales);
    }
}
