// src/model/queues.rs

use std::collections::VecDeque;

/// Orders in transit ("stock on water"), one slot per day until arrival.
///
/// The head slot is what arrives today. The line always holds
/// `lead_time + 1` slots between days: [`OrderPipeline::pop_arrival`] takes
/// the head and [`OrderPipeline::push_departure`] must put exactly one slot
/// back on the tail before the next day starts.
#[derive(Debug, Clone)]
pub struct OrderPipeline {
    slots: VecDeque<u32>,
    capacity: usize,
}

impl OrderPipeline {
    pub fn new(lead_time: u32) -> Self {
        let capacity = lead_time as usize + 1;
        Self {
            slots: VecDeque::from(vec![0; capacity]),
            capacity,
        }
    }

    /// Step 1 of a day: the head of the line arrives.
    pub fn pop_arrival(&mut self) -> u32 {
        debug_assert_eq!(self.slots.len(), self.capacity);
        self.slots.pop_front().unwrap_or(0)
    }

    /// Last step of a day: an order (possibly 0) enters at the tail.
    pub fn push_departure(&mut self, quantity: u32) {
        self.slots.push_back(quantity);
        debug_assert_eq!(self.slots.len(), self.capacity);
    }

    /// Total quantity ordered but not yet arrived.
    pub fn in_transit(&self) -> u64 {
        self.slots.iter().map(|&q| u64::from(q)).sum()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot count the line returns to after every day.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_lead_time_plus_one_empty_slots() {
        let pipeline = OrderPipeline::new(3);
        assert_eq!(pipeline.len(), 4);
        assert_eq!(pipeline.in_transit(), 0);
    }

    #[test]
    fn order_arrives_after_lead_time_days() {
        let mut pipeline = OrderPipeline::new(2);
        // Day 1: order 40 at the end of the day.
        assert_eq!(pipeline.pop_arrival(), 0);
        pipeline.push_departure(40);

        let mut arrivals = Vec::new();
        for _ in 0..4 {
            arrivals.push(pipeline.pop_arrival());
            pipeline.push_departure(0);
        }
        // Arrives on day 1 + lead_time + 1 = day 4 (third pop after ordering).
        assert_eq!(arrivals, vec![0, 0, 40, 0]);
    }

    #[test]
    fn zero_lead_time_delivers_next_day() {
        let mut pipeline = OrderPipeline::new(0);
        assert_eq!(pipeline.pop_arrival(), 0);
        assert!(pipeline.is_empty());
        pipeline.push_departure(25);
        assert_eq!(pipeline.in_transit(), 25);
        assert_eq!(pipeline.pop_arrival(), 25);
    }

    #[test]
    fn length_is_restored_every_cycle() {
        let mut pipeline = OrderPipeline::new(5);
        for day in 0..20u32 {
            pipeline.pop_arrival();
            pipeline.push_departure(day);
            assert_eq!(pipeline.len(), pipeline.capacity());
        }
    }
}
