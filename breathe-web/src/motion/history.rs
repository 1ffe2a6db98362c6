//! Scrolling history of head positions for the breath wave
//!
//! Fixed length, FIFO. Slot 0 is the newest sample.

use std::collections::VecDeque;

/// Constant-size ring of past Y values plus a sub-slot scroll accumulator
pub struct HistoryBuffer {
    slots: VecDeque<f64>,
    /// Fractional scroll not yet turned into a shift, in [0, 1)
    offset: f64,
}

impl HistoryBuffer {
    /// Buffer of `len` slots (at least one), all set to `fill`
    pub fn new(len: usize, fill: f64) -> Self {
        let len = len.max(1);
        Self {
            slots: std::iter::repeat(fill).take(len).collect(),
            offset: 0.0,
        }
    }

    /// Sized to cover a canvas of `width` CSS pixels plus `margin` slots
    pub fn for_width(width: f64, margin: usize, fill: f64) -> Self {
        let cover = if width.is_finite() && width > 0.0 { width.ceil() as usize } else { 0 };
        Self::new(cover + margin, fill)
    }

    /// Drop the oldest slot and record `value` as the newest
    pub fn push(&mut self, value: f64) {
        self.slots.pop_back();
        self.slots.push_front(value);
    }

    /// Accumulate `speed` slots of scroll; each whole slot shifts `head` in.
    /// Returns how many shifts happened.
    pub fn advance(&mut self, speed: f64, head: f64) -> usize {
        self.offset += speed.max(0.0);
        let mut shifted = 0;
        while self.offset >= 1.0 {
            self.offset -= 1.0;
            self.push(head);
            shifted += 1;
        }
        shifted
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Value at `index`, clamped to the oldest slot
    pub fn get(&self, index: usize) -> f64 {
        let last = self.slots.len() - 1;
        self.slots[index.min(last)]
    }

    /// Slot feeding canvas column `x`
    pub fn sample_at(&self, x: f64) -> f64 {
        let index = (x + self.offset).floor().max(0.0) as usize;
        self.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.slots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_from_width() {
        let history = HistoryBuffer::for_width(600.4, 50, 0.5);
        assert_eq!(history.len(), 651);
        assert!(history.iter().all(|v| *v == 0.5));
    }

    #[test]
    fn test_fifo_and_constant_length() {
        let mut history = HistoryBuffer::new(4, 0.0);
        for v in [1.0, 2.0, 3.0, 4.0, 5.0, 6.0] {
            history.push(v);
            assert_eq!(history.len(), 4);
        }
        let values: Vec<f64> = history.iter().copied().collect();
        assert_eq!(values, vec![6.0, 5.0, 4.0, 3.0]);
    }

    #[test]
    fn test_advance_accumulates_sub_slot_scroll() {
        let mut history = HistoryBuffer::new(10, 0.5);
        // 0.75 per frame shifts on frames 2, 3 and 4
        let shifts: usize = (0..5).map(|_| history.advance(0.75, 0.9)).sum();
        assert_eq!(shifts, 3);
        assert_eq!(history.offset(), 0.75);
        assert_eq!(history.len(), 10);
        assert_eq!(history.get(2), 0.9);
        assert_eq!(history.get(3), 0.5);
    }

    #[test]
    fn test_sample_clamps_to_oldest() {
        let mut history = HistoryBuffer::new(3, 0.5);
        history.push(0.1);
        assert_eq!(history.sample_at(0.0), 0.1);
        assert_eq!(history.sample_at(500.0), 0.5);
    }
}
