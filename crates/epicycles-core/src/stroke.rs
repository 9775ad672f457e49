//! Input-side stroke plumbing.
//!
//! Pointer and touch handlers only push [`StrokeEvent`]s here; the frame tick
//! drains them. The queue also folds duplicate sources into one stroke: a
//! `Start` while a stroke is open, or a `Sample`/`End` while none is, is
//! ignored.

use crate::geometry::Point2D;
use smallvec::SmallVec;
use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StrokeEvent {
    Start,
    Sample(Point2D),
    End,
}

/// Events drained in one tick. Sized for a frame's worth of pointer moves.
pub type StrokeBatch = SmallVec<[StrokeEvent; 32]>;

#[derive(Debug)]
pub struct StrokeQueue {
    events: VecDeque<StrokeEvent>,
    capacity: usize,
    stroke_open: bool,
}

impl StrokeQueue {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.min(256)),
            capacity: capacity.max(2),
            stroke_open: false,
        }
    }

    pub fn start(&mut self) {
        if !self.stroke_open {
            self.stroke_open = true;
            self.enqueue(StrokeEvent::Start);
        }
    }

    pub fn sample(&mut self, p: Point2D) {
        if self.stroke_open {
            self.enqueue(StrokeEvent::Sample(p));
        }
    }

    pub fn end(&mut self) {
        if self.stroke_open {
            self.stroke_open = false;
            self.enqueue(StrokeEvent::End);
        }
    }

    #[inline]
    pub fn is_stroke_open(&self) -> bool {
        self.stroke_open
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take every pending event in arrival order.
    pub fn drain(&mut self) -> StrokeBatch {
        self.events.drain(..).collect()
    }

    fn enqueue(&mut self, ev: StrokeEvent) {
        if self.events.len() >= self.capacity {
            // Evict the oldest sample; stroke boundaries are never dropped.
            let oldest_sample = self
                .events
                .iter()
                .position(|e| matches!(e, StrokeEvent::Sample(_)));
            match oldest_sample {
                Some(i) => {
                    self.events.remove(i);
                }
                None => {
                    log::warn!("[input] stroke queue full, dropping {:?}", ev);
                    return;
                }
            }
        }
        self.events.push_back(ev);
    }
}

impl Default for StrokeQueue {
    fn default() -> Self {
        Self::new(crate::constants::STROKE_QUEUE_CAPACITY)
    }
}
