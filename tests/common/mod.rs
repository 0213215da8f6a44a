#![allow(dead_code)]

use std::time::Duration;

use space_invaders::scheduler::{Scheduler, TimerHandle};
use space_invaders::surface::{Rgb, Surface};

/// One `fill_rect` call together with the fill colour in effect.
#[derive(Clone, Debug, PartialEq)]
pub struct Fill {
    pub color: Rgb,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Surface that records every fill instead of drawing.
#[derive(Default)]
pub struct RecordingSurface {
    color: Option<Rgb>,
    pub fills: Vec<Fill>,
}

impl Surface for RecordingSurface {
    fn set_fill(&mut self, color: Rgb) {
        self.color = Some(color);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.fills.push(Fill {
            color: self.color.unwrap_or(Rgb::new(0, 0, 0)),
            x,
            y,
            width,
            height,
        });
    }
}

/// Scheduler that only tracks which timers are live.
#[derive(Default)]
pub struct ManualScheduler {
    next_id: u64,
    pub active: Vec<TimerHandle>,
    pub started: usize,
    pub cancelled: usize,
}

impl Scheduler for ManualScheduler {
    fn start(&mut self, _interval: Duration) -> TimerHandle {
        self.next_id += 1;
        self.started += 1;
        let handle = TimerHandle::new(self.next_id);
        self.active.push(handle);
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.cancelled += 1;
        self.active.retain(|h| *h != handle);
    }
}
