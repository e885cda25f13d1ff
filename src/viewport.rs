//! Viewport Classification
//!
//! Named width breakpoints and a reactive window width provided via context.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Computer,
    LargeScreen,
    Widescreen,
}

/// Minimum widths (px) of each breakpoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Breakpoints {
    pub mobile: u32,
    pub tablet: u32,
    pub computer: u32,
    pub large_screen: u32,
    pub widescreen: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile: 320,
            tablet: 768,
            computer: 992,
            large_screen: 1200,
            widescreen: 1920,
        }
    }
}

/// Width range: `min` inclusive, `below` exclusive (both by breakpoint start)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakpointRange {
    pub min: Option<Breakpoint>,
    pub below: Option<Breakpoint>,
}

impl BreakpointRange {
    pub const fn at_least(breakpoint: Breakpoint) -> Self {
        Self { min: Some(breakpoint), below: None }
    }

    pub const fn below(breakpoint: Breakpoint) -> Self {
        Self { min: None, below: Some(breakpoint) }
    }
}

/// Stacked card layout
pub const MOBILE_LAYOUT: BreakpointRange = BreakpointRange::below(Breakpoint::Tablet);
/// Table layout with header
pub const DESKTOP_LAYOUT: BreakpointRange = BreakpointRange::at_least(Breakpoint::Tablet);

impl Breakpoints {
    pub fn min_width(&self, breakpoint: Breakpoint) -> u32 {
        match breakpoint {
            Breakpoint::Mobile => self.mobile,
            Breakpoint::Tablet => self.tablet,
            Breakpoint::Computer => self.computer,
            Breakpoint::LargeScreen => self.large_screen,
            Breakpoint::Widescreen => self.widescreen,
        }
    }

    pub fn matches(&self, width: f64, range: BreakpointRange) -> bool {
        let above_min = range.min.map_or(true, |bp| width >= f64::from(self.min_width(bp)));
        let under_max = range.below.map_or(true, |bp| width < f64::from(self.min_width(bp)));
        above_min && under_max
    }
}

/// Window width signal plus the breakpoints it is classified against
#[derive(Clone, Copy)]
pub struct Viewport {
    pub width: ReadSignal<f64>,
    pub breakpoints: Breakpoints,
}

impl Viewport {
    pub fn matches(&self, range: BreakpointRange) -> bool {
        self.breakpoints.matches(self.width.get(), range)
    }

    pub fn is_mobile(&self) -> bool {
        self.matches(MOBILE_LAYOUT)
    }
}

fn window_width() -> f64 {
    window().inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(0.0)
}

/// Track the window width and provide a `Viewport` to all children
pub fn provide_viewport(breakpoints: Breakpoints) -> Viewport {
    let (width, set_width) = signal(window_width());

    let handle = window_event_listener(leptos::ev::resize, move |_| {
        set_width.set(window_width());
    });
    on_cleanup(move || handle.remove());

    let viewport = Viewport { width, breakpoints };
    provide_context(viewport);
    viewport
}

/// Get the viewport from context
pub fn use_viewport() -> Viewport {
    expect_context::<Viewport>()
}
