//! Scripted gesture demo.
//!
//! Drives a drawer through three touch streams (edge swipe open, a
//! vertical scroll the classifier must reject, and an aborted close) and
//! prints the visual state after each. Run with `RUST_LOG=debug` to see
//! the engine's classification and settle decisions.

use anyhow::Context;
use glidepane_animation::Transition;
use glidepane_core::prelude::*;
use glidepane_geometry::{Point, Size};
use glidepane_input::{TouchDispatcher, TouchEvent};
use std::cell::Cell;
use std::rc::Rc;

struct DemoPanel {
    extent: f32,
    translate: Cell<f32>,
}

impl PanelSurface for DemoPanel {
    fn set_translation(&self, translate: f32) {
        self.translate.set(translate);
        log::info!("panel translate -> {translate:.1}");
    }

    fn set_transition(&self, transition: Transition) {
        if transition != Transition::None {
            log::info!("panel settles with {transition:?} profile");
        }
    }

    fn extent(&self) -> f32 {
        self.extent
    }
}

struct DemoBackdrop {
    opacity: Cell<f32>,
}

impl BackdropSurface for DemoBackdrop {
    fn set_opacity(&self, opacity: f32) {
        self.opacity.set(opacity);
    }

    fn set_transition(&self, _transition: Transition) {}
}

struct DemoIntents;

impl DrawerCallbacks for DemoIntents {
    fn on_open(&self) {
        println!("-> drawer proposes: open");
    }

    fn on_close(&self) {
        println!("-> drawer proposes: close");
    }
}

fn run_stream(drawer: &mut SwipeableDrawer, label: &str, events: Vec<TouchEvent>) {
    println!("== {label}");
    let mut dispatcher = TouchDispatcher::new();
    for event in events {
        dispatcher.push(event);
    }
    dispatcher.drain(|event| drawer.handle_event(&event));
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let extent: f32 = std::env::var("DEMO_EXTENT")
        .ok()
        .map(|value| value.parse())
        .transpose()
        .context("DEMO_EXTENT must be a number")?
        .unwrap_or(256.0);

    let panel = Rc::new(DemoPanel {
        extent,
        translate: Cell::new(extent),
    });
    let backdrop = Rc::new(DemoBackdrop {
        opacity: Cell::new(0.0),
    });

    let mut drawer = SwipeableDrawer::new(
        DrawerConfig::default(),
        SwipeArbiter::new(),
        panel.clone(),
        backdrop.clone(),
        Rc::new(DemoIntents),
    );
    drawer.set_viewport(Size::new(1080.0, 1920.0));
    drawer.start();

    run_stream(
        &mut drawer,
        "edge swipe opens the drawer",
        vec![
            TouchEvent::start(Point::new(4.0, 600.0)),
            TouchEvent::movement(Point::new(40.0, 600.0)),
            TouchEvent::movement(Point::new(120.0, 602.0)),
            TouchEvent::movement(Point::new(220.0, 601.0)),
            TouchEvent::end(Point::new(220.0, 601.0)),
        ],
    );
    println!(
        "panel at {:.1}, backdrop at {:.2}",
        panel.translate.get(),
        backdrop.opacity.get()
    );

    run_stream(
        &mut drawer,
        "vertical scroll is rejected",
        vec![
            TouchEvent::start(Point::new(4.0, 600.0)),
            TouchEvent::movement(Point::new(5.0, 680.0)),
            TouchEvent::end(Point::new(5.0, 680.0)),
        ],
    );

    // The host accepted the earlier open proposal.
    drawer.set_open(true);
    run_stream(
        &mut drawer,
        "half-hearted close snaps back open",
        vec![
            TouchEvent::start(Point::new(200.0, 900.0)),
            TouchEvent::movement(Point::new(180.0, 900.0)),
            TouchEvent::movement(Point::new(160.0, 900.0)),
            TouchEvent::end(Point::new(160.0, 900.0)),
        ],
    );
    println!(
        "panel at {:.1}, backdrop at {:.2}",
        panel.translate.get(),
        backdrop.opacity.get()
    );

    Ok(())
}
