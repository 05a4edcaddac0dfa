// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated press-and-release gesture that exercises the tracing pipeline.
//!
//! Lays out a 200×200 surface with a blue tint, presses at (20, 20), lets the
//! ripple settle, releases, and renders once per 16 ms frame throughout. Events go to both
//! a [`PrettyPrintSink`](ripple_debug::pretty::PrettyPrintSink) on stdout and
//! a [`RecorderSink`](ripple_debug::recorder::RecorderSink); the recording is
//! exported as a Chrome trace JSON file.

use std::fs::File;
use std::io::BufWriter;

use ripple_core::color::Color;
use ripple_core::config::RippleConfig;
use ripple_core::state::Phase;
use ripple_core::time::Timebase;
use ripple_core::touch::TouchPhase;
use ripple_core::trace::TraceSink;

use ripple_debug::pretty::PrettyPrintSink;
use ripple_debug::recorder::RecorderSink;
use ripple_debug::tee::TeeSink;

use ripple_sim::SimSurface;

const FRAME_MS: u64 = 16;
/// Time the pointer stays down.
const HOLD_MS: u64 = 480;
/// Upper bound for the exit to finish.
const SETTLE_MS: u64 = 1000;

fn main() {
    let timebase = Timebase::MILLIS;

    // -- sinks -------------------------------------------------------------
    let pretty = PrettyPrintSink::new(Box::new(std::io::stdout()), timebase);
    let sink = TeeSink::new(pretty, RecorderSink::new());

    // -- surface -----------------------------------------------------------
    let mut surface =
        SimSurface::with_sink(RippleConfig::view(), sink).expect("view preset is valid");
    surface.resize(200.0, 200.0);
    surface.set_ripple_color(Color::from_argb(0x66, 0x21, 0x96, 0xF3));

    // -- gesture -----------------------------------------------------------
    surface.touch(TouchPhase::Down, 20.0, 20.0);
    run_frames(&mut surface, HOLD_MS);

    surface.touch(TouchPhase::Up, 20.0, 20.0);
    let mut elapsed = 0;
    while surface.engine().phase() != Phase::Idle && elapsed < SETTLE_MS {
        run_frames(&mut surface, FRAME_MS);
        elapsed += FRAME_MS;
    }
    let cycles = surface.engine().completed_cycles();

    // -- export Chrome trace -----------------------------------------------
    let (_, recorder) = surface.into_sink().into_parts();
    let path = "ripple_trace.json";
    let file = File::create(path).expect("failed to create ripple_trace.json");
    let mut writer = BufWriter::new(file);
    ripple_debug::chrome::export(recorder.as_bytes(), timebase, &mut writer)
        .expect("failed to write Chrome trace");

    println!("Wrote {path} ({cycles} completed ripple)");
}

/// Advances `ms` in frame steps, rendering whenever the engine asked for it.
fn run_frames<S: TraceSink>(surface: &mut SimSurface<S>, ms: u64) {
    for _ in 0..ms / FRAME_MS {
        surface.advance(FRAME_MS);
        if surface.needs_redraw() {
            surface.render();
        }
    }
}
