// Copyright 2026 the Ripple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][spec] JSON to the given writer.
//!
//! Animation phases become duration spans on thread 0, tick progress becomes
//! counter tracks, and input, timer, and draw activity become instant events
//! on threads 1 to 3.
//!
//! [spec]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use ripple_core::state::Phase;
use ripple_core::time::{HostTime, Timebase};

use crate::recorder::{RecordedEvent, decode};

const TID_PHASE: u32 = 0;
const TID_INPUT: u32 = 1;
const TID_TIMER: u32 = 2;
const TID_DRAW: u32 = 3;

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
///
/// Timestamps are converted to microseconds using the provided [`Timebase`].
pub fn export(bytes: &[u8], timebase: Timebase, writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();
    let us = |t: HostTime| timebase.ticks_to_nanos(t.ticks()) as f64 / 1000.0;

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::Touch(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": format!("touch:{}", e.phase.as_str()),
                    "cat": "Input",
                    "ts": us(e.at),
                    "pid": 0,
                    "tid": TID_INPUT,
                    "s": "t",
                    "args": {
                        "x": e.position.x,
                        "y": e.position.y,
                    }
                }));
            }
            RecordedEvent::PhaseChange(e) => {
                if e.from != Phase::Idle {
                    events.push(phase_span("E", e.from, us(e.at)));
                }
                if e.to != Phase::Idle {
                    events.push(phase_span("B", e.to, us(e.at)));
                }
            }
            RecordedEvent::Schedule(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": format!("schedule:{}", e.slot.as_str()),
                    "cat": "Timer",
                    "ts": us(e.at),
                    "pid": 0,
                    "tid": TID_TIMER,
                    "s": "t",
                    "args": {
                        "due_us": us(e.due),
                    }
                }));
            }
            RecordedEvent::Cancel(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": format!("cancel:{}", e.slot.as_str()),
                    "cat": "Timer",
                    "ts": us(e.at),
                    "pid": 0,
                    "tid": TID_TIMER,
                    "s": "t",
                }));
            }
            RecordedEvent::Tick(e) => {
                events.push(json!({
                    "ph": "C",
                    "name": "progress",
                    "cat": "Tick",
                    "ts": us(e.at),
                    "pid": 0,
                    "args": {
                        "linear": e.linear,
                        "eased": e.eased,
                    }
                }));
                events.push(json!({
                    "ph": "C",
                    "name": "alpha",
                    "cat": "Tick",
                    "ts": us(e.at),
                    "pid": 0,
                    "args": {
                        "background": e.background_alpha,
                        "circle": e.circle_alpha,
                    }
                }));
                events.push(json!({
                    "ph": "C",
                    "name": "radius",
                    "cat": "Tick",
                    "ts": us(e.at),
                    "pid": 0,
                    "args": {
                        "radius": e.radius,
                    }
                }));
            }
            RecordedEvent::StaleTick(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": format!("stale:{}", e.slot.as_str()),
                    "cat": "Timer",
                    "ts": us(e.at),
                    "pid": 0,
                    "tid": TID_TIMER,
                    "s": "t",
                    "args": {
                        "phase": e.phase.as_str(),
                    }
                }));
            }
            RecordedEvent::Draw(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Draw",
                    "cat": "Draw",
                    "ts": us(e.at),
                    "pid": 0,
                    "tid": TID_DRAW,
                    "s": "t",
                    "args": {
                        "requested_alpha": e.requested_alpha,
                        "background_alpha": e.background_alpha,
                        "circle_alpha": e.circle_alpha,
                        "radius": e.radius,
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

fn phase_span(ph: &str, phase: Phase, ts: f64) -> Value {
    json!({
        "ph": ph,
        "name": phase.as_str(),
        "cat": "Phase",
        "ts": ts,
        "pid": 0,
        "tid": TID_PHASE,
    })
}
