// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-agnostic scheduling capability for timeouts and animation frames.
//!
//! The controller stores at most one live token of each kind and matches
//! delivered callbacks against them, so a host may keep firing work it could
//! not un-queue: stale deliveries are simply ignored.

/// Opaque handle for one scheduled timeout, issued by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken(pub u64);

/// Opaque handle for one requested animation frame, issued by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameToken(pub u64);

/// Capability set a host runtime provides for deferred work.
///
/// Implementations are expected to deliver each scheduled callback at most
/// once, tagged with the token it was issued under; cancellation is
/// best-effort, since the controller also ignores deliveries whose token it
/// no longer holds.
pub trait Scheduler {
    /// Schedules a callback after `delay_ms` milliseconds.
    fn schedule_timeout(&mut self, delay_ms: u64) -> TimerToken;

    /// Cancels a timeout previously issued by
    /// [`schedule_timeout`](Self::schedule_timeout).
    fn cancel_timeout(&mut self, token: TimerToken);

    /// Requests a callback on the next animation frame.
    fn request_frame(&mut self) -> FrameToken;

    /// Cancels a frame request previously issued by
    /// [`request_frame`](Self::request_frame).
    fn cancel_frame(&mut self, token: FrameToken);
}
