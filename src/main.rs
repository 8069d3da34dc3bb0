// Copyright 2025 the Spline Pen Authors
// SPDX-License-Identifier: Apache-2.0

//! Spline Pen: an interactive cubic Bézier spline editor built with Xilem

use xilem::EventLoop;

fn main() -> anyhow::Result<()> {
    spline_pen::run(EventLoop::with_user_event())
}
