// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use canopy_position::{AnchorBoundary, PlacementRequest, XAlign, YAlign};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("position/resolve");

    let cases: [(&str, PlacementRequest); 3] = [
        (
            "clearance_safe",
            PlacementRequest {
                anchor: Some(Rect::new(200.0, 100.0, 280.0, 130.0)),
                overlay: Size::new(120.0, 40.0),
                viewport: Size::new(1280.0, 800.0),
                ..PlacementRequest::default()
            },
        ),
        (
            "viewport_edge",
            PlacementRequest {
                anchor: Some(Rect::new(1230.0, 100.0, 1280.0, 130.0)),
                overlay: Size::new(120.0, 40.0),
                viewport: Size::new(1280.0, 800.0),
                ..PlacementRequest::default()
            },
        ),
        (
            "rtl_preferred",
            PlacementRequest {
                anchor: Some(Rect::new(40.0, 700.0, 120.0, 730.0)),
                overlay: Size::new(160.0, 60.0),
                viewport: Size::new(1280.0, 800.0),
                boundary: AnchorBoundary::Unbounded,
                x_align: XAlign::End,
                y_align: YAlign::Above,
                rtl: true,
            },
        ),
    ];

    for (name, request) in &cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), request, |b, request| {
            b.iter(|| black_box(request.resolve()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
