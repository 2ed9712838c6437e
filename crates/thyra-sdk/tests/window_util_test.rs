// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use thyra_core::math::Extent2D;
use thyra_core::platform::window::{HostWindow, SharedHostWindow};
use thyra_sdk::window_util;

// --- Test Setup: a stub host window that counts refresh calls ---
struct CountingWindow {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
    framebuffer_width: AtomicU32,
    framebuffer_height: AtomicU32,
    refresh_calls: AtomicU32,
}

impl CountingWindow {
    fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            framebuffer_width: AtomicU32::new(0),
            framebuffer_height: AtomicU32::new(0),
            refresh_calls: AtomicU32::new(0),
        }
    }

    fn refresh_count(&self) -> u32 {
        self.refresh_calls.load(Ordering::Relaxed)
    }
}

impl HostWindow for CountingWindow {
    fn windowed_x(&self) -> i32 {
        self.x
    }

    fn windowed_y(&self) -> i32 {
        self.y
    }

    fn windowed_width(&self) -> u32 {
        self.width
    }

    fn windowed_height(&self) -> u32 {
        self.height
    }

    fn framebuffer_extent(&self) -> Extent2D {
        Extent2D {
            width: self.framebuffer_width.load(Ordering::Relaxed),
            height: self.framebuffer_height.load(Ordering::Relaxed),
        }
    }

    fn refresh_framebuffer_size(&self) {
        self.refresh_calls.fetch_add(1, Ordering::Relaxed);
        self.framebuffer_width.store(self.width, Ordering::Relaxed);
        self.framebuffer_height.store(self.height, Ordering::Relaxed);
    }
}
// ---

#[test]
fn test_getters_return_stored_values_unchanged() {
    let window = CountingWindow::new(10, 20, 800, 600);

    assert_eq!(window_util::windowed_x(&window), 10);
    assert_eq!(window_util::windowed_y(&window), 20);
    assert_eq!(window_util::windowed_width(&window), 800);
    assert_eq!(window_util::windowed_height(&window), 600);
}

#[test]
fn test_getters_accept_negative_positions() {
    // A windowed window on a secondary monitor can sit at negative
    // desktop coordinates.
    let window = CountingWindow::new(-1920, -8, 1280, 720);

    assert_eq!(window_util::windowed_x(&window), -1920);
    assert_eq!(window_util::windowed_y(&window), -8);
}

#[test]
fn test_getters_are_idempotent_and_side_effect_free() {
    let window = CountingWindow::new(10, 20, 800, 600);

    let first = (
        window_util::windowed_x(&window),
        window_util::windowed_y(&window),
        window_util::windowed_width(&window),
        window_util::windowed_height(&window),
    );
    let second = (
        window_util::windowed_x(&window),
        window_util::windowed_y(&window),
        window_util::windowed_width(&window),
        window_util::windowed_height(&window),
    );

    assert_eq!(first, second);
    assert_eq!(window.refresh_count(), 0);
    assert_eq!(window_util::framebuffer_extent(&window), Extent2D::default());
}

#[test]
fn test_refresh_forwards_exactly_one_call() {
    let window = CountingWindow::new(0, 0, 1920, 1080);

    window_util::refresh_framebuffer_size(&window);
    assert_eq!(window.refresh_count(), 1);

    window_util::refresh_framebuffer_size(&window);
    window_util::refresh_framebuffer_size(&window);
    assert_eq!(window.refresh_count(), 3);
}

#[test]
fn test_refresh_makes_framebuffer_extent_observable() {
    let window = CountingWindow::new(0, 0, 1920, 1080);
    assert_eq!(window_util::framebuffer_extent(&window), Extent2D::default());

    window_util::refresh_framebuffer_size(&window);
    assert_eq!(
        window_util::framebuffer_extent(&window),
        Extent2D {
            width: 1920,
            height: 1080
        }
    );
}

#[test]
fn test_accessors_work_through_trait_objects() {
    let shared: SharedHostWindow = Arc::new(CountingWindow::new(10, 20, 800, 600));
    let dynamic: &dyn HostWindow = shared.as_ref();

    assert_eq!(window_util::windowed_x(dynamic), 10);
    assert_eq!(window_util::windowed_y(dynamic), 20);
    assert_eq!(window_util::windowed_width(dynamic), 800);
    assert_eq!(window_util::windowed_height(dynamic), 600);

    window_util::refresh_framebuffer_size(dynamic);
    assert_eq!(
        window_util::framebuffer_extent(dynamic),
        Extent2D {
            width: 800,
            height: 600
        }
    );
}
