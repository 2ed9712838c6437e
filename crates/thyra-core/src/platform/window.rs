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

//! Defines the contract for reading the state of a host-owned window.

use crate::math::Extent2D;
use std::sync::Arc;

/// A shared, thread-safe handle to a host window.
pub type SharedHostWindow = Arc<dyn HostWindow>;

/// A trait that abstracts read access to a window owned by the host engine.
///
/// The host creates the window, drives its event loop, and keeps its
/// windowed-mode geometry up to date; this trait only borrows it. Any
/// windowing backend (winit, SDL2, glfw, etc.) can implement this trait to
/// expose its window to mod code.
///
/// The four `windowed_*` attributes describe the window's non-fullscreen
/// placement and size. What they report while the window is fullscreen is
/// backend-defined and not constrained here.
pub trait HostWindow: Send + Sync {
    /// Returns the horizontal position of the window in windowed mode.
    fn windowed_x(&self) -> i32;

    /// Returns the vertical position of the window in windowed mode.
    fn windowed_y(&self) -> i32;

    /// Returns the width of the window's client area in windowed mode.
    fn windowed_width(&self) -> u32;

    /// Returns the height of the window's client area in windowed mode.
    fn windowed_height(&self) -> u32;

    /// Returns the pixel extent the host renderer currently targets.
    fn framebuffer_extent(&self) -> Extent2D;

    /// Asks the window to recompute its framebuffer size from its current
    /// state. How the new size is derived is owned by the host window.
    fn refresh_framebuffer_size(&self);
}
