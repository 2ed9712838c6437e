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

//! Named accessors over a borrowed host window.
//!
//! Each function forwards to the corresponding `HostWindow` operation
//! unchanged, so mod code can read window state without importing the trait.
//! The window is only borrowed for the duration of the call.

use thyra_core::math::Extent2D;
use thyra_core::platform::window::HostWindow;

/// Returns the window's horizontal position in windowed mode.
pub fn windowed_x<W>(window: &W) -> i32
where
    W: HostWindow + ?Sized,
{
    window.windowed_x()
}

/// Returns the window's vertical position in windowed mode.
pub fn windowed_y<W>(window: &W) -> i32
where
    W: HostWindow + ?Sized,
{
    window.windowed_y()
}

/// Returns the window's client-area width in windowed mode.
pub fn windowed_width<W>(window: &W) -> u32
where
    W: HostWindow + ?Sized,
{
    window.windowed_width()
}

/// Returns the window's client-area height in windowed mode.
pub fn windowed_height<W>(window: &W) -> u32
where
    W: HostWindow + ?Sized,
{
    window.windowed_height()
}

/// Returns the pixel extent the host renderer currently targets.
pub fn framebuffer_extent<W>(window: &W) -> Extent2D
where
    W: HostWindow + ?Sized,
{
    window.framebuffer_extent()
}

/// Asks the window to recompute its framebuffer size from its current state.
pub fn refresh_framebuffer_size<W>(window: &W)
where
    W: HostWindow + ?Sized,
{
    window.refresh_framebuffer_size();
}
