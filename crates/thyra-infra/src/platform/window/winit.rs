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

//! A `winit`-based implementation of the `HostWindow` contract.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use thyra_core::math::Extent2D;
use thyra_core::platform::window::HostWindow;
use winit::dpi::LogicalSize;
use winit::window::Window;

/// A `HostWindow` implementation over a window created by the host engine.
///
/// The host owns the window and its event loop; this wrapper only keeps a
/// shared handle to it so mod code can read windowed geometry through the
/// `HostWindow` contract. It never creates, resizes, or closes the window.
///
/// Windowed position and size are read live from the platform in logical
/// (screen) coordinates. The framebuffer extent is the physical pixel size
/// recorded by the most recent `refresh_framebuffer_size` call.
#[derive(Debug)]
pub struct WinitHostWindow {
    inner: Arc<Window>,
    // Written only by `refresh_framebuffer_size`, from the host's window
    // thread.
    framebuffer_width: AtomicU32,
    framebuffer_height: AtomicU32,
}

impl WinitHostWindow {
    /// Adopts a window that the host engine has already created.
    ///
    /// The framebuffer extent is seeded from the window's current physical
    /// inner size, so it is meaningful before the first refresh.
    pub fn from_host(window: Arc<Window>) -> Self {
        let size = window.inner_size();
        log::info!(
            "Adopted host window {:?} ({}x{} physical)",
            window.id(),
            size.width,
            size.height
        );

        Self {
            inner: window,
            framebuffer_width: AtomicU32::new(size.width),
            framebuffer_height: AtomicU32::new(size.height),
        }
    }

    /// The window's outer position in screen coordinates.
    ///
    /// Some platforms (notably Wayland) cannot report a window position; the
    /// origin is reported there instead.
    fn outer_position(&self) -> (i32, i32) {
        match self.inner.outer_position() {
            Ok(position) => (position.x, position.y),
            Err(err) => {
                log::warn!("Host window position not reported by the platform: {err}");
                (0, 0)
            }
        }
    }

    /// The window's client-area size in logical (screen) coordinates.
    fn logical_inner_size(&self) -> LogicalSize<u32> {
        self.inner
            .inner_size()
            .to_logical(self.inner.scale_factor())
    }
}

impl HostWindow for WinitHostWindow {
    fn windowed_x(&self) -> i32 {
        self.outer_position().0
    }

    fn windowed_y(&self) -> i32 {
        self.outer_position().1
    }

    fn windowed_width(&self) -> u32 {
        self.logical_inner_size().width
    }

    fn windowed_height(&self) -> u32 {
        self.logical_inner_size().height
    }

    fn framebuffer_extent(&self) -> Extent2D {
        Extent2D {
            width: self.framebuffer_width.load(Ordering::Relaxed),
            height: self.framebuffer_height.load(Ordering::Relaxed),
        }
    }

    fn refresh_framebuffer_size(&self) {
        let size = self.inner.inner_size();
        self.framebuffer_width.store(size.width, Ordering::Relaxed);
        self.framebuffer_height.store(size.height, Ordering::Relaxed);

        log::trace!(
            "Framebuffer size refreshed to {}x{}",
            size.width,
            size.height
        );
    }
}
