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

//! The public-facing Software Development Kit (SDK) for Thyra.
//! This crate provides a simple and stable API for mod developers to read
//! the state of the host engine's window.

pub mod window_util;

pub mod prelude {
    pub use crate::window_util;
    pub use thyra_core::math::Extent2D;
    pub use thyra_core::platform::window::{HostWindow, SharedHostWindow};
    pub use thyra_infra::WinitHostWindow;
}
