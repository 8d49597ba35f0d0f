use hudkit_engine::coords::{Rect, Vec2};
use hudkit_engine::scene::DrawSurface;

use crate::clip::{invert_clip_rect, ClipRegistry, WindowClippingMode};

bitflags::bitflags! {
    /// Options for host sub-windows.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct WindowFlags: u32 {
        const NO_TITLE_BAR               = 1 << 0;
        const NO_SCROLLBAR               = 1 << 1;
        const NO_BACKGROUND              = 1 << 2;
        const NO_MOVE                    = 1 << 3;
        const NO_RESIZE                  = 1 << 4;
        const NO_INPUTS                  = 1 << 5;
        const NO_SAVED_SETTINGS          = 1 << 6;
        const NO_FOCUS_ON_APPEARING      = 1 << 7;
        const NO_BRING_TO_FRONT_ON_FOCUS = 1 << 8;
        /// Keep the window on the host's main viewport.
        const MAIN_VIEWPORT              = 1 << 9;

        /// Invisible, fixed overlay window.
        const OVERLAY = Self::NO_TITLE_BAR.bits()
            | Self::NO_SCROLLBAR.bits()
            | Self::NO_BACKGROUND.bits()
            | Self::NO_MOVE.bits()
            | Self::NO_RESIZE.bits();
        /// Never steal focus or z-order from the host and never persist layout.
        const PASSIVE = Self::NO_SAVED_SETTINGS.bits()
            | Self::NO_FOCUS_ON_APPEARING.bits()
            | Self::NO_BRING_TO_FRONT_ON_FOCUS.bits();
    }
}

/// The host's windowing layer.
///
/// `begin_window` / `end_window` follow immediate-mode rules: `end_window`
/// is called after every `begin_window`, whether or not it succeeded.
pub trait WindowHost {
    /// Draw surface of the innermost open window (the shared canvas when none is open).
    fn canvas(&mut self) -> &mut dyn DrawSurface;

    fn mouse_pos(&self) -> Vec2;

    /// Opens a named sub-window at `pos` / `size`. `false` means the host
    /// refused (collapsed, minimized, ...) and nothing should be drawn.
    fn begin_window(&mut self, name: &str, pos: Vec2, size: Vec2, flags: WindowFlags) -> bool;

    fn end_window(&mut self);

    /// Hosts whose canvas clips to arbitrary rect sets can skip sub-windows entirely.
    fn supports_multi_clip(&self) -> bool {
        false
    }
}

/// Whether the host routes input through a proxy (overlay windows then need no input).
pub trait InputProxy {
    fn is_enabled(&self) -> bool;
}

impl InputProxy for bool {
    fn is_enabled(&self) -> bool {
        *self
    }
}

/// What [`draw_in_window`] ended up doing this frame.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum WindowDraw {
    /// Drawn straight onto the current canvas.
    Direct,
    /// Drawn inside one sub-window.
    Window,
    /// Drawn around a host window; `regions` is how many pieces were drawn.
    Clipped { regions: usize },
    /// Hidden because a host window overlaps it.
    Hidden,
    /// The host refused the sub-window.
    Refused,
}

/// Runs `draw` for the element at `pos` / `size`, routed so it stays clear of host windows.
///
/// Without clipping the draw goes straight to the canvas, or into a single
/// sub-window when the element needs input or a window of its own. When a
/// host window overlaps the element it is either hidden or drawn once per
/// region of the element not covered by that window.
#[allow(clippy::too_many_arguments)]
pub fn draw_in_window<F>(
    host: &mut dyn WindowHost,
    clips: &dyn ClipRegistry,
    name: &str,
    pos: Vec2,
    size: Vec2,
    needs_input: bool,
    needs_window: bool,
    flags: WindowFlags,
    mut draw: F,
) -> WindowDraw
where
    F: FnMut(&mut dyn DrawSurface),
{
    let mode = clips.mode();
    if !clips.enabled() || matches!(mode, WindowClippingMode::Off | WindowClippingMode::Performance) {
        draw(host.canvas());
        return WindowDraw::Direct;
    }

    let mut flags = flags | WindowFlags::PASSIVE;
    if !needs_input {
        flags |= WindowFlags::NO_INPUTS;
    }

    let area = Rect::from_origin_size(pos, size);
    let Some(blocker) = clips.blocking_rect(area) else {
        if !needs_input && !needs_window {
            draw(host.canvas());
            return WindowDraw::Direct;
        }

        let opened = host.begin_window(name, pos, size, flags);
        if opened {
            draw(host.canvas());
        }
        host.end_window();

        if !opened {
            log::debug!("window {name:?} refused by host");
            return WindowDraw::Refused;
        }
        return WindowDraw::Window;
    };

    if mode == WindowClippingMode::Hide {
        log::trace!("{name:?} hidden behind {blocker:?}");
        return WindowDraw::Hidden;
    }

    // The host window under the cursor gets the clicks, not the overlay.
    if needs_input && blocker.contains(host.mouse_pos()) {
        flags |= WindowFlags::NO_INPUTS;
    }

    let regions = invert_clip_rect(blocker, area);

    if host.supports_multi_clip() {
        let canvas = host.canvas();
        for region in &regions {
            canvas.push_clip(region.min(), region.max());
            draw(&mut *canvas);
            canvas.pop_clip();
        }
        return WindowDraw::Clipped { regions: regions.len() };
    }

    let mut drawn = 0;
    for (i, region) in regions.iter().enumerate() {
        let window_name = format!("{name}_{i}");
        if !host.begin_window(&window_name, pos, size, flags | WindowFlags::MAIN_VIEWPORT) {
            host.end_window();
            log::debug!("window {window_name:?} refused by host");
            continue;
        }

        let canvas = host.canvas();
        canvas.push_clip(region.min(), region.max());
        draw(&mut *canvas);
        canvas.pop_clip();

        host.end_window();
        drawn += 1;
    }

    if drawn == 0 && !regions.is_empty() {
        return WindowDraw::Refused;
    }
    WindowDraw::Clipped { regions: drawn }
}

/// [`draw_in_window`] with overlay flags, no dedicated window, and input
/// only when the host is not proxying it.
pub fn draw_in_window_default<F>(
    host: &mut dyn WindowHost,
    clips: &dyn ClipRegistry,
    input: &dyn InputProxy,
    name: &str,
    pos: Vec2,
    size: Vec2,
    draw: F,
) -> WindowDraw
where
    F: FnMut(&mut dyn DrawSurface),
{
    let needs_input = !input.is_enabled();
    draw_in_window(host, clips, name, pos, size, needs_input, false, WindowFlags::OVERLAY, draw)
}
