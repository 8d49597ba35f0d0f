use hudkit_engine::coords::{Rect, Vec2};

/// How overlay content reacts to host windows covering it.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum WindowClippingMode {
    /// No clipping; draw straight onto the shared canvas.
    Off,
    /// Same as `Off` as far as drawing goes; the host only tracks rects cheaply.
    Performance,
    /// Skip any element that touches a host window.
    Hide,
    /// Draw around host windows.
    #[default]
    Clip,
}

/// Registry of host-window rects overlay content must avoid. Owned by the host.
pub trait ClipRegistry {
    fn enabled(&self) -> bool;

    fn mode(&self) -> WindowClippingMode;

    /// The host window rect overlapping `area`, if any.
    fn blocking_rect(&self, area: Rect) -> Option<Rect>;
}

/// In-memory [`ClipRegistry`] the host refreshes once per frame.
#[derive(Debug, Clone, Default)]
pub struct ClipRects {
    pub enabled: bool,
    pub mode: WindowClippingMode,
    rects: Vec<Rect>,
}

impl ClipRects {
    pub fn new(mode: WindowClippingMode) -> Self {
        Self { enabled: true, mode, rects: Vec::new() }
    }

    /// Replaces the tracked rects; empty ones are dropped.
    pub fn set_rects(&mut self, rects: impl IntoIterator<Item = Rect>) {
        self.rects.clear();
        self.rects.extend(rects.into_iter().map(Rect::normalized).filter(|r| !r.is_empty()));
    }

    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// Whether `point` lies inside any tracked rect.
    pub fn contains(&self, point: Vec2) -> bool {
        self.rects.iter().any(|r| r.contains(point))
    }
}

impl ClipRegistry for ClipRects {
    fn enabled(&self) -> bool {
        self.enabled
    }

    fn mode(&self) -> WindowClippingMode {
        self.mode
    }

    /// First tracked rect overlapping `area`.
    fn blocking_rect(&self, area: Rect) -> Option<Rect> {
        self.rects.iter().copied().find(|r| r.overlaps(area))
    }
}

/// `target` minus `blocker`, as at most four disjoint rects.
///
/// The strips above and below the blocker span the full target width; the
/// left and right strips only cover the blocker's vertical band, so corners
/// are never covered twice. Empty strips are omitted. A blocker that misses
/// the target returns the target itself; one that covers it returns nothing.
pub fn invert_clip_rect(blocker: Rect, target: Rect) -> Vec<Rect> {
    let target = target.normalized();
    if target.is_empty() {
        return Vec::new();
    }
    let Some(hole) = blocker.intersect(target) else {
        return vec![target];
    };

    let (t0, t1) = (target.min(), target.max());
    let (h0, h1) = (hole.min(), hole.max());

    [
        // above
        Rect::from_min_max(t0, Vec2::new(t1.x, h0.y)),
        // below
        Rect::from_min_max(Vec2::new(t0.x, h1.y), t1),
        // left
        Rect::from_min_max(Vec2::new(t0.x, h0.y), Vec2::new(h0.x, h1.y)),
        // right
        Rect::from_min_max(Vec2::new(h1.x, h0.y), Vec2::new(t1.x, h1.y)),
    ]
    .into_iter()
    .filter(|r| !r.is_empty())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    /// Checks that `parts` tile `target \ blocker`: disjoint, inside the
    /// target, outside the blocker, and with the right total area.
    fn assert_tiles(parts: &[Rect], blocker: Rect, target: Rect) {
        for (i, a) in parts.iter().enumerate() {
            assert!(!a.is_empty());
            assert_eq!(a.intersect(target), Some(*a), "{a:?} leaves the target");
            assert!(!a.overlaps(blocker), "{a:?} overlaps the blocker");
            for b in &parts[i + 1..] {
                assert!(!a.overlaps(*b), "{a:?} overlaps {b:?}");
            }
        }

        let hole = blocker.intersect(target).map_or(0.0, Rect::area);
        let covered: f32 = parts.iter().map(|p| p.area()).sum();
        assert!((covered - (target.area() - hole)).abs() < 1e-3, "covered {covered}");
    }

    #[test]
    fn blocker_inside_target_gives_four_strips() {
        let target = r(0.0, 0.0, 100.0, 100.0);
        let blocker = r(20.0, 30.0, 40.0, 20.0);
        let parts = invert_clip_rect(blocker, target);

        assert_eq!(parts, vec![
            r(0.0, 0.0, 100.0, 30.0),
            r(0.0, 50.0, 100.0, 50.0),
            r(0.0, 30.0, 20.0, 20.0),
            r(60.0, 30.0, 40.0, 20.0),
        ]);
        assert_tiles(&parts, blocker, target);
    }

    #[test]
    fn blocker_over_a_corner() {
        let target = r(0.0, 0.0, 100.0, 100.0);
        let blocker = r(70.0, -20.0, 50.0, 50.0);
        let parts = invert_clip_rect(blocker, target);

        // Nothing above (blocker reaches past the top) and nothing right of it.
        assert_eq!(parts.len(), 2);
        assert_tiles(&parts, blocker, target);
    }

    #[test]
    fn blocker_across_the_middle() {
        let target = r(0.0, 0.0, 100.0, 60.0);
        let blocker = r(-10.0, 20.0, 200.0, 10.0);
        let parts = invert_clip_rect(blocker, target);

        assert_eq!(parts, vec![r(0.0, 0.0, 100.0, 20.0), r(0.0, 30.0, 100.0, 30.0)]);
        assert_tiles(&parts, blocker, target);
    }

    #[test]
    fn blocker_outside_returns_target() {
        let target = r(0.0, 0.0, 50.0, 50.0);
        let blocker = r(100.0, 100.0, 10.0, 10.0);
        assert_eq!(invert_clip_rect(blocker, target), vec![target]);
    }

    #[test]
    fn blocker_covering_target_returns_nothing() {
        let target = r(10.0, 10.0, 20.0, 20.0);
        assert!(invert_clip_rect(r(0.0, 0.0, 100.0, 100.0), target).is_empty());
    }

    #[test]
    fn empty_target_returns_nothing() {
        assert!(invert_clip_rect(r(0.0, 0.0, 1.0, 1.0), r(0.0, 0.0, 0.0, 10.0)).is_empty());
    }

    #[test]
    fn registry_finds_first_overlapping_rect() {
        let mut clips = ClipRects::new(WindowClippingMode::Clip);
        clips.set_rects([r(0.0, 0.0, 0.0, 0.0), r(500.0, 0.0, 100.0, 100.0), r(0.0, 0.0, 50.0, 50.0)]);

        assert_eq!(clips.rects().len(), 2);
        assert_eq!(clips.blocking_rect(r(40.0, 40.0, 20.0, 20.0)), Some(r(0.0, 0.0, 50.0, 50.0)));
        assert_eq!(clips.blocking_rect(r(200.0, 200.0, 20.0, 20.0)), None);
        assert!(clips.contains(Vec2::new(550.0, 50.0)));
    }
}
