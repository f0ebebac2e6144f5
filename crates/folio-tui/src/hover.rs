//! Pointer hover tracking.
//!
//! Widgets register the rectangles that react to the pointer while they
//! render; mouse movement is resolved against those rectangles and turned
//! into enter/leave transitions. The app maps transitions onto the effects'
//! start/stop triggers, keeping the terminal event system a thin adapter in
//! front of them.

use ratatui::layout::{Position, Rect};

/// A pointer-sensitive region of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// The banner headline (re-entry replays the word cycler)
    Banner,
    /// The active section's title (enter starts, leave stops the scramble)
    SectionTitle,
    /// A section entry in the navigation list
    Nav(usize),
}

/// What changed on a pointer move
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HoverChange {
    pub left: Option<Zone>,
    pub entered: Option<Zone>,
}

/// Frame-registered hover zones plus the zone currently under the pointer
#[derive(Debug, Default)]
pub struct HoverMap {
    zones: Vec<(Zone, Rect)>,
    current: Option<Zone>,
}

impl HoverMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget last frame's rectangles. Call before widgets render.
    pub fn begin_frame(&mut self) {
        self.zones.clear();
    }

    /// Register a zone's rectangle for this frame
    pub fn register(&mut self, zone: Zone, area: Rect) {
        self.zones.push((zone, area));
    }

    /// The zone under the given position, if any. First registered wins.
    pub fn locate(&self, column: u16, row: u16) -> Option<Zone> {
        let position = Position::new(column, row);
        self.zones
            .iter()
            .find(|(_, area)| area.contains(position))
            .map(|(zone, _)| *zone)
    }

    /// Track a pointer move, reporting enter/leave transitions.
    ///
    /// Moving within one zone reports nothing; crossing a boundary reports
    /// the zone left and/or the zone entered exactly once.
    pub fn update(&mut self, column: u16, row: u16) -> HoverChange {
        let next = self.locate(column, row);
        if next == self.current {
            return HoverChange::default();
        }
        let change = HoverChange {
            left: self.current,
            entered: next,
        };
        self.current = next;
        change
    }

    /// The zone currently under the pointer
    pub fn current(&self) -> Option<Zone> {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> HoverMap {
        let mut map = HoverMap::new();
        map.register(Zone::Banner, Rect::new(0, 0, 40, 4));
        map.register(Zone::SectionTitle, Rect::new(20, 6, 20, 1));
        map.register(Zone::Nav(2), Rect::new(0, 6, 10, 1));
        map
    }

    #[test]
    fn test_locate() {
        let map = map();
        assert_eq!(map.locate(5, 2), Some(Zone::Banner));
        assert_eq!(map.locate(25, 6), Some(Zone::SectionTitle));
        assert_eq!(map.locate(3, 6), Some(Zone::Nav(2)));
        assert_eq!(map.locate(50, 20), None);
    }

    #[test]
    fn test_enter_and_leave_fire_once_per_crossing() {
        let mut map = map();

        let change = map.update(5, 2);
        assert_eq!(change.entered, Some(Zone::Banner));
        assert_eq!(change.left, None);

        // Moving within the same zone is silent.
        assert_eq!(map.update(6, 3), HoverChange::default());

        let change = map.update(25, 6);
        assert_eq!(change.left, Some(Zone::Banner));
        assert_eq!(change.entered, Some(Zone::SectionTitle));

        let change = map.update(50, 20);
        assert_eq!(change.left, Some(Zone::SectionTitle));
        assert_eq!(change.entered, None);
    }

    #[test]
    fn test_first_registered_zone_wins_on_overlap() {
        let mut map = HoverMap::new();
        map.register(Zone::Banner, Rect::new(0, 0, 10, 10));
        map.register(Zone::Nav(0), Rect::new(0, 0, 10, 10));
        assert_eq!(map.locate(1, 1), Some(Zone::Banner));
    }

    #[test]
    fn test_begin_frame_clears_zones_keeps_hover() {
        let mut map = map();
        map.update(5, 2);
        map.begin_frame();
        assert_eq!(map.locate(5, 2), None);
        // Still hovering as far as transitions are concerned until the
        // next update says otherwise.
        assert_eq!(map.current(), Some(Zone::Banner));
    }
}
