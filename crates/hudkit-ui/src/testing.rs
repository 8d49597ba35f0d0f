//! Collaborator fakes shared by the unit tests.

use std::collections::{HashMap, HashSet};

use hudkit_engine::coords::{Rect, Vec2};
use hudkit_engine::scene::{DrawList, DrawSurface};

use crate::texture::{Texture, TextureProvider};
use crate::window::{WindowFlags, WindowHost};

#[derive(Debug, Default)]
pub(crate) struct FakeTextures {
    pub actions: HashMap<u32, Texture>,
    pub statuses: HashMap<(u32, u32), Texture>,
    pub items: HashMap<u32, Texture>,
    pub icons: HashMap<u32, Texture>,
    pub bars: HashMap<String, Texture>,
}

impl TextureProvider for FakeTextures {
    fn action_icon(&self, action_id: u32) -> Option<Texture> {
        self.actions.get(&action_id).copied()
    }

    fn status_icon(&self, status_id: u32, stack_index: u32) -> Option<Texture> {
        self.statuses.get(&(status_id, stack_index)).copied()
    }

    fn item_icon(&self, item_id: u32) -> Option<Texture> {
        self.items.get(&item_id).copied()
    }

    fn icon(&self, icon_id: u32) -> Option<Texture> {
        self.icons.get(&icon_id).copied()
    }

    fn bar_texture(&self, name: &str) -> Option<Texture> {
        self.bars.get(name).copied()
    }
}

#[derive(Debug)]
pub(crate) struct FakeWindow {
    pub name: String,
    pub rect: Rect,
    pub flags: WindowFlags,
    pub list: DrawList,
}

/// Records every window it is asked to open, each with its own draw list.
#[derive(Debug, Default)]
pub(crate) struct FakeHost {
    pub canvas: DrawList,
    pub windows: Vec<FakeWindow>,
    pub mouse: Vec2,
    pub multi_clip: bool,
    /// Refuse every window.
    pub refuse: bool,
    pub refuse_names: HashSet<String>,
    /// Begun windows; `None` for refused ones.
    pub open: Vec<Option<usize>>,
}

impl FakeHost {
    pub fn open_depth(&self) -> usize {
        self.open.len()
    }
}

impl WindowHost for FakeHost {
    fn canvas(&mut self) -> &mut dyn DrawSurface {
        match self.open.last() {
            Some(Some(i)) => &mut self.windows[*i].list,
            _ => &mut self.canvas,
        }
    }

    fn mouse_pos(&self) -> Vec2 {
        self.mouse
    }

    fn begin_window(&mut self, name: &str, pos: Vec2, size: Vec2, flags: WindowFlags) -> bool {
        self.windows.push(FakeWindow {
            name: name.to_owned(),
            rect: Rect::from_origin_size(pos, size),
            flags,
            list: DrawList::new(),
        });

        let accepted = !self.refuse && !self.refuse_names.contains(name);
        self.open.push(accepted.then_some(self.windows.len() - 1));
        accepted
    }

    fn end_window(&mut self) {
        self.open.pop();
    }

    fn supports_multi_clip(&self) -> bool {
        self.multi_clip
    }
}
