use std::collections::HashMap;

use hudkit_ui::prelude::*;

/// Stand-in for a game client's texture cache.
#[derive(Debug, Default)]
pub struct PreviewTextures {
    icons: HashMap<u32, Texture>,
    bars: HashMap<String, Texture>,
    next_handle: u64,
}

impl PreviewTextures {
    fn alloc(&mut self, width: u32, height: u32) -> Texture {
        self.next_handle += 1;
        Texture::new(TextureId(self.next_handle), width, height)
    }

    pub fn with_icon(mut self, icon_id: u32, width: u32, height: u32) -> Self {
        let t = self.alloc(width, height);
        self.icons.insert(icon_id, t);
        self
    }

    pub fn with_bar(mut self, name: &str, width: u32, height: u32) -> Self {
        let t = self.alloc(width, height);
        self.bars.insert(name.to_owned(), t);
        self
    }
}

// Action, status and item rows all map onto icon ids in the preview.
impl TextureProvider for PreviewTextures {
    fn action_icon(&self, action_id: u32) -> Option<Texture> {
        self.icons.get(&action_id).copied()
    }

    fn status_icon(&self, status_id: u32, stack_index: u32) -> Option<Texture> {
        self.icons.get(&(status_id + stack_index)).copied()
    }

    fn item_icon(&self, item_id: u32) -> Option<Texture> {
        self.icons.get(&item_id).copied()
    }

    fn icon(&self, icon_id: u32) -> Option<Texture> {
        self.icons.get(&icon_id).copied()
    }

    fn bar_texture(&self, name: &str) -> Option<Texture> {
        self.bars.get(name).copied()
    }
}

/// One sub-window recorded by [`PreviewHost`].
#[derive(Debug)]
pub struct PreviewWindow {
    pub name: String,
    pub flags: WindowFlags,
    pub list: DrawList,
}

/// Window host that records instead of presenting.
#[derive(Debug, Default)]
pub struct PreviewHost {
    pub canvas: DrawList,
    pub windows: Vec<PreviewWindow>,
    pub mouse: Vec2,
    pub open: Vec<usize>,
}

impl WindowHost for PreviewHost {
    fn canvas(&mut self) -> &mut dyn DrawSurface {
        match self.open.last() {
            Some(&i) => &mut self.windows[i].list,
            None => &mut self.canvas,
        }
    }

    fn mouse_pos(&self) -> Vec2 {
        self.mouse
    }

    fn begin_window(&mut self, name: &str, _pos: Vec2, _size: Vec2, flags: WindowFlags) -> bool {
        self.windows.push(PreviewWindow { name: name.to_owned(), flags, list: DrawList::new() });
        self.open.push(self.windows.len() - 1);
        true
    }

    fn end_window(&mut self) {
        self.open.pop();
    }
}
