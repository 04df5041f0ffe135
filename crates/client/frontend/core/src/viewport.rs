//! Viewport windowing: the visible sub-rectangle of the world grid.

/// A window into the world grid, in world coordinates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Window centered on the player as closely as the world bounds allow.
    ///
    /// When the world is smaller than the requested window along an axis the
    /// window shrinks to the world extent with origin 0; a negative-length
    /// window is never produced.
    pub fn centered(
        world_width: u32,
        world_height: u32,
        view_width: u32,
        view_height: u32,
        player_x: i32,
        player_y: i32,
    ) -> Self {
        let (x, width) = window_axis(world_width, view_width, player_x);
        let (y, height) = window_axis(world_height, view_height, player_y);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn contains_world(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Translates world coordinates into view space, `None` outside the
    /// window.
    pub fn to_view(&self, x: i32, y: i32) -> Option<(i32, i32)> {
        if self.contains_world(x, y) {
            Some((x - self.x, y - self.y))
        } else {
            None
        }
    }

    /// Inverse of [`Viewport::to_view`], unchecked.
    pub fn to_world(&self, view_x: i32, view_y: i32) -> (i32, i32) {
        (self.x + view_x, self.y + view_y)
    }
}

fn window_axis(world: u32, view: u32, player: i32) -> (i32, u32) {
    if world <= view {
        return (0, world);
    }
    let origin = (player - view as i32 / 2).clamp(0, (world - view) as i32);
    (origin, view)
}
