//! The scene graph: nine board tiles followed by one mark per placement.

use crate::config::SceneConfig;
use crate::math::{Aabb, Ray, Vec3};
use galo_core::{Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// What a scene node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// A clickable board tile.
    Tile,
    /// A player's mark sitting on a tile.
    Mark(Player),
}

/// A box-shaped object in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Node {
    kind: NodeKind,
    position: Vec3,
    size: Vec3,
    color: u32,
    opacity: f32,
}

impl Node {
    /// What this node is.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Centre of the box in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Full extents of the box.
    pub fn size(&self) -> Vec3 {
        self.size
    }

    /// Colour as `0xRRGGBB`.
    pub fn color(&self) -> u32 {
        self.color
    }

    /// Opacity in `[0, 1]`.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Axis-aligned bounds used for picking.
    pub fn bounds(&self) -> Aabb {
        Aabb::centered(self.position, self.size)
    }
}

/// World-space centre of the tile for `coord`.
///
/// Row 0 is at the top (`+y`), column 0 on the left (`-x`).
pub fn tile_center(coord: Coord, square_size: f32) -> Vec3 {
    Vec3::new(
        (coord.col() as f32 - 1.0) * square_size,
        (1.0 - coord.row() as f32) * square_size,
        0.0,
    )
}

/// Board coordinate of an object standing at `position`.
///
/// Inverse of [`tile_center`] by rounding; `None` off the board.
pub fn coord_at(position: Vec3, square_size: f32) -> Option<Coord> {
    let col = (position.x / square_size + 1.0).round();
    let row = (1.0 - position.y / square_size).round();
    if !(0.0..=2.0).contains(&col) || !(0.0..=2.0).contains(&row) {
        return None;
    }
    Coord::new(row as usize, col as usize).ok()
}

/// A nearest-hit pick result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit<'a> {
    /// The node that was hit.
    pub node: &'a Node,
    /// Distance along the ray.
    pub distance: f32,
}

/// The board scene.
///
/// Tiles are created once and never removed. Marks are appended as they are
/// placed and removed together by [`Scene::clear_marks`].
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    nodes: Vec<Node>,
    config: SceneConfig,
}

impl Scene {
    /// Builds the nine board tiles, row-major.
    #[instrument(skip(config))]
    pub fn new(config: &SceneConfig) -> Self {
        let size = *config.square_size();
        let nodes = Coord::all()
            .map(|coord| Node {
                kind: NodeKind::Tile,
                position: tile_center(coord, size),
                size: Vec3::new(size, size, *config.tile_depth()),
                color: *config.tile_color(),
                opacity: *config.tile_opacity(),
            })
            .collect();
        Self {
            nodes,
            config: config.clone(),
        }
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// The board tiles.
    pub fn tiles(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.kind == NodeKind::Tile)
    }

    /// The marks currently on the board.
    pub fn marks(&self) -> impl Iterator<Item = &Node> {
        self.nodes
            .iter()
            .filter(|n| matches!(n.kind, NodeKind::Mark(_)))
    }

    /// Adds `player`'s mark on top of the tile at `coord`.
    #[instrument(skip(self))]
    pub fn add_mark(&mut self, coord: Coord, player: Player) -> &Node {
        let mut position = tile_center(coord, *self.config.square_size());
        position.z = *self.config.mark_lift();
        let mark_size = *self.config.mark_size();
        self.nodes.push(Node {
            kind: NodeKind::Mark(player),
            position,
            size: Vec3::new(mark_size, mark_size, *self.config.tile_depth()),
            color: self.config.mark_color(player),
            opacity: 1.0,
        });
        let index = self.nodes.len() - 1;
        &self.nodes[index]
    }

    /// Removes every mark and keeps every tile. Returns how many marks went.
    #[instrument(skip(self))]
    pub fn clear_marks(&mut self) -> usize {
        let before = self.nodes.len();
        self.nodes.retain(|n| n.kind == NodeKind::Tile);
        let removed = before - self.nodes.len();
        debug!(removed, "Marks cleared");
        removed
    }

    /// Nearest node hit by `ray`, tiles and marks alike.
    pub fn pick(&self, ray: &Ray) -> Option<Hit<'_>> {
        self.nodes
            .iter()
            .filter_map(|node| {
                node.bounds()
                    .intersect(ray)
                    .map(|distance| Hit { node, distance })
            })
            .min_by(|a, b| a.distance.total_cmp(&b.distance))
    }

    /// Board coordinate a node stands on.
    pub fn coord_of(&self, node: &Node) -> Option<Coord> {
        coord_at(node.position, *self.config.square_size())
    }
}
