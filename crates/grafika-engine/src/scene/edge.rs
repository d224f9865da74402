use std::ops::{Index, IndexMut};

use crate::render::{Shape, Sprite};

/// One of the four border boxes framing the scene.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Edge {
    /// Draw order.
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    #[inline]
    fn slot(self) -> usize {
        match self {
            Edge::Left => 0,
            Edge::Right => 1,
            Edge::Top => 2,
            Edge::Bottom => 3,
        }
    }
}

/// The four border sprites, addressed by [`Edge`].
#[derive(Debug, Clone)]
pub struct Edges {
    sprites: [Sprite; 4],
}

impl Edges {
    pub fn new() -> Self {
        Self {
            sprites: std::array::from_fn(|_| Sprite::new(&Shape::RECTANGLE)),
        }
    }

    /// Sprites paired with their edge, in [`Edge::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Edge, &Sprite)> {
        Edge::ALL.into_iter().map(move |e| (e, &self[e]))
    }
}

impl Default for Edges {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Edge> for Edges {
    type Output = Sprite;

    #[inline]
    fn index(&self, edge: Edge) -> &Sprite {
        &self.sprites[edge.slot()]
    }
}

impl IndexMut<Edge> for Edges {
    #[inline]
    fn index_mut(&mut self, edge: Edge) -> &mut Sprite {
        &mut self.sprites[edge.slot()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edges_are_independent_slots() {
        let mut edges = Edges::new();
        edges[Edge::Top].set_position(1.0, 2.0);
        assert_eq!(edges[Edge::Top].position().y, 2.0);
        assert_eq!(edges[Edge::Bottom].position().y, 0.0);
    }

    #[test]
    fn iter_follows_draw_order() {
        let edges = Edges::new();
        let order: Vec<Edge> = edges.iter().map(|(e, _)| e).collect();
        assert_eq!(order, Edge::ALL);
    }
}
