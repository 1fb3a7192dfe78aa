use std::sync::{Arc, OnceLock};

use rigid3d_algebra::Vec3;

use crate::Posture;

/// A node of a tree of frames rooted at the world frame.
///
/// Cloning is cheap and shares the node. Two handles compare equal when they
/// refer to the same node, not when their postures happen to match.
///
/// # Example
///
/// ```
/// use rigid3d_algebra::{Mat3, Vec3};
/// use rigid3d_frames::{CoordinateSystem, Posture};
///
/// let room = CoordinateSystem::new(Posture::new(Vec3::new(10.0, 0.0, 0.0), Mat3::IDENTITY));
/// let table = room.new_child(Posture::new(Vec3::new(0.0, 2.0, 0.0), Mat3::IDENTITY));
///
/// let cup = Vec3::new(0.0, 0.0, 1.0);
/// assert_eq!(table.translate_into_world(cup), Vec3::new(10.0, 2.0, 1.0));
/// assert_eq!(table.translate_into(cup, &room), Vec3::new(0.0, 2.0, 1.0));
/// assert_eq!(table.depth(), 2);
/// ```
#[derive(Clone)]
pub struct CoordinateSystem(Arc<Node>);

enum Node {
    World,
    Child {
        parent: CoordinateSystem,
        posture: Posture,
    },
}

impl CoordinateSystem {
    /// The root frame shared by every tree.
    pub fn world() -> &'static CoordinateSystem {
        static WORLD: OnceLock<CoordinateSystem> = OnceLock::new();
        WORLD.get_or_init(|| CoordinateSystem(Arc::new(Node::World)))
    }

    /// A frame placed in the world frame.
    pub fn new(posture: Posture) -> Self {
        Self::world().new_child(posture)
    }

    /// A frame placed in this frame.
    pub fn new_child(&self, posture: Posture) -> Self {
        Self(Arc::new(Node::Child {
            parent: self.clone(),
            posture,
        }))
    }

    /// Returns true for the world frame.
    #[inline]
    pub fn is_world(&self) -> bool {
        matches!(*self.0, Node::World)
    }

    /// The frame this one is placed in, or `None` for the world frame.
    pub fn parent(&self) -> Option<&CoordinateSystem> {
        match &*self.0 {
            Node::World => None,
            Node::Child { parent, .. } => Some(parent),
        }
    }

    /// The placement in the parent frame. The world frame reports
    /// [`Posture::IDENTITY`].
    pub fn posture(&self) -> &Posture {
        match &*self.0 {
            Node::World => &Posture::IDENTITY,
            Node::Child { posture, .. } => posture,
        }
    }

    /// Number of frames between this one and the world frame, the world
    /// frame itself being at depth 0.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut frame = self;
        while let Some(parent) = frame.parent() {
            depth += 1;
            frame = parent;
        }
        depth
    }

    /// Express a position given in this frame in world coordinates.
    pub fn translate_into_world(&self, local: Vec3) -> Vec3 {
        let mut p = local;
        let mut frame = self;
        while let Node::Child { parent, posture } = &*frame.0 {
            p = posture.from_local_to_parent(p);
            frame = parent;
        }
        p
    }

    /// Express a world position in this frame's coordinates.
    pub fn translate_into_local(&self, world: Vec3) -> Vec3 {
        let mut chain = Vec::new();
        let mut frame = self;
        while let Node::Child { parent, posture } = &*frame.0 {
            chain.push(posture);
            frame = parent;
        }
        chain
            .iter()
            .rev()
            .fold(world, |p, posture| posture.from_parent_to_local(p))
    }

    /// Express a position given in this frame in the coordinates of `target`.
    pub fn translate_into(&self, local: Vec3, target: &CoordinateSystem) -> Vec3 {
        if self == target {
            return local;
        }
        log::trace!(
            "translating from depth {} into depth {}",
            self.depth(),
            target.depth()
        );
        target.translate_into_local(self.translate_into_world(local))
    }
}

impl Drop for Node {
    // Unlinks the ancestors one by one so that dropping a deep chain does
    // not recurse once per frame.
    fn drop(&mut self) {
        let Node::Child { parent, .. } = self else {
            return;
        };
        let world = CoordinateSystem::world();
        let mut next = std::mem::replace(parent, world.clone());
        while !next.is_world() {
            let Ok(mut node) = Arc::try_unwrap(next.0) else {
                // still shared with another handle
                return;
            };
            let Node::Child { parent, .. } = &mut node else {
                return;
            };
            next = std::mem::replace(parent, world.clone());
        }
    }
}

impl PartialEq for CoordinateSystem {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for CoordinateSystem {}

impl std::fmt::Debug for CoordinateSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &*self.0 {
            Node::World => f.write_str("CoordinateSystem::World"),
            Node::Child { parent, posture } => f
                .debug_struct("CoordinateSystem")
                .field("posture", posture)
                .field("parent", parent)
                .finish(),
        }
    }
}
