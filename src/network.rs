use std::fmt::{self, Debug};

use hashbrown::HashSet;
use tracing::{debug, trace};

mod impl_petgraph;
mod traversal;

pub use impl_petgraph::PetNetwork;

/// Public identifier of an element; valid identifiers are `1..=number_of_elements`.
///
/// Signed, so that the rejected values zero and below can be passed in at all.
pub type Element = i64;
/// Zero-based position of an element in the storage.
pub(crate) type Node = usize;
pub(crate) type Neighbourhood = HashSet<Node>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum InvalidArgument {
    #[error("the number of elements has to be positive, got {0}")]
    NumberOfElements(Element),
    #[error("element {element} is not in the range 1..={number_of_elements}")]
    Element { element: Element, number_of_elements: Element },
}

/// Undirected connections between a fixed number of elements.
///
/// Connections can only be added. All operations that take elements check that they
/// are in `1..=number_of_elements` and return [InvalidArgument] otherwise.
#[derive(Clone, PartialEq, Eq)]
pub struct Network {
    // one neighbourhood per element, element `e` lives at index `e - 1`
    nodes: Vec<Neighbourhood>,
    // number of distinct unordered pairs in `nodes`
    connections: usize,
}

#[inline]
pub(crate) fn element(node: Node) -> Element {
    node as Element + 1
}

impl Network {
    pub fn new(number_of_elements: Element) -> Result<Self, InvalidArgument> {
        let len = match usize::try_from(number_of_elements) {
            Ok(len) if len > 0 => len,
            _ => {
                debug!(number_of_elements, "rejected network size");
                return Err(InvalidArgument::NumberOfElements(number_of_elements));
            }
        };
        let mut nodes: Vec<Neighbourhood> = Vec::new();
        if nodes.try_reserve_exact(len).is_err() {
            debug!(number_of_elements, "network size does not fit into memory");
            return Err(InvalidArgument::NumberOfElements(number_of_elements));
        }
        nodes.resize_with(len, Neighbourhood::new);
        debug!(number_of_elements, "created network");
        Ok(Self { nodes, connections: 0 })
    }

    /// Create a network and [connect](Self::connect) all `connections`.
    pub fn from_connections(
        number_of_elements: Element,
        connections: impl IntoIterator<Item = (Element, Element)>,
    ) -> Result<Self, InvalidArgument> {
        let mut ret = Self::new(number_of_elements)?;
        for (i, j) in connections {
            ret.connect(i, j)?;
        }
        Ok(ret)
    }

    #[inline]
    pub fn number_of_elements(&self) -> Element {
        self.nodes.len() as Element
    }

    #[inline]
    pub fn number_of_connections(&self) -> usize {
        self.connections
    }

    #[inline]
    pub fn is_there_at_least_one_connection(&self) -> bool {
        self.connections > 0
    }

    /// Connect `i` and `j`. Connecting an already connected pair (in either order) does
    /// nothing; `i == j` is allowed and only marks `i` as connected to itself.
    pub fn connect(&mut self, i: Element, j: Element) -> Result<(), InvalidArgument> {
        let (a, b) = self.check_arguments(i, j)?;
        let (a, b) = if a <= b { (a, b) } else { (b, a) };
        if self.nodes[a].insert(b) {
            self.nodes[b].insert(a);
            self.connections += 1;
            trace!(i, j, "connected");
        }
        Ok(())
    }

    pub fn is_directly_connected(
        &self,
        i: Element,
        j: Element,
    ) -> Result<bool, InvalidArgument> {
        let (a, b) = self.check_arguments(i, j)?;
        Ok(self.nodes[a].contains(&b))
    }

    /// The elements directly connected to `element`, in no particular order.
    pub fn neighbours(
        &self,
        element: Element,
    ) -> Result<impl Iterator<Item = Element> + '_, InvalidArgument> {
        let node = self.node(element)?;
        Ok(self.nodes[node].iter().map(|&n| self::element(n)))
    }

    /// Every connected pair exactly once as `(a, b)` with `a <= b`, sorted.
    pub fn connections(&self) -> impl Iterator<Item = (Element, Element)> + '_ {
        self.nodes.iter().enumerate().flat_map(|(a, neighbours)| {
            let mut upper =
                neighbours.iter().copied().filter(|&b| b >= a).collect::<Vec<_>>();
            upper.sort_unstable();
            upper.into_iter().map(move |b| (element(a), element(b)))
        })
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) fn neighbourhood(&self, node: Node) -> &Neighbourhood {
        &self.nodes[node]
    }

    pub(crate) fn node(&self, element: Element) -> Result<Node, InvalidArgument> {
        let number_of_elements = self.number_of_elements();
        if element < 1 || element > number_of_elements {
            debug!(element, number_of_elements, "rejected element");
            return Err(InvalidArgument::Element { element, number_of_elements });
        }
        Ok((element - 1) as Node)
    }

    pub(crate) fn check_arguments(
        &self,
        i: Element,
        j: Element,
    ) -> Result<(Node, Node), InvalidArgument> {
        Ok((self.node(i)?, self.node(j)?))
    }
}

impl Debug for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Network")
            .field("number_of_elements", &self.number_of_elements())
            .field("connections", &self.connections().collect::<Vec<_>>())
            .finish()
    }
}
