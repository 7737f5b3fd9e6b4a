//! Reachability over a fixed set of elements `1..=n`.
//!
//! A [Network] records undirected connections between its elements and answers
//! whether two elements are connected, either directly or through a chain of
//! connections.
//!
//! ```
//! use connectivity::Network;
//!
//! let mut network = Network::new(5)?;
//! network.connect(1, 2)?;
//! network.connect(3, 2)?;
//! network.connect(3, 4)?;
//! assert!(network.query(1, 4)?);
//! assert!(!network.query(1, 5)?);
//! # Ok::<(), connectivity::InvalidArgument>(())
//! ```

pub mod network;

pub use network::{Element, InvalidArgument, Network};
