//! Feed-forward neural networks whose weights are searched by the
//! randomized trainers.
//!
//! A network is a fixed shape plus an activation; its weights are a
//! [`Candidate`](crate::candidate::Candidate) of length
//! [`weight_count`](FeedForwardNetwork::weight_count). [`NetworkError`]
//! scores a weight vector by its squared error over a [`DataSet`], so any
//! trainer can fit the network:
//!
//! ```
//! use u_randopt::dist::ContinuousUniform;
//! use u_randopt::nn::{Activation, DataSet, Example, FeedForwardNetwork, NetworkError};
//! use u_randopt::operators::ContinuousAddOne;
//! use u_randopt::problem::Problem;
//! use u_randopt::rhc::{RandomizedHillClimbing, RhcConfig};
//! use u_randopt::trainer::Trainer;
//!
//! let data = DataSet::new(vec![
//!     Example::new(vec![0.0], vec![0.0]),
//!     Example::new(vec![1.0], vec![1.0]),
//! ])?;
//! let network = FeedForwardNetwork::new(vec![1, 2, 1], Activation::Tanh)?;
//! let weights = ContinuousUniform::new(network.weight_count(), -0.5, 0.5)?;
//! let problem = Problem::new(NetworkError::new(network, data)?, weights)
//!     .with_neighbor(ContinuousAddOne::new(0.5));
//!
//! let mut rhc = RandomizedHillClimbing::new(problem, &RhcConfig::default().with_seed(1))?;
//! let before = rhc.optimal().fitness;
//! for _ in 0..200 {
//!     rhc.train()?;
//! }
//! assert!(rhc.optimal().fitness <= before);
//! # Ok::<(), u_randopt::OptError>(())
//! ```

mod dataset;
mod evaluation;
mod network;

pub use dataset::{DataSet, Example};
pub use evaluation::{accuracy, NetworkError};
pub use network::{Activation, FeedForwardNetwork};
