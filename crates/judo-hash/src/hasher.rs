//! Content hashes and random identifiers.

use crate::config::HasherConfig;
use crate::element::HashElement;
use crate::state::{State, StateValue};
use ndarray::{Array1, ArrayBase, Data, Dimension};
use std::sync::OnceLock;
use tracing::{debug, warn};
use uuid::Uuid;
use xxhash_rust::xxh3::xxh3_128_with_seed;

/// Type tags for non-tensor state values.
const TAG_FLOAT: u8 = 0;
const TAG_INT: u8 = 1;
const TAG_BOOL: u8 = 2;
const TAG_TEXT: u8 = 3;

/// Produces 128-bit identifiers for tensors and states.
///
/// With `true_hash` enabled, equal content gives equal ids and the digest
/// is stable across runs for a given seed. With it disabled every call
/// returns a fresh random id.
///
/// # Examples
///
/// ```
/// use judo_hash::{Hasher, HasherConfig};
/// use ndarray::array;
///
/// let hasher = Hasher::default();
/// let a = hasher.hash_tensor(&array![1.0, 2.0]);
/// assert_eq!(a, hasher.hash_tensor(&array![1.0, 2.0]));
///
/// let ids = Hasher::new(HasherConfig { true_hash: false, seed: 0 });
/// assert_ne!(ids.hash_tensor(&array![1.0]), ids.hash_tensor(&array![1.0]));
/// ```
#[derive(Clone, Debug, Default)]
pub struct Hasher {
    config: HasherConfig,
}

impl Hasher {
    /// Create a hasher with the given configuration.
    pub fn new(config: HasherConfig) -> Self {
        debug!(true_hash = config.true_hash, seed = config.seed, "hasher configured");
        Self { config }
    }

    /// Whether content hashing is enabled.
    pub fn uses_true_hash(&self) -> bool {
        self.config.true_hash
    }

    /// Seed mixed into content digests.
    pub fn seed(&self) -> u64 {
        self.config.seed
    }

    /// Digest the elements of `x` in row-major order.
    ///
    /// Only element bytes are hashed: arrays with the same elements in
    /// the same order but different shapes hash equal.
    pub fn true_hash_tensor<A, S, D>(&self, x: &ArrayBase<S, D>) -> u128
    where
        A: HashElement,
        S: Data<Elem = A>,
        D: Dimension,
    {
        let mut buf = Vec::with_capacity(x.len() * A::WIDTH);
        for &v in x {
            v.write_le(&mut buf);
        }
        xxh3_128_with_seed(&buf, self.config.seed)
    }

    /// A fresh random identifier.
    pub fn get_one_id() -> u128 {
        Uuid::new_v4().as_u128()
    }

    /// Content digest of `x`, or a fresh id if content hashing is off.
    pub fn hash_tensor<A, S, D>(&self, x: &ArrayBase<S, D>) -> u128
    where
        A: HashElement,
        S: Data<Elem = A>,
        D: Dimension,
    {
        if self.config.true_hash {
            self.true_hash_tensor(x)
        } else {
            Self::get_one_id()
        }
    }

    /// One [`hash_tensor`](Self::hash_tensor) result per item.
    pub fn hash_iterable<'a, I, A, S, D>(&self, xs: I) -> Array1<u128>
    where
        I: IntoIterator<Item = &'a ArrayBase<S, D>>,
        A: HashElement + 'a,
        S: Data<Elem = A> + 'a,
        D: Dimension + 'a,
    {
        xs.into_iter().map(|x| self.hash_tensor(x)).collect()
    }

    /// Digest of every entry of `state`, in order, or a fresh id if
    /// content hashing is off.
    ///
    /// Tensors are digested by content; other values by a tagged byte
    /// encoding. Entry names do not contribute, only values and order.
    pub fn hash_state(&self, state: &State) -> u128 {
        if !self.config.true_hash {
            return Self::get_one_id();
        }
        let mut buf = Vec::with_capacity(state.len() * 16);
        for (_, value) in state.iter() {
            let h = match value {
                StateValue::Tensor(x) => self.hash_tensor(x),
                other => self.hash_value(other),
            };
            buf.extend_from_slice(&h.to_le_bytes());
        }
        xxh3_128_with_seed(&buf, self.config.seed)
    }

    fn hash_value(&self, value: &StateValue) -> u128 {
        let mut buf = Vec::with_capacity(16);
        match value {
            StateValue::Float(v) => {
                buf.push(TAG_FLOAT);
                v.write_le(&mut buf);
            }
            StateValue::Int(v) => {
                buf.push(TAG_INT);
                v.write_le(&mut buf);
            }
            StateValue::Bool(v) => {
                buf.push(TAG_BOOL);
                v.write_le(&mut buf);
            }
            StateValue::Text(s) => {
                buf.push(TAG_TEXT);
                buf.extend_from_slice(s.as_bytes());
            }
            StateValue::Tensor(x) => return self.true_hash_tensor(x),
        }
        xxh3_128_with_seed(&buf, self.config.seed)
    }
}

static DEFAULT_HASHER: OnceLock<Hasher> = OnceLock::new();

/// The process-wide hasher, configured from the environment on first use.
///
/// Malformed environment settings are logged and replaced by defaults.
pub fn default_hasher() -> &'static Hasher {
    DEFAULT_HASHER.get_or_init(|| match HasherConfig::from_env() {
        Ok(config) => Hasher::new(config),
        Err(e) => {
            warn!(error = %e, "invalid hasher configuration, using defaults");
            Hasher::default()
        }
    })
}
