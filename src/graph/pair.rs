use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use strum_macros::{Display, EnumIter, EnumString, VariantNames};

/// Identity of a pair is the pool's own on-chain address.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairId(pub Address);

impl PairId {
    pub fn address(&self) -> Address {
        self.0
    }

    // For testing purposes
    pub fn random() -> PairId {
        PairId(Address::random())
    }

    // For testing purposes
    pub fn repeat_byte(byte: u8) -> PairId {
        PairId(Address::repeat_byte(byte))
    }
}

impl From<Address> for PairId {
    fn from(address: Address) -> Self {
        PairId(address)
    }
}

impl Display for PairId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#}", self.0)
    }
}

impl Debug for PairId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "PairId({:#})", self.0)
    }
}

/// Pool classification carried through from the creation event. Routing does
/// not branch on it.
#[derive(Copy, Clone, Debug, Display, PartialEq, Hash, Eq, EnumString, VariantNames, Default, Deserialize, Serialize, EnumIter)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PairKind {
    #[default]
    Volatile,
    Stable,
}

impl From<bool> for PairKind {
    fn from(stable: bool) -> Self {
        if stable { PairKind::Stable } else { PairKind::Volatile }
    }
}

/// A liquidity pair edge between two tokens.
///
/// Endpoint order is taken verbatim from the creation event and never
/// canonicalized. Two pools over the same tokens in opposite order are
/// distinct edges with independent reserves.
#[derive(Clone, Serialize, Deserialize)]
pub struct Pair {
    pub id: PairId,
    pub token0: Address,
    pub token1: Address,
    pub reserve0: U256,
    pub reserve1: U256,
    pub kind: PairKind,
}

impl Pair {
    pub fn new(id: PairId, token0: Address, token1: Address, reserve0: U256, reserve1: U256, kind: PairKind) -> Self {
        Self { id, token0, token1, reserve0, reserve1, kind }
    }

    pub fn tokens(&self) -> [Address; 2] {
        [self.token0, self.token1]
    }

    /// The endpoint that is not `token`. Callers must only pass one of the
    /// pair's own endpoints.
    pub fn other_token(&self, token: Address) -> Address {
        if token == self.token0 { self.token1 } else { self.token0 }
    }
}

impl Display for Pair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:#}/{:#})@{}", self.kind, self.token0, self.token1, self.id)
    }
}

impl Debug for Pair {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:#}/{:#})@{}", self.kind, self.token0, self.token1, self.id)
    }
}

impl Hash for Pair {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl PartialEq for Pair {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Pair {}
