use alloy_primitives::{Address, address};

/// Default reference token the routing sweep resolves toward.
pub const WETH: Address = address!("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");

/// Default minimum reserve required on either side of a pair before the
/// resolver will route through it.
pub const DEFAULT_MIN_RESERVE: u128 = 1_000;
