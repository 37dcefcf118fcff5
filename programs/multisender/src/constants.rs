//! Program-wide constants.

/// Seed of the singleton sender config PDA (owner, governor, pause flag).
pub const CONFIG_SEED: &[u8] = b"sender_config";

/// Seed prefix of the per-mint vault used by indirect asset distributions.
pub const VAULT_SEED: &[u8] = b"vault";
