/// Rule constants shared by the discovery engine and movement validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    /// Chebyshev radius revealed around the player after a successful move.
    pub const DISCOVERY_RADIUS: i32 = 1;
    /// Upper bound on cells revealed by one move: a full (2r+1)² square.
    pub const MAX_REVEALED_PER_MOVE: usize = 9;

    // ===== wire defaults =====
    pub const DEFAULT_PLAYER_LEVEL: u32 = 1;
    pub const DEFAULT_TRAP_KIND: &'static str = "spike";
}
