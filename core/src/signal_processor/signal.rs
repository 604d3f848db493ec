use combat_logout_types::TimerConfig;

/// Notifications delivered by the host game client.
#[derive(Debug, Clone, PartialEq)]
pub enum GameSignal {
    /// One game tick (0.6 s) elapsed
    Tick,

    /// A hit landed on some actor. Only hits on the local player matter;
    /// `amount` is informational.
    DamageApplied { target_is_local: bool, amount: i32 },

    /// Player entered or left a dangerous area
    AreaChanged { in_dangerous_area: bool },

    /// Player hopped to a world of a different type
    WorldChanged { in_dangerous_world_type: bool },

    /// Both context flags at once
    ContextChanged {
        in_dangerous_area: bool,
        in_dangerous_world_type: bool,
    },

    ActivationConfigChanged { restrict_to_dangerous_context: bool },

    /// Full settings replacement
    ConfigChanged(TimerConfig),
}

impl GameSignal {
    /// Hit on the local player.
    pub fn local_hit() -> Self {
        Self::DamageApplied {
            target_is_local: true,
            amount: 0,
        }
    }
}
