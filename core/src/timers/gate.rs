//! Activation gate
//!
//! When the timer is restricted to dangerous contexts it only listens for
//! ticks and hits while the player is in a dangerous world or area. The gate
//! tracks those inputs and reports edges so the owner can start or stop
//! feeding the state machine.

use tracing::debug;

/// Host-reported danger flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContextState {
    /// Player stands in a dangerous area (e.g. wilderness)
    pub in_dangerous_area: bool,
    /// Current world is a dangerous world type (e.g. PvP world)
    pub in_dangerous_world_type: bool,
}

impl ContextState {
    pub fn is_dangerous(&self) -> bool {
        self.in_dangerous_world_type || self.in_dangerous_area
    }
}

/// Edge reported when the gate changes state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateTransition {
    Activated,
    Deactivated,
}

/// Decides whether the timer should be consuming events.
///
/// Starts closed; call [`ActivationGate::evaluate`] once at start-up.
#[derive(Debug, Clone)]
pub struct ActivationGate {
    restrict_to_dangerous_context: bool,
    context: ContextState,
    active: bool,
}

impl ActivationGate {
    pub fn new(restrict_to_dangerous_context: bool) -> Self {
        Self {
            restrict_to_dangerous_context,
            context: ContextState::default(),
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_restricted(&self) -> bool {
        self.restrict_to_dangerous_context
    }

    pub fn context(&self) -> ContextState {
        self.context
    }

    /// Whether the current inputs call for the timer to be live.
    pub fn should_be_active(&self) -> bool {
        !self.restrict_to_dangerous_context || self.context.is_dangerous()
    }

    /// Recompute the gate. Returns an edge only if the state flipped.
    pub fn evaluate(&mut self) -> Option<GateTransition> {
        let should_be_active = self.should_be_active();

        match (self.active, should_be_active) {
            (false, true) => {
                let scope = if self.restrict_to_dangerous_context { "dangerous" } else { "all" };
                debug!(scope, "Activating combat timer");
                self.active = true;
                Some(GateTransition::Activated)
            }
            (true, false) => {
                debug!(context = ?self.context, "Deactivating combat timer, context is safe");
                self.active = false;
                Some(GateTransition::Deactivated)
            }
            _ => None,
        }
    }

    pub fn set_context(&mut self, context: ContextState) -> Option<GateTransition> {
        self.context = context;
        self.evaluate()
    }

    pub fn set_in_dangerous_area(&mut self, in_dangerous_area: bool) -> Option<GateTransition> {
        debug!(in_dangerous_area, "Dangerous area state changed");
        self.context.in_dangerous_area = in_dangerous_area;
        self.evaluate()
    }

    pub fn set_in_dangerous_world_type(
        &mut self,
        in_dangerous_world_type: bool,
    ) -> Option<GateTransition> {
        debug!(in_dangerous_world_type, "World changed");
        self.context.in_dangerous_world_type = in_dangerous_world_type;
        self.evaluate()
    }

    pub fn set_restricted(&mut self, restrict_to_dangerous_context: bool) -> Option<GateTransition> {
        self.restrict_to_dangerous_context = restrict_to_dangerous_context;
        self.evaluate()
    }

    /// Force the gate closed regardless of inputs (shut-down).
    pub fn close(&mut self) -> Option<GateTransition> {
        if self.active {
            self.active = false;
            Some(GateTransition::Deactivated)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrestricted_gate_opens_on_first_evaluation() {
        let mut gate = ActivationGate::new(false);
        assert!(!gate.is_active());
        assert_eq!(gate.evaluate(), Some(GateTransition::Activated));
        assert!(gate.is_active());
        assert_eq!(gate.evaluate(), None);
    }

    #[test]
    fn restricted_gate_follows_context() {
        let mut gate = ActivationGate::new(true);
        assert_eq!(gate.evaluate(), None);

        assert_eq!(gate.set_in_dangerous_area(true), Some(GateTransition::Activated));
        assert_eq!(
            gate.set_in_dangerous_world_type(true),
            None,
            "already active through the area flag"
        );
        assert_eq!(gate.set_in_dangerous_area(false), None);
        assert_eq!(
            gate.set_in_dangerous_world_type(false),
            Some(GateTransition::Deactivated)
        );
    }

    #[test]
    fn repeated_context_is_idempotent() {
        let mut gate = ActivationGate::new(true);
        let context = ContextState { in_dangerous_area: true, in_dangerous_world_type: false };

        assert_eq!(gate.set_context(context), Some(GateTransition::Activated));
        for _ in 0..5 {
            assert_eq!(gate.set_context(context), None);
        }
    }

    #[test]
    fn lifting_restriction_activates_in_safe_context() {
        let mut gate = ActivationGate::new(true);
        gate.evaluate();
        assert_eq!(gate.set_restricted(false), Some(GateTransition::Activated));
        assert_eq!(gate.set_restricted(true), Some(GateTransition::Deactivated));
    }

    #[test]
    fn close_only_reports_when_open() {
        let mut gate = ActivationGate::new(false);
        assert_eq!(gate.close(), None);
        gate.evaluate();
        assert_eq!(gate.close(), Some(GateTransition::Deactivated));
        assert!(!gate.is_active());
    }
}
