//! Logout timer service
//!
//! Glues the activation gate, the countdown machine, the user's settings and
//! the alert sink together. This is the type a host plugin owns: it receives
//! every notification and answers render requests.

use combat_logout_types::TimerConfig;
use tracing::{debug, info};

use crate::audio::{AlertSink, AudioEvent, NoAlerts};
use crate::display::{HeadBar, PanelLine};
use crate::signal_processor::{GameSignal, SignalHandler};
use crate::timers::{
    ActivationGate, CombatTimer, ContextState, DisplayState, GateTransition, TickOutcome,
};

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct TimerSnapshot {
    pub state: DisplayState,
    pub active: bool,
    pub context: ContextState,
    pub panel: Option<PanelLine>,
    pub head_bar: Option<HeadBar>,
    pub config: TimerConfig,
}

/// Combat logout timer with its activation rules and settings
#[derive(Debug)]
pub struct LogoutTimer<S = NoAlerts> {
    config: TimerConfig,
    gate: ActivationGate,
    timer: CombatTimer,
    alerts: S,
}

impl LogoutTimer<NoAlerts> {
    /// Timer without audio output
    pub fn silent(config: TimerConfig) -> Self {
        Self::new(config, NoAlerts)
    }
}

impl<S: AlertSink> LogoutTimer<S> {
    /// Create a stopped timer. Call [`LogoutTimer::start_up`] before feeding signals.
    pub fn new(config: TimerConfig, alerts: S) -> Self {
        Self {
            gate: ActivationGate::new(config.restrict_to_dangerous_context),
            timer: CombatTimer::new(),
            config,
            alerts,
        }
    }

    pub fn start_up(&mut self) {
        info!(
            restricted = self.config.restrict_to_dangerous_context,
            "Combat logout timer starting up"
        );
        let transition = self.gate.evaluate();
        self.apply_transition(transition);
    }

    pub fn shut_down(&mut self) {
        info!("Combat logout timer shutting down");
        self.gate.close();
        self.timer.reset();
    }

    pub fn is_active(&self) -> bool {
        self.gate.is_active()
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn context(&self) -> ContextState {
        self.gate.context()
    }

    pub fn alerts(&self) -> &S {
        &self.alerts
    }

    // ─── Host notifications ─────────────────────────────────────────────────

    /// The local player was hit.
    pub fn on_damage_to_local_actor(&mut self) {
        if !self.gate.is_active() {
            return;
        }
        debug!("Combat timer reset");
        self.timer.on_damage();
    }

    /// A hit landed on some actor; only hits on the local player count.
    pub fn on_damage_applied(&mut self, target_is_local: bool, amount: i32) {
        if !self.gate.is_active() {
            return;
        }
        debug!(target_is_local, amount, "Damage applied");
        if target_is_local {
            self.on_damage_to_local_actor();
        }
    }

    pub fn on_tick(&mut self) {
        if !self.gate.is_active() {
            return;
        }
        if self.timer.on_tick(self.config.grace_period_secs) == TickOutcome::SafeToLogout
            && self.config.sound_alert
        {
            self.alerts.alert(AudioEvent::SafeToLogout);
        }
    }

    pub fn on_context_changed(&mut self, in_dangerous_area: bool, in_dangerous_world_type: bool) {
        let transition = self.gate.set_context(ContextState {
            in_dangerous_area,
            in_dangerous_world_type,
        });
        self.apply_transition(transition);
    }

    pub fn on_area_changed(&mut self, in_dangerous_area: bool) {
        let transition = self.gate.set_in_dangerous_area(in_dangerous_area);
        self.apply_transition(transition);
    }

    pub fn on_world_changed(&mut self, in_dangerous_world_type: bool) {
        let transition = self.gate.set_in_dangerous_world_type(in_dangerous_world_type);
        self.apply_transition(transition);
    }

    pub fn on_activation_config_changed(&mut self, restrict_to_dangerous_context: bool) {
        self.config.restrict_to_dangerous_context = restrict_to_dangerous_context;
        let transition = self.gate.set_restricted(restrict_to_dangerous_context);
        self.apply_transition(transition);
    }

    /// Replace the settings. Display options take effect on the next render;
    /// the gate is only re-evaluated if the restriction flag changed.
    pub fn on_config_changed(&mut self, config: TimerConfig) {
        let old = std::mem::replace(&mut self.config, config);

        if old.show_overlay != self.config.show_overlay {
            debug!(show_overlay = self.config.show_overlay, "Overlay visibility changed");
        }
        if old.show_head_bar != self.config.show_head_bar {
            debug!(show_head_bar = self.config.show_head_bar, "Head bar visibility changed");
        }
        if old.restrict_to_dangerous_context != self.config.restrict_to_dangerous_context {
            let transition = self
                .gate
                .set_restricted(self.config.restrict_to_dangerous_context);
            self.apply_transition(transition);
        }
    }

    // ─── Render queries ─────────────────────────────────────────────────────

    pub fn display_state(&self) -> DisplayState {
        self.timer.snapshot()
    }

    pub fn panel(&self) -> Option<PanelLine> {
        PanelLine::build(self.display_state(), &self.config)
    }

    pub fn head_bar(&self) -> Option<HeadBar> {
        HeadBar::build(self.display_state(), &self.config)
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            state: self.display_state(),
            active: self.is_active(),
            context: self.context(),
            panel: self.panel(),
            head_bar: self.head_bar(),
            config: self.config.clone(),
        }
    }

    fn apply_transition(&mut self, transition: Option<GateTransition>) {
        if transition == Some(GateTransition::Deactivated) {
            self.timer.reset();
        }
    }
}

impl<S: AlertSink> SignalHandler for LogoutTimer<S> {
    fn handle_signal(&mut self, signal: &GameSignal) {
        match signal {
            GameSignal::Tick => self.on_tick(),
            GameSignal::DamageApplied { target_is_local, amount } => {
                self.on_damage_applied(*target_is_local, *amount)
            }
            GameSignal::AreaChanged { in_dangerous_area } => {
                self.on_area_changed(*in_dangerous_area)
            }
            GameSignal::WorldChanged { in_dangerous_world_type } => {
                self.on_world_changed(*in_dangerous_world_type)
            }
            GameSignal::ContextChanged {
                in_dangerous_area,
                in_dangerous_world_type,
            } => self.on_context_changed(*in_dangerous_area, *in_dangerous_world_type),
            GameSignal::ActivationConfigChanged { restrict_to_dangerous_context } => {
                self.on_activation_config_changed(*restrict_to_dangerous_context)
            }
            GameSignal::ConfigChanged(config) => self.on_config_changed(config.clone()),
        }
    }
}
