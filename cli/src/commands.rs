use std::io::Write;

use combat_logout_core::{
    GameSignal, TimeFormat, TimerConfig, TimerConfigExt, TimerSnapshot, TimerPhase,
};

use crate::CliContext;
use crate::clock;

type CommandResult = Result<(), String>;

async fn send(ctx: &CliContext, signal: GameSignal) -> CommandResult {
    ctx.timer.send(signal).await.map_err(|e| e.to_string())
}

async fn snapshot(ctx: &CliContext) -> Result<TimerSnapshot, String> {
    ctx.timer.snapshot().await.map_err(|e| e.to_string())
}

/// Apply a settings edit and push the result to the timer.
async fn update_config(ctx: &CliContext, edit: impl FnOnce(&mut TimerConfig)) -> CommandResult {
    let mut config = snapshot(ctx).await?.config;
    edit(&mut config);
    config.validate().map_err(|e| e.to_string())?;
    send(ctx, GameSignal::ConfigChanged(config)).await?;
    show_status(ctx).await
}

pub async fn hit(ctx: &CliContext, amount: i32, local: bool) -> CommandResult {
    send(
        ctx,
        GameSignal::DamageApplied {
            target_is_local: local,
            amount,
        },
    )
    .await?;
    show_status(ctx).await
}

pub async fn tick(ctx: &CliContext, count: u32) -> CommandResult {
    for _ in 0..count {
        send(ctx, GameSignal::Tick).await?;
    }
    show_status(ctx).await
}

pub async fn set_area(ctx: &CliContext, dangerous: bool) -> CommandResult {
    send(ctx, GameSignal::AreaChanged { in_dangerous_area: dangerous }).await?;
    show_status(ctx).await
}

pub async fn set_world(ctx: &CliContext, dangerous: bool) -> CommandResult {
    send(ctx, GameSignal::WorldChanged { in_dangerous_world_type: dangerous }).await?;
    show_status(ctx).await
}

pub async fn set_restricted(ctx: &CliContext, restricted: bool) -> CommandResult {
    update_config(ctx, |c| c.restrict_to_dangerous_context = restricted).await
}

pub async fn set_format(ctx: &CliContext, format: TimeFormat) -> CommandResult {
    update_config(ctx, |c| c.time_format = format).await
}

pub async fn set_grace(ctx: &CliContext, secs: u32) -> CommandResult {
    update_config(ctx, |c| c.grace_period_secs = secs).await
}

pub async fn set_sound(ctx: &CliContext, enabled: bool) -> CommandResult {
    update_config(ctx, |c| c.sound_alert = enabled).await
}

pub async fn set_visibility(
    ctx: &CliContext,
    overlay: Option<bool>,
    head_bar: Option<bool>,
) -> CommandResult {
    update_config(ctx, |c| {
        if let Some(show) = overlay {
            c.show_overlay = show;
        }
        if let Some(show) = head_bar {
            c.show_head_bar = show;
        }
    })
    .await
}

pub async fn show_status(ctx: &CliContext) -> CommandResult {
    let snapshot = snapshot(ctx).await?;
    println!("{}", render_status(&snapshot));
    Ok(())
}

pub async fn show_config(ctx: &CliContext) -> CommandResult {
    let config = snapshot(ctx).await?.config;
    let text = config.to_toml().map_err(|e| e.to_string())?;
    println!("{}", text.trim_end());
    Ok(())
}

pub async fn save_config(ctx: &CliContext) -> CommandResult {
    let config = snapshot(ctx).await?.config;
    config.save().map_err(|e| e.to_string())?;
    println!("Configuration saved");
    Ok(())
}

pub async fn start_clock(ctx: &CliContext) -> CommandResult {
    let mut tasks = ctx.tasks.lock().await;
    if tasks.clock.is_some() {
        return Err("clock already running".to_string());
    }
    tasks.clock = Some(clock::start(ctx.timer.sender()));
    println!("Clock started");
    Ok(())
}

pub async fn stop_clock(ctx: &CliContext) -> CommandResult {
    if ctx.tasks.lock().await.stop_clock() {
        println!("Clock stopped");
        Ok(())
    } else {
        Err("clock is not running".to_string())
    }
}

pub fn exit() -> CommandResult {
    write!(std::io::stdout(), "quitting...").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())
}

/// Text rendering of what the host overlay would draw.
pub fn render_status(snapshot: &TimerSnapshot) -> String {
    let state = snapshot.state;
    let phase = match state.phase() {
        TimerPhase::Idle => "idle",
        TimerPhase::Counting => "counting",
        TimerPhase::Grace => "grace",
    };

    let mut out = format!(
        "[{}] {} logout={} grace={}",
        if snapshot.active { "active" } else { "inactive" },
        phase,
        state.logout_ticks,
        state.grace_ticks,
    );

    if let Some(panel) = &snapshot.panel {
        let [r, g, b, _] = panel.text_color;
        out.push_str(&format!(
            "\n  {} {}  (#{:02x}{:02x}{:02x})",
            panel.label, panel.text, r, g, b
        ));
    }

    if let Some(bar) = &snapshot.head_bar {
        let filled = bar.fill_width as usize * 20 / bar.width.max(1) as usize;
        out.push_str(&format!(
            "\n  [{}{}] {}",
            "#".repeat(filled),
            "-".repeat(20 - filled),
            bar.text
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_logout_core::LogoutTimer;

    fn counting_snapshot(ticks: u32) -> TimerSnapshot {
        let mut timer = LogoutTimer::silent(TimerConfig {
            restrict_to_dangerous_context: false,
            ..TimerConfig::default()
        });
        timer.start_up();
        timer.on_damage_to_local_actor();
        for _ in 0..16 - ticks {
            timer.on_tick();
        }
        timer.snapshot()
    }

    #[test]
    fn status_shows_panel_and_bar() {
        let text = render_status(&counting_snapshot(8));
        assert!(text.starts_with("[active] counting logout=8 grace=0"));
        assert!(text.contains("Logout: 4.8s"));
        assert!(text.contains("[##########----------] 4.8 s"));
    }

    #[test]
    fn idle_status_is_one_line() {
        let timer = LogoutTimer::silent(TimerConfig::default());
        let text = render_status(&timer.snapshot());
        assert_eq!(text, "[inactive] idle logout=0 grace=0");
    }
}
