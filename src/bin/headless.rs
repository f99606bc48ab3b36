use bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*};
use std::{env, path::PathBuf, time::Duration};
use tiny_skia::{IntSize, Pixmap};

use vorsim::{rendering::FrameRenderer, LatestFrame, SimConfig, SimulationSession, VorSimulatorPlugin};

#[derive(Resource)]
struct FrameBudget {
    remaining: u32,
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    let mission_id = args.next().unwrap_or_default();
    let frames: u32 = match args.next() {
        Some(frames) => frames.parse()?,
        None => 600,
    };
    let output = PathBuf::from(args.next().unwrap_or_else(|| "frame.png".to_string()));
    let config = match args.next() {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::default(),
    };

    App::new()
        .add_plugins(
            MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(
                1.0 / 60.0,
            ))),
        )
        .add_plugins(LogPlugin::default())
        .add_plugins(VorSimulatorPlugin::new(config, mission_id))
        .insert_resource(FrameBudget {
            remaining: frames,
            output,
        })
        .add_systems(Startup, start_session)
        .add_systems(Last, count_frames)
        .run();

    Ok(())
}

// Mission selection leaves the session paused for the resume delay, a
// headless run starts flying straight away.
fn start_session(mut session: ResMut<SimulationSession>) {
    session.resume();
}

fn count_frames(
    mut budget: ResMut<FrameBudget>,
    latest_frame: Res<LatestFrame>,
    session: Res<SimulationSession>,
    renderer: Res<FrameRenderer>,
    mut exit: EventWriter<AppExit>,
) {
    budget.remaining = budget.remaining.saturating_sub(1);
    if budget.remaining > 0 && !session.is_completed() && !session.is_crashed() {
        return;
    }

    let aircraft = session.aircraft();
    info!(
        "Finished after {} ticks: phase {}, position ({:.0}, {:.0}), DME {:.1}",
        session.ticks(),
        session.phase(),
        aircraft.position.x,
        aircraft.position.y,
        session.readout().dme
    );
    if let Some(result) = session.landing_result() {
        info!("Landing result: {:?}", result);
    }

    let saved = latest_frame
        .is_ready()
        .then(|| IntSize::from_wh(latest_frame.width, latest_frame.height))
        .flatten()
        .and_then(|size| Pixmap::from_vec(latest_frame.data.clone(), size))
        .or_else(|| renderer.render(&session).ok());

    match saved.map(|pixmap| pixmap.save_png(&budget.output)) {
        Some(Ok(())) => info!("Saved {}", budget.output.display()),
        Some(Err(e)) => error!("Failed to save {}: {}", budget.output.display(), e),
        None => error!("No frame to save"),
    }
    exit.send(AppExit::Success);
}
