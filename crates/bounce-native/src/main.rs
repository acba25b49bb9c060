use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use beat_bounce::{CueEvent, Stage};
use bounce_core::{BeatPattern, BounceSettings, SpawnLayout};
use rand::prelude::*;

const DEMO_SEED: u64 = 42;
const DEMO_BALLS: usize = 5;
const DEMO_PATTERN_DENSITY: f64 = 0.4;
const RUN_FOR: Duration = Duration::from_secs(8);
const FRAME: Duration = Duration::from_millis(16);

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let settings = BounceSettings::standard().with_layout(SpawnLayout::default_circle());
    let mut stage = Stage::new(settings).context("invalid stage settings")?;

    let mut rng = StdRng::seed_from_u64(DEMO_SEED);
    spawn_demo_balls(&mut stage, &mut rng, DEMO_BALLS)?;
    log::info!("[native] {}", stage.status());

    stage.play(true);
    run(&mut stage, RUN_FOR);

    stage.play(false);
    stage.clear();
    log::info!("[native] done, {}", stage.status());
    Ok(())
}

/// Create balls through the draft flow, the same way a menu would.
fn spawn_demo_balls(stage: &mut Stage, rng: &mut StdRng, count: usize) -> anyhow::Result<()> {
    let clip_count = stage.settings().clips.len();
    let pitch_range = stage.settings().mapping.pitch;
    for _ in 0..count {
        if !stage.can_spawn() {
            log::warn!("[native] ball limit reached, spawned fewer than {count}");
            break;
        }
        let mut draft = stage.open_draft()?;
        draft.clip = rng.gen_range(0..clip_count);
        draft.pitch = rng.gen_range(pitch_range.min..=pitch_range.max);

        let beats = stage.clock().beats_per_measure();
        let pattern = BeatPattern::random(beats, DEMO_PATTERN_DENSITY, rng);
        for (beat, on) in pattern.as_slice().iter().enumerate() {
            draft.set_beat(beat, *on)?;
        }
        if draft.pattern().active_count() == 0 {
            draft.set_beat(0, true)?;
        }

        let preview = draft.preview(stage.settings())?;
        log::debug!("[native] preview {preview:?}");
        let handle = stage.commit(&draft)?;
        log::info!(
            "[native] {handle}: clip={} pitch={:.2} pattern={:?}",
            stage.settings().clips[draft.clip].name,
            draft.pitch,
            draft.pattern().as_slice()
        );
    }
    Ok(())
}

/// Drive the stage in real time, one tick per frame.
fn run(stage: &mut Stage, duration: Duration) {
    let start = Instant::now();
    let mut last = start;
    let mut cues: Vec<CueEvent> = Vec::new();
    while start.elapsed() < duration {
        thread::sleep(FRAME);
        let now = Instant::now();
        let dt = now - last;
        last = now;

        cues.clear();
        let crossed = stage.tick(dt, &mut cues);
        if crossed > 0 {
            log::info!("[beat] {}", stage.indicators());
        }
        for cue in &cues {
            let name = stage
                .settings()
                .clips
                .get(cue.clip)
                .map_or("?", |c| c.name.as_str());
            log::info!(
                "[cue] {} {name} pitch={:.2} beat={}",
                cue.ball,
                cue.pitch,
                cue.beat_index + 1
            );
        }
        if log::log_enabled!(log::Level::Debug) {
            for (handle, ball) in stage.balls().iter() {
                log::debug!("[pos] {handle} y={:.2}", ball.position.y);
            }
        }
    }
}
