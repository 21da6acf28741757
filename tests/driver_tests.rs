use scene_animator::canvas::Rgba;
use scene_animator::config::AnimatorConfig;
use scene_animator::driver::{run, RealtimeSource, RunReport, SimulatedSource};
use scene_animator::{Animator, AnimatorError, PlayOptions, PlaybackState, Scene};

fn counting_scene(duration: u64) -> Scene<u32> {
    let mut scene: Scene<u32> = Scene::new(duration);
    scene.add_element(|frame| {
        *frame.surface_mut() += 1;
        Ok(())
    });
    scene
}

#[test]
fn test_simulated_run_to_completion() {
    let mut animator = Animator::with_scenes(0u32, [counting_scene(100), counting_scene(50)]);
    animator.play(PlayOptions::default()).unwrap();

    let mut source = SimulatedSource::new(animator.tick_period());
    let report = run(&mut animator, &mut source, None).unwrap();

    assert_eq!(
        report,
        RunReport {
            ticks: 7,
            scenes_completed: 2,
            passes_completed: 1,
            finished: true,
        }
    );
    assert_eq!(*animator.surface(), 6);
    assert_eq!(animator.state(), PlaybackState::Idle);
}

#[test]
fn test_run_respects_tick_budget_when_looping() {
    let mut animator = Animator::with_scenes(0u32, [counting_scene(50)]);
    animator.play_looping(PlayOptions::default()).unwrap();

    let mut source = SimulatedSource::new(25);
    let report = run(&mut animator, &mut source, Some(9)).unwrap();

    assert_eq!(report.ticks, 9);
    assert_eq!(report.scenes_completed, 4);
    assert_eq!(report.passes_completed, 4);
    assert!(!report.finished);
    assert!(animator.is_playing());
}

#[test]
fn test_coarse_source_runs_multiple_ticks_per_step() {
    let mut animator = Animator::with_scenes(0u32, [counting_scene(200)]);
    animator.play(PlayOptions::default()).unwrap();

    // one step covers four periods
    let mut source = SimulatedSource::new(100);
    let report = run(&mut animator, &mut source, None).unwrap();

    assert_eq!(report.ticks, 9);
    assert_eq!(*animator.surface(), 8);
}

#[test]
fn test_run_on_idle_animator_is_empty() {
    let mut animator = Animator::with_scenes(0u32, [counting_scene(50)]);

    let report = run(&mut animator, &mut SimulatedSource::new(25), None).unwrap();
    assert_eq!(report, RunReport::default());
}

#[test]
fn test_run_surfaces_callback_failure() {
    let mut scene: Scene<u32> = Scene::new(100);
    scene.add_element(|frame| {
        if frame.time_elapsed() >= 50 {
            anyhow::bail!("out of ink");
        }
        Ok(())
    });

    let mut animator = Animator::with_scenes(0u32, [scene]);
    animator.play(PlayOptions::default()).unwrap();

    let err = run(&mut animator, &mut SimulatedSource::new(25), None).unwrap_err();
    assert!(matches!(err, AnimatorError::Callback(_)));
    assert!(animator.is_playing());
}

#[test]
fn test_realtime_run_short_reel() {
    let mut animator = Animator::with_scenes(0u32, [counting_scene(10)])
        .with_tick_period(5)
        .unwrap();
    animator.play(PlayOptions::default()).unwrap();

    let mut source = RealtimeSource::new(5);
    let report = run(&mut animator, &mut source, Some(50)).unwrap();

    assert!(report.finished);
    assert_eq!(report.scenes_completed, 1);
    assert_eq!(*animator.surface(), 2);
}

#[test]
fn test_default_reel_draws_on_canvas() {
    let config = AnimatorConfig::default();
    let mut animator = config.build().unwrap();
    animator.play(config.play_options()).unwrap();

    let report = run(&mut animator, &mut SimulatedSource::new(25), None).unwrap();

    // 500 + 400 + 300 ms at 25ms per tick, plus the final reset tick
    assert_eq!(report.ticks, 49);
    assert_eq!(report.scenes_completed, 3);
    assert!(report.finished);

    let canvas = animator.surface();
    assert!(canvas.coverage() > 0);
    assert!(canvas.pixels().iter().any(|p| *p != Rgba::BLACK));
}

#[test]
fn test_looping_reel_from_json() {
    let json = r#"{
        "tick_period_ms": 10,
        "loop": true,
        "width": 16,
        "height": 8,
        "scenes": [
            { "name": "a", "duration_ms": 20, "pattern": "pulse" },
            { "name": "b", "duration_ms": 30, "pattern": "sweep" }
        ]
    }"#;
    let config = AnimatorConfig::from_json(json).unwrap();
    let mut animator = config.build().unwrap();
    animator.play(config.play_options()).unwrap();

    let report = run(&mut animator, &mut SimulatedSource::new(10), Some(25)).unwrap();

    assert_eq!(report.passes_completed, 5);
    assert_eq!(animator.surface().dimensions(), (16, 8));
    assert!(animator.is_looping());
}
