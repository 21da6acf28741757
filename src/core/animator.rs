use std::collections::VecDeque;
use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::frame::Frame;
use super::scene::{Scene, SceneId};
use super::ticker::{Millis, Ticker, DEFAULT_TICK_PERIOD};
use crate::errors::{AnimatorError, Result};

/// Options accepted by [`Animator::play`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayOptions {
    /// Restart the scene list after the last scene, sticky until `reset`
    #[serde(rename = "loop")]
    pub looping: bool,
}

impl PlayOptions {
    pub fn looping() -> Self {
        Self { looping: true }
    }
}

/// Observable playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Never played, or reset
    Idle,
    /// Ticker armed, scenes advancing
    Playing,
    /// Ticker cancelled, position retained
    Paused,
    /// Non-looping playback ran out of scenes; the next tick resets
    Drained,
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlaybackState::Idle => "idle",
            PlaybackState::Playing => "playing",
            PlaybackState::Paused => "paused",
            PlaybackState::Drained => "drained",
        };
        f.write_str(name)
    }
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Animator was not playing, nothing happened
    Idle,
    /// Scene rendered and is still running
    Rendered(SceneId),
    /// Scene reached its duration and completed
    Completed(SceneId),
    /// Scene list exhausted without looping, animator reset
    Finished,
}

/// Play-state, created on the first `play` and dropped by `reset`
#[derive(Debug)]
struct Session {
    remaining: VecDeque<SceneId>,
    current: Option<SceneId>,
    looping: bool,
    ticker: Option<Ticker>,
    passes: u64,
}

impl Session {
    fn start(scene_count: usize) -> Self {
        let mut remaining: VecDeque<SceneId> = (0..scene_count).map(SceneId).collect();
        let current = remaining.pop_front();
        Self {
            remaining,
            current,
            looping: false,
            ticker: None,
            passes: 0,
        }
    }

    fn reload(&mut self, scene_count: usize) {
        self.remaining = (0..scene_count).map(SceneId).collect();
        self.current = self.remaining.pop_front();
    }
}

/// Sequences scenes against a single drawing surface
///
/// Driven by [`tick`](Animator::tick) directly or by feeding host time to
/// [`advance`](Animator::advance). Only one ticker can be armed at a time.
pub struct Animator<S> {
    surface: S,
    scenes: Vec<Scene<S>>,
    tick_period: Millis,
    strict: bool,
    session: Option<Session>,
}

impl<S> Animator<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            scenes: Vec::new(),
            tick_period: DEFAULT_TICK_PERIOD,
            strict: false,
            session: None,
        }
    }

    pub fn with_scenes(surface: S, scenes: impl IntoIterator<Item = Scene<S>>) -> Self {
        let mut animator = Self::new(surface);
        animator.scenes.extend(scenes);
        animator
    }

    /// Set the tick period in ms, zero is rejected
    pub fn with_tick_period(mut self, period: Millis) -> Result<Self> {
        if period == 0 {
            return Err(AnimatorError::Configuration(
                "tick period must be at least 1ms".into(),
            ));
        }
        self.tick_period = period;
        Ok(self)
    }

    /// Make double-play and pause-when-not-playing return [`AnimatorError::State`]
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Register a scene; it joins the queue on the next fresh start or loop
    pub fn add_scene(&mut self, scene: Scene<S>) -> SceneId {
        self.scenes.push(scene);
        SceneId(self.scenes.len() - 1)
    }

    pub fn scene(&self, id: SceneId) -> Result<&Scene<S>> {
        self.scenes.get(id.0).ok_or(AnimatorError::UnknownScene(id))
    }

    pub fn scene_mut(&mut self, id: SceneId) -> Result<&mut Scene<S>> {
        self.scenes.get_mut(id.0).ok_or(AnimatorError::UnknownScene(id))
    }

    pub fn scenes(&self) -> &[Scene<S>] {
        &self.scenes
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn tick_period(&self) -> Millis {
        self.tick_period
    }

    pub fn is_playing(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.ticker.is_some())
    }

    pub fn is_looping(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.looping)
    }

    pub fn current_scene(&self) -> Option<SceneId> {
        self.session.as_ref().and_then(|s| s.current)
    }

    /// Scenes still queued behind the current one
    pub fn remaining_scenes(&self) -> impl Iterator<Item = SceneId> + '_ {
        self.session.iter().flat_map(|s| s.remaining.iter().copied())
    }

    /// Full passes over the scene list since the last fresh start
    pub fn passes_completed(&self) -> u64 {
        self.session.as_ref().map_or(0, |s| s.passes)
    }

    pub fn state(&self) -> PlaybackState {
        match &self.session {
            None => PlaybackState::Idle,
            Some(s) if s.ticker.is_none() => PlaybackState::Paused,
            Some(s) if s.current.is_none() && !s.looping => PlaybackState::Drained,
            Some(_) => PlaybackState::Playing,
        }
    }

    /// Start or resume playback
    ///
    /// A paused animator resumes exactly where it stopped. `looping` only
    /// ever switches looping on; `reset` is the way to clear it.
    pub fn play(&mut self, options: PlayOptions) -> Result<()> {
        if self.is_playing() {
            return self.reject("play");
        }

        let fresh = self.session.is_none();
        let session = self
            .session
            .get_or_insert_with(|| Session::start(self.scenes.len()));
        session.looping |= options.looping;

        if fresh {
            if let Some(id) = session.current {
                self.scenes[id.0].time_elapsed = 0;
            }
        }

        debug_assert!(session.ticker.is_none(), "tick source armed twice");
        session.ticker = Some(Ticker::new(self.tick_period));

        log::debug!(
            "{} playback (loop={}, current={:?})",
            if fresh { "starting" } else { "resuming" },
            session.looping,
            session.current
        );
        Ok(())
    }

    /// `play` with looping forced on
    pub fn play_looping(&mut self, mut options: PlayOptions) -> Result<()> {
        options.looping = true;
        self.play(options)
    }

    /// Cancel the ticker, keeping the playback position
    pub fn pause(&mut self) -> Result<()> {
        if !self.is_playing() {
            return self.reject("pause");
        }
        if let Some(session) = self.session.as_mut() {
            session.ticker = None;
            log::debug!("paused at {:?}", session.current);
        }
        Ok(())
    }

    /// Cancel the ticker and drop all playback state
    pub fn reset(&mut self) {
        if let Some(session) = self.session.take() {
            if let Some(id) = session.current {
                self.scenes[id.0].time_elapsed = 0;
            }
            log::debug!("reset");
        }
    }

    /// Feed host time into the armed ticker, running every tick that falls due
    ///
    /// Returns the number of ticks run. Stops early if playback ends.
    pub fn advance(&mut self, delta: Duration) -> Result<u64> {
        let due = self.due_ticks(delta);
        let mut ran = 0;
        while ran < due && self.is_playing() {
            self.tick().inspect_err(|err| {
                log::warn!("tick {} of {} failed: {}", ran + 1, due, err);
            })?;
            ran += 1;
        }
        Ok(ran)
    }

    /// Accumulate host time without ticking, returns the ticks now due
    pub fn due_ticks(&mut self, delta: Duration) -> u64 {
        self.session
            .as_mut()
            .and_then(|s| s.ticker.as_mut())
            .map_or(0, |ticker| ticker.accumulate(delta))
    }

    /// Run one step of the state machine
    ///
    /// In order: pick up the current scene (reloading the list when looping),
    /// fire start on the first tick of a traversal, render and advance time
    /// while below duration, then complete and pop the next scene once the
    /// duration is reached. A zero-length scene starts and completes in the
    /// same tick without rendering.
    pub fn tick(&mut self) -> Result<TickOutcome> {
        if !self.is_playing() {
            return Ok(TickOutcome::Idle);
        }

        let Some(id) = self.current_or_reload() else {
            log::debug!("scene list drained");
            self.reset();
            return Ok(TickOutcome::Finished);
        };
        log::trace!("tick {} at {}ms", id, self.scenes[id.0].time_elapsed);

        let scene = &mut self.scenes[id.0];
        if scene.time_elapsed == 0 {
            log::debug!("scene {} '{}' started", id, scene.name);
            scene.fire_start()?;
        }

        if scene.time_elapsed < scene.duration {
            self.render(id)?;
            let scene = &mut self.scenes[id.0];
            scene.time_elapsed = scene.time_elapsed.saturating_add(self.tick_period);
        }

        let scene = &mut self.scenes[id.0];
        if scene.time_elapsed < scene.duration {
            return Ok(TickOutcome::Rendered(id));
        }

        log::debug!("scene {} '{}' completed", id, scene.name);
        scene.fire_complete()?;
        scene.time_elapsed = 0;

        if let Some(session) = self.session.as_mut() {
            session.current = session.remaining.pop_front();
            if session.current.is_none() {
                session.passes += 1;
            }
        }
        Ok(TickOutcome::Completed(id))
    }

    fn current_or_reload(&mut self) -> Option<SceneId> {
        let scene_count = self.scenes.len();
        let session = self.session.as_mut()?;

        if session.current.is_none() && session.looping {
            session.reload(scene_count);
            match session.current {
                Some(id) => {
                    self.scenes[id.0].time_elapsed = 0;
                    log::debug!("looping, pass {}", session.passes + 1);
                }
                None => log::warn!("looping animator has no scenes, stopping"),
            }
        }
        session.current
    }

    fn render(&mut self, id: SceneId) -> Result<()> {
        let pass = self.passes_completed();
        let scene = &mut self.scenes[id.0];
        let mut elements = std::mem::take(&mut scene.elements);

        let mut frame = Frame {
            surface: &mut self.surface,
            scene_id: id,
            scene_name: &scene.name,
            time_elapsed: scene.time_elapsed,
            duration: scene.duration,
            tick_period: self.tick_period,
            pass,
        };
        let result = elements.iter_mut().try_for_each(|element| element(&mut frame));

        scene.elements = elements;
        result.map_err(AnimatorError::from)
    }

    fn reject(&self, operation: &'static str) -> Result<()> {
        let state = self.state();
        if self.strict {
            return Err(AnimatorError::State { operation, state });
        }
        log::trace!("ignoring {} while {}", operation, state);
        Ok(())
    }
}

impl<S: fmt::Debug> fmt::Debug for Animator<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animator")
            .field("surface", &self.surface)
            .field("scenes", &self.scenes)
            .field("tick_period", &self.tick_period)
            .field("strict", &self.strict)
            .field("session", &self.session)
            .finish()
    }
}
