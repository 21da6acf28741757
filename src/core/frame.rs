use super::scene::SceneId;
use super::ticker::Millis;

/// Per-tick view handed to every scene element
///
/// Carries the animator's surface plus read-only timing for the scene
/// being rendered. Elapsed time is the value *before* this tick advances it.
pub struct Frame<'a, S> {
    pub(crate) surface: &'a mut S,
    pub(crate) scene_id: SceneId,
    pub(crate) scene_name: &'a str,
    pub(crate) time_elapsed: Millis,
    pub(crate) duration: Millis,
    pub(crate) tick_period: Millis,
    pub(crate) pass: u64,
}

impl<'a, S> Frame<'a, S> {
    pub fn surface(&self) -> &S {
        &*self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut *self.surface
    }

    pub fn scene_id(&self) -> SceneId {
        self.scene_id
    }

    pub fn scene_name(&self) -> &str {
        self.scene_name
    }

    pub fn time_elapsed(&self) -> Millis {
        self.time_elapsed
    }

    pub fn duration(&self) -> Millis {
        self.duration
    }

    pub fn tick_period(&self) -> Millis {
        self.tick_period
    }

    /// Number of full scene-list passes completed before this frame
    pub fn pass(&self) -> u64 {
        self.pass
    }

    /// Scene progress [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration == 0 {
            return 1.0;
        }
        (self.time_elapsed as f32 / self.duration as f32).min(1.0)
    }

    /// True on the first rendered tick of a traversal
    pub fn is_first_frame(&self) -> bool {
        self.time_elapsed == 0
    }
}
