use std::fmt;

use super::frame::Frame;
use super::ticker::Millis;

/// Draw callback invoked once per tick while its scene is active
pub type Element<S> = Box<dyn FnMut(&mut Frame<'_, S>) -> anyhow::Result<()>>;

/// Start / complete event handler, receives the scene that fired it
pub type SceneHandler<S> = Box<dyn FnMut(&Scene<S>) -> anyhow::Result<()>>;

/// Box a closure as an [`Element`] (handy for `add_elements`)
pub fn element<S, F>(f: F) -> Element<S>
where
    F: FnMut(&mut Frame<'_, S>) -> anyhow::Result<()> + 'static,
{
    Box::new(f)
}

/// Stable handle to a scene registered with an animator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SceneId(pub(crate) usize);

impl SceneId {
    /// Position of the scene in its animator's scene list
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy)]
enum SceneEvent {
    Start,
    Complete,
}

/// Timed, ordered list of draw callbacks with start/complete hooks
///
/// A scene knows nothing about scheduling; the animator owning it drives
/// `time_elapsed` and fires the events.
pub struct Scene<S> {
    pub(crate) name: String,
    pub(crate) elements: Vec<Element<S>>,
    pub(crate) duration: Millis,
    pub(crate) time_elapsed: Millis,
    on_start: Vec<SceneHandler<S>>,
    on_complete: Vec<SceneHandler<S>>,
}

impl<S> Scene<S> {
    /// Create an unnamed scene lasting `duration` ms
    pub fn new(duration: Millis) -> Self {
        Self::named("scene", duration)
    }

    pub fn named(name: impl Into<String>, duration: Millis) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
            duration,
            time_elapsed: 0,
            on_start: Vec::new(),
            on_complete: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a draw callback; insertion order is invocation order
    pub fn add_element<F>(&mut self, element: F) -> &mut Self
    where
        F: FnMut(&mut Frame<'_, S>) -> anyhow::Result<()> + 'static,
    {
        self.elements.push(Box::new(element));
        self
    }

    pub fn add_elements<I>(&mut self, elements: I) -> &mut Self
    where
        I: IntoIterator<Item = Element<S>>,
    {
        self.elements.extend(elements);
        self
    }

    /// Drop every element, handlers and duration are kept
    pub fn clear_elements(&mut self) -> &mut Self {
        self.elements.clear();
        self
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Register a handler for the start of each traversal
    pub fn on_start<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(&Scene<S>) -> anyhow::Result<()> + 'static,
    {
        self.on_start.push(Box::new(handler));
        self
    }

    /// Register a handler for the end of each traversal
    pub fn on_complete<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(&Scene<S>) -> anyhow::Result<()> + 'static,
    {
        self.on_complete.push(Box::new(handler));
        self
    }

    /// Invoke start handlers in registration order, stopping at the first failure
    pub fn fire_start(&mut self) -> anyhow::Result<()> {
        self.fire(SceneEvent::Start)
    }

    /// Invoke complete handlers in registration order, stopping at the first failure
    pub fn fire_complete(&mut self) -> anyhow::Result<()> {
        self.fire(SceneEvent::Complete)
    }

    fn handlers(&mut self, event: SceneEvent) -> &mut Vec<SceneHandler<S>> {
        match event {
            SceneEvent::Start => &mut self.on_start,
            SceneEvent::Complete => &mut self.on_complete,
        }
    }

    fn fire(&mut self, event: SceneEvent) -> anyhow::Result<()> {
        // Handlers see the scene itself, so they are moved out while running
        let mut handlers = std::mem::take(self.handlers(event));
        let scene: &Scene<S> = self;
        let result = handlers.iter_mut().try_for_each(|handler| handler(scene));
        *self.handlers(event) = handlers;
        result
    }

    pub fn duration(&self) -> Millis {
        self.duration
    }

    pub fn set_duration(&mut self, duration: Millis) -> Millis {
        self.duration = duration;
        self.duration
    }

    pub fn time_elapsed(&self) -> Millis {
        self.time_elapsed
    }

    pub fn set_time_elapsed(&mut self, elapsed: Millis) -> Millis {
        self.time_elapsed = elapsed;
        self.time_elapsed
    }

    /// Traversal progress [0, 1]; a zero-length scene is always complete
    pub fn progress(&self) -> f32 {
        if self.duration == 0 {
            return 1.0;
        }
        (self.time_elapsed as f32 / self.duration as f32).min(1.0)
    }
}

impl<S> fmt::Debug for Scene<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("elements", &self.elements.len())
            .field("duration", &self.duration)
            .field("time_elapsed", &self.time_elapsed)
            .field("on_start", &self.on_start.len())
            .field("on_complete", &self.on_complete.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn scene_starts_empty() {
        let scene: Scene<()> = Scene::named("intro", 100);
        assert_eq!(scene.name(), "intro");
        assert_eq!(scene.duration(), 100);
        assert_eq!(scene.time_elapsed(), 0);
        assert_eq!(scene.element_count(), 0);
    }

    #[test]
    fn handlers_fire_in_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scene: Scene<()> = Scene::new(10);

        for tag in ["a", "b", "c"] {
            let log = Rc::clone(&log);
            scene.on_start(move |_| {
                log.borrow_mut().push(tag);
                Ok(())
            });
        }

        scene.fire_start().unwrap();
        scene.fire_start().unwrap();
        assert_eq!(*log.borrow(), vec!["a", "b", "c", "a", "b", "c"]);
    }

    #[test]
    fn handlers_receive_the_scene() {
        let seen = Rc::new(RefCell::new(None));
        let mut scene: Scene<()> = Scene::named("outro", 40);
        scene.set_time_elapsed(40);

        let sink = Rc::clone(&seen);
        scene.on_complete(move |scene| {
            *sink.borrow_mut() = Some((scene.name().to_string(), scene.time_elapsed()));
            Ok(())
        });

        scene.fire_complete().unwrap();
        assert_eq!(*seen.borrow(), Some(("outro".to_string(), 40)));
    }

    #[test]
    fn failing_handler_stops_the_rest_but_stays_registered() {
        let calls = Rc::new(RefCell::new(0));
        let mut scene: Scene<()> = Scene::new(10);

        scene.on_complete(|_| anyhow::bail!("boom"));
        let counter = Rc::clone(&calls);
        scene.on_complete(move |_| {
            *counter.borrow_mut() += 1;
            Ok(())
        });

        assert!(scene.fire_complete().is_err());
        assert_eq!(*calls.borrow(), 0);
        // Both handlers survive the failure
        assert!(scene.fire_complete().is_err());
        assert!(format!("{:?}", scene).contains("on_complete: 2"));
    }

    #[test]
    fn start_and_complete_registries_are_separate() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut scene: Scene<()> = Scene::new(10);

        let start_log = Rc::clone(&log);
        scene.on_start(move |_| {
            start_log.borrow_mut().push("start");
            Ok(())
        });
        let complete_log = Rc::clone(&log);
        scene.on_complete(move |_| {
            complete_log.borrow_mut().push("complete");
            Ok(())
        });

        scene.fire_complete().unwrap();
        assert_eq!(*log.borrow(), vec!["complete"]);
    }

    #[test]
    fn progress_clamps_and_handles_zero_duration() {
        let mut scene: Scene<()> = Scene::new(100);
        assert_eq!(scene.progress(), 0.0);
        scene.set_time_elapsed(50);
        assert_eq!(scene.progress(), 0.5);
        scene.set_time_elapsed(150);
        assert_eq!(scene.progress(), 1.0);

        let empty: Scene<()> = Scene::new(0);
        assert_eq!(empty.progress(), 1.0);
    }

    #[test]
    fn setters_return_new_value() {
        let mut scene: Scene<()> = Scene::new(10);
        assert_eq!(scene.set_duration(30), 30);
        assert_eq!(scene.set_time_elapsed(5), 5);
        assert_eq!(scene.duration(), 30);
        assert_eq!(scene.time_elapsed(), 5);
    }
}
