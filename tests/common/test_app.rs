use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy::time::TimeUpdateStrategy;
use spaceflight::{
    components::{PlayerController, ShipState},
    plugins::FlightPlugin,
    resources::{
        Diagnostics, FlightConfig, FlightFault, FlightInput, SessionState, TuningConstants,
    },
};
use std::time::Duration;

// Builder for creating a headless flight app
#[derive(Default)]
pub struct TestAppBuilder {
    config: FlightConfig,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: FlightConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_tuning(mut self, tuning: TuningConstants) -> Self {
        self.config.tuning = tuning;
        self
    }

    pub fn build(self) -> TestApp {
        let mut app = App::new();

        // Input resources without InputPlugin, so button edges stay set
        // until a test clears them
        app.add_plugins((MinimalPlugins, StatesPlugin))
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<ButtonInput<MouseButton>>()
            .add_event::<MouseMotion>()
            // Fixed steps only run when a test asks for them
            .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::ZERO))
            .add_plugins(
                FlightPlugin::with_config(self.config).expect("test config should be valid"),
            );

        // Run Startup so the player ship exists
        app.update();

        TestApp { app }
    }
}

/// Main test application wrapper
pub struct TestApp {
    pub app: App,
}

impl TestApp {
    /// Run the fixed-step schedule `ticks` times
    pub fn run_ticks(&mut self, ticks: usize) {
        for _ in 0..ticks {
            self.app.world_mut().run_schedule(FixedUpdate);
        }
    }

    /// Run one frame: input collection and state transitions, no ticks
    pub fn run_frame(&mut self) {
        self.app.update();
    }

    pub fn ship(&mut self) -> ShipState {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&ShipState, With<PlayerController>>();
        *query.single(world)
    }

    pub fn set_ship(&mut self, state: ShipState) {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&mut ShipState, With<PlayerController>>();
        *query.single_mut(world) = state;
    }

    pub fn set_controls_locked(&mut self, locked: bool) {
        let world = self.app.world_mut();
        let mut query = world.query::<&mut PlayerController>();
        query.single_mut(world).locked = locked;
    }

    pub fn input(&self) -> &FlightInput {
        self.app.world().resource::<FlightInput>()
    }

    pub fn input_mut(&mut self) -> Mut<FlightInput> {
        self.app.world_mut().resource_mut::<FlightInput>()
    }

    pub fn press(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release(key);
    }

    /// Press and release `key` around a single frame
    pub fn tap(&mut self, key: KeyCode) {
        self.press(key);
        self.run_frame();
        let mut keyboard = self.app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keyboard.release(key);
        keyboard.clear();
    }

    /// Click `button` within a single frame
    pub fn click(&mut self, button: MouseButton) {
        self.app
            .world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(button);
        self.run_frame();
        let mut mouse = self.app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
        mouse.release(button);
        mouse.clear();
    }

    pub fn diagnostics_enabled(&self) -> bool {
        self.app.world().resource::<Diagnostics>().enabled
    }

    pub fn move_mouse(&mut self, dx: f32, dy: f32) {
        self.app.world_mut().send_event(MouseMotion {
            delta: Vec2::new(dx, dy),
        });
    }

    /// Request a session transition and apply it
    pub fn request_session(&mut self, state: SessionState) {
        self.app
            .world_mut()
            .resource_mut::<NextState<SessionState>>()
            .set(state);
        self.app.update();
    }

    pub fn session(&self) -> SessionState {
        *self.app.world().resource::<State<SessionState>>().get()
    }

    pub fn fault_count(&self) -> usize {
        self.app.world().resource::<Events<FlightFault>>().len()
    }
}
