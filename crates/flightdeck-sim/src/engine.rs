//! Flight engine: the per-frame update loop.
//!
//! `FlightEngine` owns the flight and systems state, applies queued control
//! inputs at the start of each frame, runs the systems, and writes the
//! aircraft's `Transform` in the host's scene world. It never reads a clock,
//! so the same inputs and frame steps always produce the same snapshots.

use std::collections::VecDeque;

use glam::DVec3;
use hecs::{Entity, World};

use flightdeck_core::aircraft::AircraftSpec;
use flightdeck_core::commands::ControlInput;
use flightdeck_core::components::{PlayerAircraft, Transform};
use flightdeck_core::enums::{ControlKey, FlightMode};
use flightdeck_core::events::FlightEvent;
use flightdeck_core::flight::{FlightState, HeldControls, SystemsState};
use flightdeck_core::state::FlightSnapshot;
use flightdeck_core::types::SimTime;

use crate::clock::FrameStep;
use crate::config::SimConfig;
use crate::error::SimError;
use crate::systems;

/// The flight engine. One per simulated aircraft.
pub struct FlightEngine {
    config: SimConfig,
    spec: &'static AircraftSpec,
    flight: FlightState,
    systems: SystemsState,
    held: HeldControls,
    time: SimTime,
    aircraft: Option<Entity>,
    input_queue: VecDeque<ControlInput>,
    events: Vec<FlightEvent>,
    displacement: DVec3,
    stall_warning: bool,
}

impl FlightEngine {
    /// Create an engine with default flight data for the configured aircraft.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        config.validate()?;
        let spec = config.aircraft.spec();
        log::info!(
            "flight engine ready: {} at {:?} detail (aerodynamics {})",
            spec.name,
            config.detail,
            if config.aerodynamics() { "on" } else { "off" }
        );
        Ok(Self {
            config,
            spec,
            flight: FlightState::default(),
            systems: SystemsState::default(),
            held: HeldControls::default(),
            time: SimTime::default(),
            aircraft: None,
            input_queue: VecDeque::new(),
            events: Vec::new(),
            displacement: DVec3::ZERO,
            stall_warning: false,
        })
    }

    /// Attach the engine to an aircraft entity the host already spawned.
    /// The entity must carry a `Transform`.
    pub fn bind_aircraft(&mut self, entity: Entity) {
        self.aircraft = Some(entity);
    }

    /// Spawn the player aircraft at its start position and bind to it.
    pub fn spawn_aircraft(&mut self, scene: &mut World) -> Entity {
        let entity = scene.spawn((PlayerAircraft, Transform::aircraft_start()));
        self.bind_aircraft(entity);
        entity
    }

    /// Queue a control input for the next frame boundary.
    pub fn queue_input(&mut self, input: ControlInput) {
        self.input_queue.push_back(input);
    }

    pub fn queue_inputs(&mut self, inputs: impl IntoIterator<Item = ControlInput>) {
        self.input_queue.extend(inputs);
    }

    /// Advance one frame and return the resulting snapshot.
    ///
    /// Queued inputs are always applied. Integration is skipped when the step
    /// has no usable elapsed time, leaving the flight state untouched.
    pub fn tick(&mut self, step: FrameStep, scene: &mut World) -> Result<FlightSnapshot, SimError> {
        let entity = self.aircraft.ok_or(SimError::NoAircraftBound)?;

        self.process_inputs(scene, entity)?;

        match step.dt() {
            Some(dt) => {
                self.run_systems(scene, entity, dt, step.wall_clock_secs)?;
                self.time.advance(dt);
            }
            None => {
                log::trace!("frame {} skipped: no elapsed time", self.time.frame);
                self.displacement = DVec3::ZERO;
            }
        }

        let transform = *scene.query_one_mut::<&Transform>(entity)?;
        let events = std::mem::take(&mut self.events);
        Ok(systems::snapshot::build_snapshot(
            &self.time,
            &self.config,
            &self.flight,
            &self.systems,
            &transform,
            self.displacement,
            self.stall_warning,
            events,
        ))
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn spec(&self) -> &'static AircraftSpec {
        self.spec
    }

    pub fn flight(&self) -> &FlightState {
        &self.flight
    }

    pub fn systems(&self) -> &SystemsState {
        &self.systems
    }

    pub fn held(&self) -> &HeldControls {
        &self.held
    }

    pub fn mode(&self) -> FlightMode {
        self.systems.mode()
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn aircraft(&self) -> Option<Entity> {
        self.aircraft
    }

    fn process_inputs(&mut self, scene: &mut World, entity: Entity) -> Result<(), SimError> {
        while let Some(input) = self.input_queue.pop_front() {
            log::debug!("input: {input:?}");
            self.handle_input(input, scene, entity)?;
        }
        Ok(())
    }

    fn handle_input(
        &mut self,
        input: ControlInput,
        scene: &mut World,
        entity: Entity,
    ) -> Result<(), SimError> {
        let limits = self.config.attitude_limits;
        match input {
            ControlInput::SetThrottle { value } => self.flight.set_throttle(value),
            ControlInput::SetMixture { value } => self.flight.set_mixture(value),
            ControlInput::SetPitch { degrees } => {
                if let Some(degrees) = finite("pitch", degrees) {
                    self.flight.pitch = limits.pitch(degrees);
                }
            }
            ControlInput::SetRoll { degrees } => {
                if let Some(degrees) = finite("roll", degrees) {
                    self.flight.roll = limits.roll(degrees);
                }
            }
            ControlInput::SetYaw { degrees } => {
                if let Some(degrees) = finite("yaw", degrees) {
                    self.flight.yaw = degrees;
                }
            }
            ControlInput::KeyDown { key } => match key {
                ControlKey::Autopilot => self.toggle_autopilot(),
                ControlKey::Reset => self.reset(scene, entity)?,
                _ => {
                    self.held.set(key, true);
                }
            },
            ControlInput::KeyUp { key } => {
                self.held.set(key, false);
            }
            ControlInput::ToggleEngine => {
                self.systems.engine_running = !self.systems.engine_running;
                let event = if self.systems.engine_running {
                    FlightEvent::EngineStarted
                } else {
                    FlightEvent::EngineStopped
                };
                log::info!("{event:?}");
                self.events.push(event);
            }
            ControlInput::ToggleGear => {
                self.systems.landing_gear = !self.systems.landing_gear;
                self.events.push(FlightEvent::GearChanged {
                    down: self.systems.landing_gear,
                });
            }
            ControlInput::ToggleFlaps => {
                self.systems.flaps = !self.systems.flaps;
                self.events.push(FlightEvent::FlapsChanged {
                    down: self.systems.flaps,
                });
            }
            ControlInput::ToggleAutopilot => self.toggle_autopilot(),
            ControlInput::ToggleGps => self.systems.gps = !self.systems.gps,
            ControlInput::ToggleStallWarning => {
                self.systems.stall_warning = !self.systems.stall_warning;
            }
            ControlInput::SetWeather { weather } => {
                if self.systems.weather != weather {
                    self.systems.weather = weather;
                    self.events.push(FlightEvent::WeatherChanged { weather });
                }
            }
            ControlInput::SetTimeOfDay { time_of_day } => {
                self.systems.time_of_day = time_of_day;
            }
            ControlInput::Reset => self.reset(scene, entity)?,
        }
        Ok(())
    }

    fn toggle_autopilot(&mut self) {
        self.systems.autopilot = !self.systems.autopilot;
        let event = if self.systems.autopilot {
            FlightEvent::AutopilotEngaged
        } else {
            FlightEvent::AutopilotDisengaged
        };
        log::info!("{event:?}");
        self.events.push(event);
    }

    /// Default flight data, aircraft back at the start position. Systems and
    /// held keys are left as they are.
    fn reset(&mut self, scene: &mut World, entity: Entity) -> Result<(), SimError> {
        let transform = scene.query_one_mut::<&mut Transform>(entity)?;
        *transform = Transform::aircraft_start();
        self.flight.reset();
        self.displacement = DVec3::ZERO;
        self.stall_warning = false;
        self.events.push(FlightEvent::FlightReset);
        log::info!("flight reset");
        Ok(())
    }

    /// Run all systems in order.
    fn run_systems(
        &mut self,
        scene: &mut World,
        entity: Entity,
        dt: f64,
        wall_clock_secs: f64,
    ) -> Result<(), SimError> {
        let transform = scene.query_one_mut::<&mut Transform>(entity)?;
        let previous_altitude = self.flight.altitude;

        // 1. Control law
        match self.systems.mode() {
            FlightMode::Autopilot => {
                systems::autopilot::run(&mut self.flight, dt, wall_clock_secs);
            }
            FlightMode::Manual => {
                systems::controls::run(&mut self.flight, &self.held, self.config.attitude_limits, dt);
            }
        }
        // 2. Speed
        if self.config.aerodynamics() {
            systems::aerodynamics::run(&mut self.flight, self.spec, &self.systems, &self.config, dt);
        } else {
            systems::controls::apply_simple_speed(&mut self.flight);
        }
        // 3. Orientation and position
        self.displacement = systems::kinematics::run(&mut self.flight, transform, dt);
        // 4. Fuel
        if systems::fuel::run(&mut self.flight, dt) {
            log::warn!("fuel exhausted");
            self.events.push(FlightEvent::FuelExhausted);
        }
        // 5. Instruments
        systems::instruments::run(&mut self.flight, self.spec, &self.systems, previous_altitude, dt);
        let stalling = systems::instruments::stall_warning(&self.flight, self.spec, &self.systems);
        if stalling && !self.stall_warning {
            self.events.push(FlightEvent::StallWarning {
                airspeed: self.flight.airspeed,
                stall_speed: self.spec.stall_speed,
            });
        }
        self.stall_warning = stalling;
        Ok(())
    }
}

/// Non-finite slider values are dropped rather than written into the state.
fn finite(control: &str, value: f64) -> Option<f64> {
    if value.is_finite() {
        Some(value)
    } else {
        log::warn!("ignoring non-finite {control} input: {value}");
        None
    }
}
