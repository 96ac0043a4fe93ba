use crash_sim::simulation::config::Config;
use crash_sim::simulation::controller::LocalControllerBuilder;
use crash_sim::simulation::engine::SimulationOutcome;
use crash_sim::simulation::events::{EventsManager, VehicleMoved, VehiclesCrashed};
use crash_sim::simulation::geometry::Point;
use crash_sim::simulation::scenario::Scenario;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

fn run_with_config(config: &Config) -> SimulationOutcome {
    let scenario = Scenario::load(config).unwrap();
    let controller = LocalControllerBuilder::default()
        .scenario(scenario)
        .build()
        .unwrap();
    controller.run()
}

#[test]
fn test_default_scenario_crashes() {
    // Rabbit from (0,0) at (2,2) per step, Corolla from (6,0) at (-1,2):
    // after two steps both sit at (4,4)
    let outcome = run_with_config(&Config::default());
    assert_eq!(
        outcome,
        SimulationOutcome::Crash {
            position: Point::new(4.0, 4.0),
            step: 2,
        }
    );
}

#[test]
fn test_no_crash_scenario() {
    let mut config = Config::default();
    config.vehicles[1].initial_position = Point::new(-2.0, 1.0);

    let outcome = run_with_config(&config);
    assert!(matches!(outcome, SimulationOutcome::FuelExhausted { .. }));
}

#[test]
fn test_zero_velocity_standoff_hits_step_limit() {
    let mut config = Config::default();
    // off the Rabbit's (2k, 2k) diagonal, so the two never coincide
    config.vehicles[1].velocity = Point::ZERO;
    config.vehicles[1].initial_position = Point::new(-100.0, -100.0);
    config.simulation.max_steps = Some(1000);

    let outcome = run_with_config(&config);
    assert_eq!(outcome, SimulationOutcome::StepLimitReached { step: 1000 });
}

#[test]
fn test_events_report_the_run() {
    let moved: Rc<RefCell<Vec<VehicleMoved>>> = Rc::new(RefCell::new(Vec::new()));
    let crashes: Rc<RefCell<Vec<VehiclesCrashed>>> = Rc::new(RefCell::new(Vec::new()));

    let mut events = EventsManager::new();
    let collected = moved.clone();
    events.on::<VehicleMoved, _>(move |e| collected.borrow_mut().push(e.clone()));
    let collected = crashes.clone();
    events.on::<VehiclesCrashed, _>(move |e| collected.borrow_mut().push(e.clone()));

    let scenario = Scenario::load(&Config::default()).unwrap();
    let controller = LocalControllerBuilder::default()
        .scenario(scenario)
        .events(events)
        .build()
        .unwrap();
    controller.run();

    // two vehicles times two steps
    assert_eq!(moved.borrow().len(), 4);
    let crashes = crashes.borrow();
    assert_eq!(crashes.len(), 1);
    assert_eq!(crashes[0].position, Point::new(4.0, 4.0));
    assert_eq!(crashes[0].step, 2);
}

#[test]
fn test_scenario_from_config_file() {
    let yaml = r#"
vehicles:
  - company: Volkswagon
    model: Rabbit
    seats: 5
    side: Left
    fuel_capacity: 75.0
    fuel_efficiency: 5.0
    tank_state: Full
    initial_position: { x: 0.0, y: 0.0 }
    velocity: { x: 2.0, y: 2.0 }
  - company: Toyota
    model: Corolla
    seats: 4
    side: Left
    fuel_capacity: 55.0
    fuel_efficiency: 3.0
    tank_state: Full
    initial_position: { x: -2.0, y: 1.0 }
    velocity: { x: -1.0, y: 2.0 }
"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let config = Config::from_file(file.path()).unwrap();
    let outcome = run_with_config(&config);
    assert!(matches!(outcome, SimulationOutcome::FuelExhausted { .. }));
}
