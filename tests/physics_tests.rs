use sketch_physics::{
    PhysicsWorld, PhysicsStep, RigidBody, RigidBodyType, Fixture, Material, SimulationClock, SimulationConfig,
    shapes::{Circle, OrientedBox, Edge, Shape},
    math::{Vector2, Transform},
};
use approx::assert_relative_eq;

fn disc_body(position: Vector2, radius: f32) -> RigidBody {
    let mut body = RigidBody::new_dynamic(position);
    body.add_fixture(Fixture::new(Circle::new(Vector2::zero(), radius), Material::default()));
    body
}

#[test]
fn test_rigid_body_creation() {
    let body = disc_body(Vector2::new(0.0, 10.0), 1.0);

    // Check properties
    assert_eq!(body.get_position(), Vector2::new(0.0, 10.0));
    assert_eq!(body.get_body_type(), RigidBodyType::Dynamic);
    assert!(body.get_linear_velocity().is_zero());
    assert_eq!(body.get_angular_velocity(), 0.0);

    // Mass comes from fixture area and material density
    assert_relative_eq!(body.get_mass(), std::f32::consts::PI, epsilon = 1e-5);
    assert_relative_eq!(body.get_inverse_mass(), 1.0 / std::f32::consts::PI, epsilon = 1e-5);
}

#[test]
fn test_center_of_mass_is_area_weighted() {
    let mut body = RigidBody::new_dynamic(Vector2::new(1.0, 1.0));
    body.add_fixture(Fixture::new(Circle::new(Vector2::new(-1.0, 0.0), 1.0), Material::default()));
    body.add_fixture(Fixture::new(Circle::new(Vector2::new(1.0, 0.0), 1.0), Material::default()));
    assert_relative_eq!(body.world_center_of_mass(), Vector2::new(1.0, 1.0), epsilon = 1e-5);

    // A denser fixture pulls the center toward itself
    body.add_fixture(Fixture::new(Circle::new(Vector2::new(1.0, 0.0), 1.0), Material::new(2.4, 0.6, 0.1)));
    assert!(body.world_center_of_mass().x > 1.0);
}

#[test]
fn test_static_bodies_have_no_mass() {
    let mut body = RigidBody::new_static(Vector2::zero());
    body.add_fixture(Fixture::new(
        Edge::new(Vector2::zero(), Vector2::new(10.0, 0.0)),
        Material::boundary(),
    ));
    assert_eq!(body.get_mass(), 0.0);
    assert_eq!(body.get_inverse_mass(), 0.0);
}

#[test]
fn test_gravity_simulation() {
    let mut world = PhysicsWorld::with_config(SimulationConfig {
        gravity: Vector2::new(0.0, -9.8),
        ..SimulationConfig::default()
    });
    let handle = world.add_body(disc_body(Vector2::new(0.0, 10.0), 0.5));

    // Simulate for 1 second, tracking symplectic Euler by hand
    let time_step = 1.0 / 60.0;
    let mut expected_position = Vector2::new(0.0, 10.0);
    let mut expected_velocity = Vector2::zero();

    for _ in 0..60 {
        world.step(time_step, 8, 1);

        expected_velocity.y -= 9.8 * time_step;
        expected_position.y += expected_velocity.y * time_step;

        let body = world.get_body(handle).unwrap();
        assert_relative_eq!(body.get_linear_velocity(), expected_velocity, epsilon = 1e-3);
        assert_relative_eq!(body.get_position(), expected_position, epsilon = 1e-3);
    }
}

#[test]
fn test_force_application() {
    let mut world = PhysicsWorld::with_config(SimulationConfig {
        gravity: Vector2::zero(),
        ..SimulationConfig::default()
    });
    let handle = world.add_body(disc_body(Vector2::zero(), 1.0));

    // Apply a force along X
    let force = Vector2::new(10.0, 0.0);
    world.get_body_mut(handle).unwrap().apply_force(force);

    let time_step = 1.0 / 60.0;
    world.step(time_step, 8, 1);

    // velocity = (force / mass) * time
    let body = world.get_body(handle).unwrap();
    let expected_velocity = (force / body.get_mass()) * time_step;
    assert_relative_eq!(body.get_linear_velocity(), expected_velocity, epsilon = 1e-6);

    let position = body.get_position();
    assert!(position.x > 0.0);
    assert!(position.y.abs() < 1e-6);

    // Forces are consumed by the step
    world.step(time_step, 8, 1);
    let body = world.get_body(handle).unwrap();
    assert_relative_eq!(body.get_linear_velocity(), expected_velocity, epsilon = 1e-6);
}

#[test]
fn test_impulse_changes_velocity_immediately() {
    let mut world = PhysicsWorld::with_config(SimulationConfig {
        gravity: Vector2::zero(),
        ..SimulationConfig::default()
    });
    let handle = world.add_body(disc_body(Vector2::zero(), 1.0));
    let mass = world.get_body(handle).unwrap().get_mass();

    world.get_body_mut(handle).unwrap().apply_impulse(Vector2::new(0.0, mass * 2.0));
    world.step(0.5, 8, 1);

    let body = world.get_body(handle).unwrap();
    assert_relative_eq!(body.get_linear_velocity(), Vector2::new(0.0, 2.0), epsilon = 1e-5);
    assert_relative_eq!(body.get_position(), Vector2::new(0.0, 1.0), epsilon = 1e-5);
}

#[test]
fn test_angular_motion() {
    let mut world = PhysicsWorld::with_config(SimulationConfig {
        gravity: Vector2::zero(),
        ..SimulationConfig::default()
    });
    let handle = world.add_body(disc_body(Vector2::zero(), 1.0));
    world.get_body_mut(handle).unwrap().set_angular_velocity(2.0);

    for _ in 0..10 {
        world.step(0.1, 8, 1);
    }

    let body = world.get_body(handle).unwrap();
    assert_relative_eq!(body.get_angle(), 2.0, epsilon = 1e-5);
    assert_eq!(body.get_position(), Vector2::zero());
}

#[test]
fn test_damping_slows_bodies() {
    let mut world = PhysicsWorld::with_config(SimulationConfig {
        gravity: Vector2::zero(),
        linear_damping: 0.1,
        angular_damping: 0.1,
        ..SimulationConfig::default()
    });
    let handle = world.add_body(disc_body(Vector2::zero(), 1.0));
    {
        let body = world.get_body_mut(handle).unwrap();
        body.set_linear_velocity(Vector2::new(4.0, 0.0));
        body.set_angular_velocity(1.0);
    }

    world.step(1.0 / 60.0, 8, 1);

    let body = world.get_body(handle).unwrap();
    assert_relative_eq!(body.get_linear_velocity().x, 3.6, epsilon = 1e-5);
    assert_relative_eq!(body.get_angular_velocity(), 0.9, epsilon = 1e-5);
}

#[test]
fn test_clock_drives_world() {
    let mut world = PhysicsWorld::new();
    let clock = SimulationClock::new();
    let handle = world.add_body(disc_body(Vector2::new(0.0, 5.0), 0.25));

    // A long frame is taken as one long step
    clock.step(&mut world, 0.5);

    let step = world.last_step().unwrap();
    assert_eq!(step.velocity_iterations, clock.velocity_iterations());
    assert_eq!(step.position_iterations, clock.position_iterations());
    assert_relative_eq!(step.dt, 0.5);
    assert_relative_eq!(world.get_time(), 0.5);

    let body = world.get_body(handle).unwrap();
    assert_relative_eq!(body.get_linear_velocity().y, -4.9, epsilon = 1e-5);
    assert_relative_eq!(body.get_position().y, 5.0 - 2.45, epsilon = 1e-5);
}

#[test]
fn test_world_bookkeeping() {
    let mut world = PhysicsWorld::new();
    let a = world.add_body(disc_body(Vector2::zero(), 1.0));
    let b = world.add_body(RigidBody::new_static(Vector2::new(3.0, 0.0)));
    assert_ne!(a, b);
    assert_eq!(world.body_count(), 2);
    assert_eq!(world.bodies().count(), 2);

    assert_eq!(world.get_transform(b).unwrap(), Transform::from_position(Vector2::new(3.0, 0.0)));

    let removed = world.remove_body(a).unwrap();
    assert_eq!(removed.get_body_type(), RigidBodyType::Dynamic);
    assert!(world.get_body(a).is_err());
    assert!(world.remove_body(a).is_err());
    assert_eq!(world.body_count(), 1);
}

#[test]
fn test_material_properties() {
    let default = Material::default();
    assert_eq!(default.density, 1.0);
    assert_relative_eq!(default.friction, 0.2);
    assert_relative_eq!(default.restitution, 0.1);

    let custom = Material::new(2.0, 0.5, 0.3);
    let fixture = Fixture::new(Circle::new(Vector2::zero(), 1.0), custom);
    assert_relative_eq!(fixture.mass(), 2.0 * std::f32::consts::PI, epsilon = 1e-5);
    assert_eq!(*fixture.material(), custom);

    assert_eq!(Material::boundary().density, 0.0);
}

#[test]
fn test_shape_properties() {
    let circle: Shape = Circle::new(Vector2::new(1.0, 0.0), 2.0).into();
    assert_relative_eq!(circle.area(), 4.0 * std::f32::consts::PI, epsilon = 1e-5);
    assert_eq!(circle.local_centroid(), Vector2::new(1.0, 0.0));

    let obb: Shape = OrientedBox::new(2.0, 0.5, Vector2::new(0.0, 1.0), 0.0).into();
    assert_relative_eq!(obb.area(), 4.0);
    let bounds = obb.world_bounds(&Transform::from_position(Vector2::new(10.0, 0.0)));
    assert_relative_eq!(bounds.min, Vector2::new(8.0, 0.5), epsilon = 1e-5);
    assert_relative_eq!(bounds.max, Vector2::new(12.0, 1.5), epsilon = 1e-5);

    let edge: Shape = Edge::new(Vector2::zero(), Vector2::new(4.0, 0.0)).into();
    assert_eq!(edge.area(), 0.0);
    assert_eq!(edge.local_centroid(), Vector2::new(2.0, 0.0));
}
