//! End-to-end collision scenarios through the public API

use approx::assert_relative_eq;
use spatial_core::foundation::{logging, math::constants::HALF_PI};
use spatial_core::prelude::*;

fn shared_layer(shape: impl Into<Shape>) -> Collider {
    Collider::new(shape).with_layers(Layer::Enemy, Layer::Enemy)
}

#[test]
fn test_overlapping_circles_report_both_entities() {
    logging::init_for_tests();
    let a = shared_layer(Circle::new(point(0.0, 0.0), 5.0));
    let b = shared_layer(Circle::new(point(0.0, 0.0), 5.0));
    let config = SpatialConfig::default();

    let (a, b): (&dyn Collidable, &dyn Collidable) = (&a, &b);
    let body_a = CollisionBody::new(Entity::new(10), point(0.0, 0.0), Some(a)).unwrap();
    let near = CollisionBody::new(Entity::new(20), point(3.0, 0.0), Some(b)).unwrap();
    let far = CollisionBody::new(Entity::new(20), point(20.0, 0.0), Some(b)).unwrap();

    let hit = check_collision(&body_a, &near, &config).unwrap().expect("circles overlap");
    assert_eq!(hit.entity_a, Entity::new(10));
    assert_eq!(hit.entity_b, Entity::new(20));
    assert!(hit.collider_a.collider().enabled);

    assert!(check_collision(&body_a, &far, &config).unwrap().is_none());
}

#[test]
fn test_touching_circles_intersect() {
    let a = Shape::circle(point(0.0, 0.0), 2.0);
    let b = Shape::circle(point(5.0, 0.0), 3.0);
    assert!(a.intersects(&b));
    assert!(!a.intersects(&Shape::circle(point(5.0 + 1e-6, 0.0), 3.0)));
}

#[test]
fn test_rectangle_and_crossing_line() {
    let boxed = shared_layer(Rectangle::new(point(0.0, 0.0), 4.0, 4.0));
    let beam = shared_layer(Line::new(point(-10.0, 0.0), point(10.0, 0.0)));
    let hit = check_collision(
        &CollisionBody::with_collider(Entity::new(1), point(0.0, 0.0), &boxed),
        &CollisionBody::with_collider(Entity::new(2), point(0.0, 0.0), &beam),
        &SpatialConfig::default(),
    )
    .unwrap();
    assert!(hit.is_some());
    assert!(hit.and_then(|data| data.contact).is_none());
}

#[test]
fn test_composite_boss_hit_by_projectile() {
    let boss = CompositeCollider::new(point(0.0, 0.0), HALF_PI)
        .with_layers(Layer::Enemy, Layer::Projectile)
        .with_body_part("left", BodyPart::new(Circle::new(point(0.0, 0.0), 1.0), vector(-5.0, 0.0), 0.0))
        .with_body_part("right", BodyPart::new(Circle::new(point(0.0, 0.0), 1.0), vector(5.0, 0.0), 0.0));

    let shapes = boss.world_space_shapes();
    assert_relative_eq!(shapes[0].center(), point(0.0, -5.0), epsilon = 1e-9);
    assert_relative_eq!(shapes[1].center(), point(0.0, 5.0), epsilon = 1e-9);

    let bounds = boss.bounds();
    assert_relative_eq!(bounds.width(), 2.0, epsilon = 1e-9);
    assert_relative_eq!(bounds.height(), 12.0, epsilon = 1e-9);

    let bullet = Collider::new(Circle::new(point(0.0, 0.0), 0.5)).with_layers(Layer::Projectile, LayerMask::empty());
    let boss_body = CollisionBody::with_collider(Entity::new(1), point(0.0, 0.0), &boss);
    let config = SpatialConfig::default();

    // The arms sit on the y axis after the quarter turn
    let on_arm = CollisionBody::with_collider(Entity::new(2), point(0.0, 6.2), &bullet);
    assert!(check_collision(&boss_body, &on_arm, &config).unwrap().is_some());

    let where_arm_was = CollisionBody::with_collider(Entity::new(2), point(5.0, 0.0), &bullet);
    assert!(check_collision(&boss_body, &where_arm_was, &config).unwrap().is_none());

    // One-way match fails when both sides must agree
    let strict = SpatialConfig {
        layer_filter: LayerFilter::Mutual,
        ..config
    };
    assert!(check_collision(&boss_body, &on_arm, &strict).unwrap().is_none());
}

#[test]
fn test_tick_with_a_broken_body_keeps_going() {
    let player = Collider::new(Circle::new(point(0.0, 0.0), 1.0))
        .with_layers(Layer::Player, LayerMask::ENEMY | LayerMask::WALL);
    let wall = Collider::new(Rectangle::new(point(0.0, 0.0), 2.0, 10.0)).with_layers(Layer::Wall, LayerMask::empty());
    let bodies = [
        CollisionBody::with_collider(Entity::new(1), point(0.0, 0.0), &player),
        CollisionBody {
            entity: Entity::new(2),
            position: point(0.0, 0.0),
            collider: None,
        },
        CollisionBody::with_collider(Entity::new(3), point(1.5, 0.0), &wall),
    ];

    let mut tracker = CollisionTracker::new();
    tracker.update(&detect_collisions(&bodies, &SpatialConfig::default()));
    assert_eq!(tracker.entered(), vec![CollisionPair::new(Entity::new(1), Entity::new(3))]);
}
