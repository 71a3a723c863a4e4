use tank_battle::entities::*;

fn make_world() -> World {
    World {
        tanks: vec![Tank::new(100, 100, ScreenId::TOP_LEFT, Direction::Up, Faction::Player)],
        bullets: Vec::new(),
        explosions: Vec::new(),
        blocks: Vec::new(),
        trees: Vec::new(),
        active_screen: ScreenId::TOP_LEFT,
        counts: LiveCounts { player: 1, enemy: 0 },
        score: 1000.0,
        frame: 0,
    }
}

#[test]
fn direction_index_round_trips() {
    for (i, dir) in Direction::ALL.iter().enumerate() {
        assert_eq!(dir.index(), i);
        assert_eq!(Direction::from_index(i as i32), *dir);
    }
}

#[test]
fn direction_from_index_wraps_both_ways() {
    assert_eq!(Direction::from_index(8), Direction::Up);
    assert_eq!(Direction::from_index(-1), Direction::UpLeft);
    assert_eq!(Direction::from_index(-9), Direction::UpLeft);
}

#[test]
fn rotation_stays_in_range_and_wraps() {
    assert_eq!(Direction::UpLeft.clockwise(), Direction::Up);
    assert_eq!(Direction::Up.counter_clockwise(), Direction::UpLeft);
    assert_eq!(Direction::UpRight.counter_clockwise(), Direction::Up);

    let mut dir = Direction::Down;
    for _ in 0..20 {
        dir = dir.clockwise();
        assert!(dir.index() < DIRECTION_COUNT);
    }
    for _ in 0..20 {
        dir = dir.counter_clockwise();
        assert!(dir.index() < DIRECTION_COUNT);
    }
    // 20 steps each way cancel out
    assert_eq!(dir, Direction::Down);
}

#[test]
fn diagonals_move_both_axes() {
    assert_eq!(Direction::Up.delta(), (0, -1));
    assert_eq!(Direction::DownRight.delta(), (1, 1));
    assert_eq!(Direction::DownLeft.delta(), (-1, 1));
    assert_eq!(Direction::UpLeft.delta(), (-1, -1));
}

#[test]
fn muzzle_sits_on_the_tank_outline() {
    assert_eq!(Direction::Up.muzzle(), (16, 0));
    assert_eq!(Direction::UpRight.muzzle(), (32, 0));
    assert_eq!(Direction::Right.muzzle(), (32, 16));
    assert_eq!(Direction::DownRight.muzzle(), (32, 32));
    assert_eq!(Direction::Down.muzzle(), (16, 32));
    assert_eq!(Direction::DownLeft.muzzle(), (0, 32));
    assert_eq!(Direction::Left.muzzle(), (0, 16));
    assert_eq!(Direction::UpLeft.muzzle(), (0, 0));
}

#[test]
fn tank_helpers() {
    let tank = Tank::new(40, 60, ScreenId::TOP_RIGHT, Direction::Right, Faction::Enemy);
    assert!(tank.is_alive());
    assert_eq!(tank.center(), (56, 76));
    assert_eq!(tank.muzzle_point(), (72, 76));
    assert_eq!(tank.wreck_frame, 0);

    let wreck = Tank { faction: Faction::Destroyed, ..tank };
    assert!(!wreck.is_alive());
}

#[test]
fn world_lookups_are_bounds_checked() {
    let world = make_world();
    assert!(world.player().is_some());
    assert!(world.tank(TankId(5)).is_none());
    assert_eq!(world.tank_ids().collect::<Vec<_>>(), vec![PLAYER]);
}

#[test]
fn world_clone_is_independent() {
    let original = make_world();
    let mut cloned = original.clone();

    cloned.tanks[0].x = 99;
    cloned.score = 1.0;
    cloned.bullets.push(Bullet {
        x: 5,
        y: 5,
        screen: ScreenId::TOP_LEFT,
        heading: Direction::Up,
        travel: 0,
    });

    assert_eq!(original.tanks[0].x, 100);
    assert_eq!(original.score, 1000.0);
    assert!(original.bullets.is_empty());
}
