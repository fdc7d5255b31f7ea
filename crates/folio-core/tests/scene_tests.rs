// Scene controller tests against a recording physics double and the real
// Rapier backend.

use fnv::FnvHashMap;
use folio_core::body::attraction_impulse;
use folio_core::palette::{self, accent_color};
use folio_core::*;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Debug, PartialEq)]
enum Call {
    Step(f32),
    Kinematic(BodyHandle, Vec3),
    Impulse(BodyHandle, Vec3),
}

/// Keeps bodies where they were created and logs every mutation.
#[derive(Default)]
struct RecordingWorld {
    positions: FnvHashMap<BodyHandle, Vec3>,
    kinds: FnvHashMap<BodyHandle, BodyKind>,
    next: u64,
    calls: Vec<Call>,
}

impl PhysicsWorld for RecordingWorld {
    fn create_body(&mut self, desc: &BodyDesc) -> BodyHandle {
        self.next += 1;
        let h = BodyHandle(self.next);
        self.positions.insert(h, desc.position);
        self.kinds.insert(h, desc.kind);
        h
    }

    fn remove_body(&mut self, handle: BodyHandle) {
        self.positions.remove(&handle);
        self.kinds.remove(&handle);
    }

    fn translation(&self, handle: BodyHandle) -> Option<Vec3> {
        self.positions.get(&handle).copied()
    }

    fn apply_impulse(&mut self, handle: BodyHandle, impulse: Vec3) {
        self.calls.push(Call::Impulse(handle, impulse));
    }

    fn set_kinematic_target(&mut self, handle: BodyHandle, target: Vec3) {
        self.calls.push(Call::Kinematic(handle, target));
    }

    fn step(&mut self, dt: f32) {
        self.calls.push(Call::Step(dt));
    }

    fn body_count(&self) -> usize {
        self.positions.len()
    }
}

fn params(seed: u64) -> SceneParams {
    SceneParams {
        seed: Some(seed),
        ..SceneParams::default()
    }
}

fn input(dt: f32) -> FrameInput {
    FrameInput {
        dt,
        pointer_ndc: Vec2::ZERO,
        viewport: Viewport {
            width: 10.0,
            height: 6.0,
        },
    }
}

fn handles<W: PhysicsWorld>(scene: &SceneController<W>) -> Vec<BodyHandle> {
    scene.bodies().iter().filter_map(|b| b.handle()).collect()
}

#[test]
fn initial_population_matches_body_count() {
    let scene = SceneController::new(RecordingWorld::default(), params(1));
    assert_eq!(scene.bodies().len(), 50);
    // bodies plus the pointer proxy
    assert_eq!(scene.world().body_count(), 51);
    assert_eq!(scene.generation(), 1);
    assert_eq!(scene.accent(), 0);
    assert!(!scene.is_running());
}

#[test]
fn frame_steps_then_moves_pointer_then_corrects_bodies() {
    let mut scene = SceneController::new(RecordingWorld::default(), params(2));
    let mut frame = input(1.0 / 60.0);
    frame.pointer_ndc = Vec2::ONE;
    let report = scene.frame(frame);
    assert!(report.stepped);
    assert!(!report.swapped);

    let calls = &scene.world().calls;
    assert_eq!(calls.len(), 2 + 50);
    assert_eq!(calls[0], Call::Step(1.0 / 60.0));
    let pointer = scene.pointer().handle();
    assert_eq!(calls[1], Call::Kinematic(pointer, Vec3::new(5.0, 3.0, 0.0)));
    for (call, body) in calls[2..].iter().zip(scene.bodies()) {
        let h = body.handle().unwrap();
        let p = scene.world().positions[&h];
        assert_eq!(call, &Call::Impulse(h, attraction_impulse(p)));
    }
}

#[test]
fn impulse_is_a_fifth_of_the_offset() {
    let scene = {
        let mut s = SceneController::new(RecordingWorld::default(), params(3));
        s.frame(input(0.016));
        s
    };
    for call in &scene.world().calls {
        if let Call::Impulse(h, impulse) = call {
            let p = scene.world().positions[h];
            assert!((*impulse + p * 0.2).length() < 1e-5);
        }
    }
}

#[test]
fn large_deltas_are_clamped() {
    let mut scene = SceneController::new(RecordingWorld::default(), params(4));
    let report = scene.frame(input(0.5));
    assert_eq!(report.dt, 0.1);
    assert_eq!(scene.world().calls[0], Call::Step(0.1));
}

#[test]
fn timer_cycles_through_every_accent() {
    let mut scene = SceneController::new(RecordingWorld::default(), params(5));
    scene.start();
    for expected in [1, 2, 3, 0] {
        assert_eq!(scene.on_timer(), Some(expected));
        assert_eq!(scene.pending_accent(), Some(expected));
        scene.frame(input(0.016));
        let colors: Vec<Rgb> = scene.bodies().iter().map(|b| b.target_color).collect();
        assert!(colors.contains(&accent_color(expected)), "accent {expected}");
    }
    assert_eq!(scene.accent(), 0);
    assert_eq!(scene.generation(), 5);
}

#[test]
fn swap_happens_on_the_next_frame() {
    let mut scene = SceneController::new(RecordingWorld::default(), params(6));
    scene.start();
    let before = handles(&scene);

    assert_eq!(scene.on_timer(), Some(1));
    assert_eq!(scene.pending_accent(), Some(1));
    assert_eq!(handles(&scene), before);

    let report = scene.frame(input(0.016));
    assert!(report.swapped);
    assert_eq!(report.bodies, 50);
    assert_eq!(scene.pending_accent(), None);
    let after = handles(&scene);
    assert!(after.iter().all(|h| !before.contains(h)));
    assert_eq!(scene.world().body_count(), 51);
}

#[test]
fn newest_batch_wins() {
    let mut scene = SceneController::new(RecordingWorld::default(), params(7));
    scene.start();
    scene.on_timer();
    scene.on_timer();
    assert_eq!(scene.pending_accent(), Some(2));
    scene.frame(input(0.016));
    let colors: Vec<Rgb> = scene.bodies().iter().map(|b| b.target_color).collect();
    assert!(colors.contains(&accent_color(2)));
    assert!(!colors.contains(&accent_color(1)));
    assert!(!colors.contains(&accent_color(0)));
    assert_eq!(scene.world().body_count(), 51);
}

#[test]
fn stopped_scene_ignores_ticks() {
    let mut scene = SceneController::new(RecordingWorld::default(), params(8));
    assert_eq!(scene.on_timer(), None);
    scene.start();
    scene.on_timer();
    scene.stop();
    assert_eq!(scene.on_timer(), None);
    assert_eq!(scene.accent(), 1);
    assert_eq!(scene.pending_accent(), Some(1));
}

#[test]
fn batch_queued_before_stop_still_lands() {
    let mut scene = SceneController::new(RecordingWorld::default(), params(16));
    scene.start();
    assert_eq!(scene.on_timer(), Some(1));
    scene.stop();
    scene.start();
    let report = scene.frame(input(0.016));
    assert!(report.swapped);
    assert_eq!(scene.accent(), 1);
    let colors: Vec<Rgb> = scene.bodies().iter().map(|b| b.target_color).collect();
    assert!(colors.contains(&scene.accent_color()));
    assert!(!colors.contains(&accent_color(0)));
}

fn plain_spec() -> BodySpec {
    BodySpec {
        color: accent_color(3),
        material: Material {
            roughness: 0.1,
            metalness: 0.0,
            opacity: 1.0,
        },
        accent: true,
    }
}

#[test]
fn unattached_body_update_is_a_no_op() {
    let mut world = RecordingWorld::default();
    let mut body = Body::attached(None, &plain_spec());
    let before = body.display.value;
    body.update(&mut world, 1.0 / 60.0);
    assert!(world.calls.is_empty());
    assert_eq!(body.display.value, before);
    assert_eq!(body.position(&world), None);
}

#[test]
fn despawned_body_update_is_a_no_op() {
    let mut world = RecordingWorld::default();
    let mut body = Body::spawn(&mut world, &plain_spec(), Vec3::new(2.0, 0.0, 0.0));
    body.despawn(&mut world);
    assert_eq!(body.handle(), None);
    assert_eq!(world.body_count(), 0);
    body.update(&mut world, 1.0 / 60.0);
    assert!(world.calls.is_empty());
    assert_eq!(body.display.value, Vec3::ONE);
}

#[test]
fn body_removed_behind_its_back_is_left_alone() {
    let mut world = RecordingWorld::default();
    let mut body = Body::spawn(&mut world, &plain_spec(), Vec3::new(2.0, 0.0, 0.0));
    let h = body.handle().unwrap();
    world.remove_body(h);
    body.update(&mut world, 1.0 / 60.0);
    assert!(world.calls.is_empty());
    assert_eq!(body.display.value, Vec3::ONE);
}

#[test]
fn commands_drive_the_controller() {
    let mut scene = SceneController::new(RecordingWorld::default(), params(9));
    scene.apply(SceneCommand::SelectAccent(3));
    assert_eq!(scene.accent(), 3);
    assert_eq!(scene.pending_accent(), Some(3));

    scene.apply(SceneCommand::SelectAccent(9));
    assert_eq!(scene.accent(), 3);

    scene.apply(SceneCommand::NextAccent);
    assert_eq!(scene.accent(), 0);

    let gen = scene.generation();
    scene.apply(SceneCommand::Reshuffle);
    assert_eq!(scene.generation(), gen + 1);
    assert_eq!(scene.accent(), 0);
}

#[test]
fn paused_scene_swaps_but_does_not_step() {
    let mut scene = SceneController::new(RecordingWorld::default(), params(10));
    scene.apply(SceneCommand::TogglePause);
    assert!(scene.is_paused());
    scene.reshuffle();
    let report = scene.frame(input(0.016));
    assert!(report.swapped);
    assert!(!report.stepped);
    assert!(scene.world().calls.is_empty());
}

#[test]
fn new_bodies_ease_from_white_to_their_colour() {
    let mut scene = SceneController::new(RecordingWorld::default(), params(11));
    let idx = scene
        .bodies()
        .iter()
        .position(|b| b.target_color != Rgb::WHITE)
        .expect("a non-white body");
    let target = scene.bodies()[idx].target_color.linear();
    assert_eq!(scene.bodies()[idx].display.value, Vec3::ONE);

    let mut last = (Vec3::ONE - target).length();
    for _ in 0..30 {
        scene.frame(input(1.0 / 60.0));
        let d = (scene.bodies()[idx].display.value - target).length();
        assert!(d <= last);
        if last > 0.0 {
            assert!(d < last);
        }
        last = d;
    }
    assert!(last < 0.1);
}

#[test]
fn every_batch_contains_an_accent() {
    let mut rng = StdRng::seed_from_u64(12);
    for trial in 0..200 {
        let accent = trial % ACCENTS.len();
        let specs = palette::regenerate(accent, 50, &mut rng);
        assert_eq!(specs.len(), 50);
        assert!(specs.iter().any(|s| s.accent));
        for s in specs.iter().filter(|s| s.accent) {
            assert_eq!(s.color, accent_color(accent));
        }
    }
}

#[test]
fn same_seed_same_scene() {
    let a = SceneController::new(RecordingWorld::default(), params(13));
    let b = SceneController::new(RecordingWorld::default(), params(13));
    assert_eq!(a.instances(), b.instances());
}

#[test]
fn instances_carry_material() {
    let scene = SceneController::new(RecordingWorld::default(), params(14));
    let inst = scene.instances();
    assert_eq!(inst.len(), 50);
    for (i, b) in inst.iter().zip(scene.bodies()) {
        assert_eq!(i.radius, 1.0);
        assert_eq!(i.opacity, b.material.opacity);
        assert_eq!(i.roughness, b.material.roughness);
        assert!(i.center.abs().max_element() <= 10.0);
    }
}

#[test]
fn rapier_bodies_gather_at_the_origin() {
    let mut scene = SceneController::new(RapierWorld::new(), params(15));
    let mean = |s: &SceneController<RapierWorld>| {
        let inst = s.instances();
        inst.iter().map(|i| i.center.length()).sum::<f32>() / inst.len() as f32
    };
    let start = mean(&scene);
    let mut frame = input(1.0 / 60.0);
    frame.pointer_ndc = Vec2::new(1.0, 1.0);
    for _ in 0..180 {
        scene.frame(frame);
    }
    let end = mean(&scene);
    assert!(end < start * 0.75, "start={start} end={end}");
}

#[test]
fn rapier_pointer_pushes_bodies_aside() {
    let mut world = RapierWorld::new();
    let square = Viewport {
        width: 2.0,
        height: 2.0,
    };
    let mut pointer = PointerProxy::spawn(&mut world);
    pointer.update(&mut world, Vec2::new(-3.0, 0.0), square);
    world.step(1.0 / 60.0);

    let spec = BodySpec {
        color: Rgb::WHITE,
        material: Material {
            roughness: 0.1,
            metalness: 0.0,
            opacity: 1.0,
        },
        accent: false,
    };
    let mut body = Body::spawn(&mut world, &spec, Vec3::ZERO);
    for i in 0..90 {
        let x = (-3.0 + 3.5 * i as f32 / 60.0).min(0.5);
        world.step(1.0 / 60.0);
        pointer.update(&mut world, Vec2::new(x, 0.0), square);
        body.update(&mut world, 1.0 / 60.0);
    }
    let p = body.position(&world).unwrap();
    assert!(p.x > 1.2, "body at {p}");
}
