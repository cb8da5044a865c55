//! Integration tests for sartor-sim internals: springs, constraints,
//! forces, and the integrator.

use rand::rngs::StdRng;
use rand::SeedableRng;

use sartor_garment::{material, BodyDescriptor, GarmentPattern};
use sartor_mesh::build_grid;
use sartor_sim::collision::BodySphere;
use sartor_sim::constraints::{apply_constraints, attachment_point, generate_constraints};
use sartor_sim::forces::wind_force;
use sartor_sim::integrator;
use sartor_sim::springs::{build_springs, SpringBreakdown};
use sartor_sim::{ConstraintKind, ForceModel, SimConfig, SimState, SpringKind};
use sartor_types::constants::WAIST_HEIGHT_RATIO;

fn shirt_grid() -> sartor_mesh::GridTopology {
    let pattern = GarmentPattern::by_name("shirt");
    build_grid(&BodyDescriptor::default(), &pattern, 2000).unwrap()
}

/// Assembles a full low-level simulation for an arbitrary
/// pattern/fabric pairing (the pipeline only exposes the style table).
fn assemble(
    pattern: &GarmentPattern,
    fabric: &sartor_garment::FabricMaterial,
    config: &SimConfig,
) -> (SimState, ForceModel, BodySphere) {
    let body = BodyDescriptor::default();
    let grid = build_grid(&body, pattern, config.max_vertices).unwrap();
    let springs = build_springs(grid.res_x, grid.res_y, grid.spacing());
    let constraints = generate_constraints(&grid, &body, pattern);
    let model = ForceModel::new(&grid, &springs);
    let state = SimState::new(&grid, springs, constraints, fabric, config.temporal_memory);
    let sphere = BodySphere::from_body(&body, config);
    (state, model, sphere)
}

// ─── SimConfig Tests ──────────────────────────────────────────

#[test]
fn config_default_is_valid() {
    let config = SimConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.steps, 60);
    assert!((config.dt - 1.0 / 60.0).abs() < 1e-9);
    assert_eq!(config.max_vertices, 2000);
    assert_eq!(config.temporal_memory, 8);
    assert!((config.blend_linear - 0.5).abs() < 1e-6);
    assert!((config.blend_nonlinear - 0.3).abs() < 1e-6);
    assert!((config.blend_temporal - 0.2).abs() < 1e-6);
}

#[test]
fn config_rejects_zero_dt() {
    let config = SimConfig {
        dt: 0.0,
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn config_rejects_tiny_temporal_memory() {
    let config = SimConfig {
        temporal_memory: 1,
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn config_toml_round_trip() {
    let config = SimConfig {
        steps: 90,
        seed: 1234,
        ..Default::default()
    };
    let toml_str = toml::to_string(&config).unwrap();
    let recovered: SimConfig = toml::from_str(&toml_str).unwrap();
    assert_eq!(recovered.steps, 90);
    assert_eq!(recovered.seed, 1234);
    assert!((recovered.dt - config.dt).abs() < 1e-9);
}

#[test]
fn deterministic_config_disables_stochastic_terms() {
    let config = SimConfig::deterministic(7);
    assert!(!config.wrinkle_enabled);
    assert_eq!(config.wind_strength, 0.0);
    assert_eq!(config.seed, 7);
}

// ─── Spring Network Tests ─────────────────────────────────────

#[test]
fn spring_counts_for_20x20() {
    let grid = shirt_grid();
    let springs = build_springs(grid.res_x, grid.res_y, grid.spacing());
    let breakdown = SpringBreakdown::of(&springs);

    // 2·res·(res−1) structural, (res−1)² shear, 2·res·(res−2) bending.
    assert_eq!(breakdown.structural, 2 * 20 * 19);
    assert_eq!(breakdown.shear, 19 * 19);
    assert_eq!(breakdown.bending, 2 * 20 * 18);
    assert_eq!(breakdown.total(), springs.len());

    // O(4·V): well under 5 springs per vertex.
    assert!(springs.len() < grid.vertex_count() * 5);
}

#[test]
fn spring_rest_lengths_follow_the_tier_formula() {
    let grid = shirt_grid();
    let spacing = grid.spacing();
    let springs = build_springs(grid.res_x, grid.res_y, spacing);

    for s in &springs {
        assert!(s.rest > 0.0);
        let expected = match s.kind {
            SpringKind::Structural => spacing,
            SpringKind::Shear => spacing * std::f32::consts::SQRT_2,
            SpringKind::Bending => spacing * 2.0,
        };
        assert!((s.rest - expected).abs() < 1e-6);
    }
}

#[test]
fn spring_indices_are_in_bounds() {
    let grid = shirt_grid();
    let springs = build_springs(grid.res_x, grid.res_y, grid.spacing());
    let n = grid.vertex_count();
    for s in &springs {
        assert!(s.a.index() < n && s.b.index() < n);
        assert_ne!(s.a, s.b);
    }
}

// ─── Constraint Generator Tests ───────────────────────────────

#[test]
fn shirt_constraints_fix_top_row_and_soften_sides() {
    let pattern = GarmentPattern::by_name("shirt");
    let body = BodyDescriptor::default();
    let grid = build_grid(&body, &pattern, 2000).unwrap();
    let constraints = generate_constraints(&grid, &body, &pattern);

    let fixed: Vec<_> = constraints
        .iter()
        .filter(|c| c.kind == ConstraintKind::Fixed)
        .collect();
    let soft: Vec<_> = constraints
        .iter()
        .filter(|c| c.kind == ConstraintKind::Soft)
        .collect();

    // Every top-row vertex is fixed.
    assert_eq!(fixed.len(), grid.res_x);
    for c in &fixed {
        assert!(c.vertex.index() < grid.res_x);
    }

    // Quarter-height rows × two edges.
    assert_eq!(soft.len(), 6);
    for c in &soft {
        assert!((c.strength - 0.5).abs() < 1e-6);
        let i = c.vertex.index() % grid.res_x;
        assert!(i == 0 || i == grid.res_x - 1, "soft constraint off-edge");
    }
}

#[test]
fn cape_has_no_side_constraints() {
    let pattern = GarmentPattern::by_name("cape");
    let body = BodyDescriptor::default();
    let grid = build_grid(&body, &pattern, 2000).unwrap();
    let constraints = generate_constraints(&grid, &body, &pattern);
    assert!(constraints
        .iter()
        .all(|c| c.kind == ConstraintKind::Fixed));
    assert_eq!(constraints.len(), grid.res_x);
}

#[test]
fn waistband_targets_sit_at_waist_height() {
    let pattern = GarmentPattern::by_name("skirt");
    let body = BodyDescriptor::default();
    let target = attachment_point(&body, &pattern, 0.5, 0.0);
    assert!((target.y - WAIST_HEIGHT_RATIO).abs() < 1e-6);
    assert!(target.x.abs() < 1e-6); // Centered at u = 0.5
}

#[test]
fn attachment_points_scale_with_the_body() {
    let pattern = GarmentPattern::by_name("shirt");
    let small = attachment_point(&BodyDescriptor::default(), &pattern, 1.0, 0.0);
    let big_body = BodyDescriptor {
        scale: 2.0,
        ..Default::default()
    };
    let big = attachment_point(&big_body, &pattern, 1.0, 0.0);
    assert!((big.y - small.y * 2.0).abs() < 1e-5);
    assert!((big.x - small.x * 2.0).abs() < 1e-5);
}

#[test]
fn apply_constraints_snaps_fixed_and_nudges_soft() {
    let pattern = GarmentPattern::by_name("shirt");
    let config = SimConfig::default();
    let (mut state, _model, _sphere) = assemble(&pattern, &material::cotton(), &config);

    // Perturb every constrained vertex away from its target.
    for c in state.constraints.clone() {
        let i = c.vertex.index();
        state.pos_x[i] += 0.3;
        state.vel_x[i] = 1.0;
    }

    let soft_before: Vec<f32> = state
        .constraints
        .iter()
        .filter(|c| c.kind == ConstraintKind::Soft)
        .map(|c| (state.pos_x[c.vertex.index()] - c.target[0]).abs())
        .collect();

    let applied = apply_constraints(&mut state, config.dt);
    assert_eq!(applied as usize, state.constraints.len());

    let mut soft_idx = 0;
    for c in state.constraints.clone() {
        let i = c.vertex.index();
        match c.kind {
            ConstraintKind::Fixed => {
                assert_eq!(state.pos_x[i], c.target[0]);
                assert_eq!(state.vel_x[i], 0.0);
            }
            ConstraintKind::Soft => {
                let after = (state.pos_x[i] - c.target[0]).abs();
                assert!(
                    after < soft_before[soft_idx],
                    "soft constraint should close on its target"
                );
                assert!(after > 0.0, "soft constraint must not snap");
                soft_idx += 1;
            }
        }
    }
}

// ─── Force Model Tests ────────────────────────────────────────

#[test]
fn undeformed_grid_has_near_zero_features() {
    let pattern = GarmentPattern::by_name("shirt");
    let config = SimConfig::default();
    let (state, model, _sphere) = assemble(&pattern, &material::cotton(), &config);

    // Interior vertex of the untouched grid: curvature is exactly the
    // rest pose, and strain only reflects the rectangular-cell
    // approximation of the shared base unit.
    let i = state.res_x * (state.res_y / 2) + state.res_x / 2;
    let feats = model.features(&state, i);

    assert!(feats.curvature.abs() < 1e-4);
    assert!(feats.strain < 0.25);
    assert!((feats.density - 1.0).abs() < 0.05);
    assert!(feats.laplacian.length() < 1e-4);
}

#[test]
fn coincident_neighbors_are_skipped_not_divided_by() {
    let pattern = GarmentPattern::by_name("shirt");
    let config = SimConfig::default();
    let (mut state, model, _sphere) = assemble(&pattern, &material::cotton(), &config);

    // Collapse a vertex onto its right neighbor.
    let i = state.res_x * (state.res_y / 2) + state.res_x / 2;
    state.pos_x[i + 1] = state.pos_x[i];
    state.pos_y[i + 1] = state.pos_y[i];
    state.pos_z[i + 1] = state.pos_z[i];

    for v in [i, i + 1] {
        let feats = model.features(&state, v);
        assert!(feats.strain_vec.is_finite(), "strain must stay finite");
        assert!(feats.curvature.is_finite());
        assert!(feats.density.is_finite());
    }
}

#[test]
fn stretched_cloth_pulls_back() {
    let pattern = GarmentPattern::by_name("shirt");
    let config = SimConfig::deterministic(0);
    let (mut state, model, _sphere) = assemble(&pattern, &material::cotton(), &config);

    // Pull one interior vertex to the right; the strain estimate should
    // point along the displacement.
    let i = state.res_x * (state.res_y / 2) + state.res_x / 2;
    state.pos_x[i] += 0.03;

    let feats = model.features(&state, i);
    assert!(
        feats.strain_vec.x > 0.0,
        "strain should follow the displacement, got {:?}",
        feats.strain_vec
    );
}

#[test]
fn wind_is_zero_when_disabled_and_bounded_otherwise() {
    let mut config = SimConfig::default();
    config.wind_strength = 0.0;
    assert_eq!(wind_force(&config, 3.2).length(), 0.0);

    config.wind_strength = 0.05;
    for step in 0..120 {
        let w = wind_force(&config, step as f32 / 60.0);
        assert!(w.length() <= 0.05 * std::f32::consts::SQRT_2 + 1e-6);
    }
}

// ─── Collision Tests ──────────────────────────────────────────

#[test]
fn sphere_ignores_outside_vertices() {
    let body = BodyDescriptor::default();
    let config = SimConfig::default();
    let sphere = BodySphere::from_body(&body, &config);

    let outside = sphere.center + glam::Vec3::X * (sphere.radius * 2.0);
    assert!(sphere.push_force(outside, config.collision_stiffness).is_none());
}

#[test]
fn sphere_pushes_outward_proportional_to_depth() {
    let body = BodyDescriptor::default();
    let config = SimConfig::default();
    let sphere = BodySphere::from_body(&body, &config);

    let shallow = sphere.center + glam::Vec3::X * (sphere.radius * 0.9);
    let deep = sphere.center + glam::Vec3::X * (sphere.radius * 0.5);

    let f_shallow = sphere
        .push_force(shallow, config.collision_stiffness)
        .unwrap();
    let f_deep = sphere.push_force(deep, config.collision_stiffness).unwrap();

    assert!(f_shallow.x > 0.0, "push should point outward");
    assert!(f_deep.length() > f_shallow.length());
}

#[test]
fn sphere_center_vertex_is_pushed_up_not_nan() {
    let body = BodyDescriptor::default();
    let config = SimConfig::default();
    let sphere = BodySphere::from_body(&body, &config);

    let f = sphere
        .push_force(sphere.center, config.collision_stiffness)
        .unwrap();
    assert!(f.is_finite());
    assert!(f.y > 0.0);
}

// ─── State / History Tests ────────────────────────────────────

#[test]
fn fixed_constraint_vertices_are_pinned_with_zero_inv_mass() {
    let pattern = GarmentPattern::by_name("shirt");
    let config = SimConfig::default();
    let (state, _model, _sphere) = assemble(&pattern, &material::cotton(), &config);

    for i in 0..state.res_x {
        assert!(state.pinned[i]);
        assert_eq!(state.inv_mass[i], 0.0);
    }
    assert!(!state.pinned[state.res_x * 2]);
    assert!(state.inv_mass[state.res_x * 2] > 0.0);
}

#[test]
fn history_never_exceeds_temporal_memory() {
    let pattern = GarmentPattern::by_name("shirt");
    let config = SimConfig::default();
    let (mut state, model, sphere) = assemble(&pattern, &material::cotton(), &config);
    let fabric = material::cotton();
    let mut rng = StdRng::seed_from_u64(config.seed);

    assert!(state.last_two_frames().is_none());

    for step in 0..20 {
        integrator::step(
            &mut state,
            &model,
            &fabric,
            &config,
            &sphere,
            &mut rng,
            step as f32 * config.dt,
        );
        assert!(state.history.len() <= config.temporal_memory);
        assert!(state.history.len() as u32 <= state.steps_completed);
    }
    assert_eq!(state.history.len(), config.temporal_memory);
    assert_eq!(state.steps_completed, 20);
}

#[test]
fn history_frames_capture_positions_and_velocities() {
    let pattern = GarmentPattern::by_name("shirt");
    let config = SimConfig::default();
    let (mut state, model, sphere) = assemble(&pattern, &material::cotton(), &config);
    let fabric = material::cotton();
    let mut rng = StdRng::seed_from_u64(0);

    for step in 0..3 {
        integrator::step(
            &mut state,
            &model,
            &fabric,
            &config,
            &sphere,
            &mut rng,
            step as f32 * config.dt,
        );
    }

    let newest = state.history.back().unwrap();
    assert_eq!(newest.pos_x, state.pos_x);
    assert_eq!(newest.vel_y, state.vel_y);
}

// ─── Integrator Tests ─────────────────────────────────────────

#[test]
fn gravity_pulls_free_vertices_down() {
    let pattern = GarmentPattern::by_name("shirt");
    let config = SimConfig::deterministic(0);
    let (mut state, model, sphere) = assemble(&pattern, &material::cotton(), &config);
    let fabric = material::cotton();
    let mut rng = StdRng::seed_from_u64(0);

    let initial_centroid: f32 =
        state.pos_y.iter().sum::<f32>() / state.vertex_count as f32;

    for step in 0..10 {
        integrator::step(
            &mut state,
            &model,
            &fabric,
            &config,
            &sphere,
            &mut rng,
            step as f32 * config.dt,
        );
    }

    let final_centroid: f32 = state.pos_y.iter().sum::<f32>() / state.vertex_count as f32;
    assert!(
        final_centroid < initial_centroid,
        "centroid should fall under gravity: {final_centroid} vs {initial_centroid}"
    );
}

#[test]
fn fixed_vertices_sit_at_target_after_every_step() {
    let pattern = GarmentPattern::by_name("shirt");
    let config = SimConfig::default();
    let (mut state, model, sphere) = assemble(&pattern, &material::cotton(), &config);
    let fabric = material::cotton();
    let mut rng = StdRng::seed_from_u64(config.seed);

    let fixed: Vec<_> = state
        .constraints
        .iter()
        .filter(|c| c.kind == ConstraintKind::Fixed)
        .copied()
        .collect();
    assert!(!fixed.is_empty());

    for step in 0..30 {
        integrator::step(
            &mut state,
            &model,
            &fabric,
            &config,
            &sphere,
            &mut rng,
            step as f32 * config.dt,
        );
        for c in &fixed {
            let i = c.vertex.index();
            assert_eq!(state.pos_x[i], c.target[0], "step {step}, vertex {i}");
            assert_eq!(state.pos_y[i], c.target[1], "step {step}, vertex {i}");
            assert_eq!(state.pos_z[i], c.target[2], "step {step}, vertex {i}");
            assert_eq!(state.vel_x[i], 0.0);
        }
    }
}

#[test]
fn step_report_carries_telemetry_fields() {
    let pattern = GarmentPattern::by_name("shirt");
    let config = SimConfig::default();
    let (mut state, model, sphere) = assemble(&pattern, &material::cotton(), &config);
    let fabric = material::cotton();
    let mut rng = StdRng::seed_from_u64(config.seed);

    let mut last_trend = 0.0f32;
    for step in 0..5u32 {
        let report = integrator::step(
            &mut state,
            &model,
            &fabric,
            &config,
            &sphere,
            &mut rng,
            step as f32 * config.dt,
        );
        assert_eq!(report.step, step);
        assert_eq!(report.constraints_applied as usize, state.constraints.len());
        assert!(report.kinetic_energy.is_finite());
        assert!(report.max_acceleration_trend >= 0.0);
        last_trend = report.max_acceleration_trend;
    }
    // With three or more frames of history the trend is live.
    assert!(last_trend.is_finite());
}

// ─── Stability: every fabric × pattern combination ────────────

#[test]
fn all_fabric_pattern_combinations_survive_600_steps() {
    let fabrics = [
        material::cotton(),
        material::silk(),
        material::denim(),
        material::jersey(),
        material::chiffon(),
    ];

    for pattern_name in GarmentPattern::names() {
        let pattern = GarmentPattern::by_name(pattern_name);
        for fabric in &fabrics {
            let config = SimConfig::default();
            let (mut state, model, sphere) = assemble(&pattern, fabric, &config);
            let mut rng = StdRng::seed_from_u64(config.seed);

            for step in 0..600 {
                integrator::step(
                    &mut state,
                    &model,
                    fabric,
                    &config,
                    &sphere,
                    &mut rng,
                    step as f32 * config.dt,
                );
            }

            assert!(
                !state.has_non_finite(),
                "{pattern_name}/{} produced non-finite state",
                fabric.name
            );
            let max_speed = state.max_speed();
            assert!(
                max_speed < 50.0,
                "{pattern_name}/{} velocity grew unbounded: {max_speed} m/s",
                fabric.name
            );
        }
    }
}

// ─── Soft Constraint Convergence ──────────────────────────────

#[test]
fn soft_constraints_close_on_targets_once_forces_are_constant() {
    // External forcing held constant (zero gravity/wind, wrinkles off):
    // the soft-constrained vertices must not drift away from their
    // targets over the final half of the run.
    let pattern = GarmentPattern::by_name("shirt");
    let mut config = SimConfig::deterministic(3);
    config.gravity = 0.0;
    config.steps = 120;

    let fabric = material::cotton();
    let (mut state, model, sphere) = assemble(&pattern, &fabric, &config);
    let mut rng = StdRng::seed_from_u64(config.seed);

    let soft: Vec<_> = state
        .constraints
        .iter()
        .filter(|c| c.kind == ConstraintKind::Soft)
        .copied()
        .collect();
    assert!(!soft.is_empty());

    let mean_distance = |state: &SimState| -> f32 {
        soft.iter()
            .map(|c| {
                let i = c.vertex.index();
                let dx = state.pos_x[i] - c.target[0];
                let dy = state.pos_y[i] - c.target[1];
                let dz = state.pos_z[i] - c.target[2];
                (dx * dx + dy * dy + dz * dz).sqrt()
            })
            .sum::<f32>()
            / soft.len() as f32
    };

    let mut distances = Vec::with_capacity(config.steps as usize);
    for step in 0..config.steps {
        integrator::step(
            &mut state,
            &model,
            &fabric,
            &config,
            &sphere,
            &mut rng,
            step as f32 * config.dt,
        );
        distances.push(mean_distance(&state));
    }

    // Compare window averages across the final half of the run.
    let window = |range: std::ops::Range<usize>| -> f32 {
        let slice = &distances[range];
        slice.iter().sum::<f32>() / slice.len() as f32
    };
    let third_quarter = window(60..90);
    let fourth_quarter = window(90..120);
    assert!(
        fourth_quarter <= third_quarter + 1e-4,
        "soft-constraint distance grew over the final half: {fourth_quarter} vs {third_quarter}"
    );
}
