//! CLI command implementations.

use sartor_bench::metrics::DrapeMetrics;
use sartor_bench::runner::BenchmarkRunner;
use sartor_bench::scenarios::{Scenario, ScenarioKind};
use sartor_garment::{
    BodyBuild, BodyDescriptor, FabricLibrary, GarmentDescriptor, GarmentPattern,
};
use sartor_sim::{drape as run_drape, SimConfig};

/// Drape a garment and optionally export the mesh as JSON.
pub fn drape(
    style: &str,
    scale: f32,
    build: &str,
    steps: Option<u32>,
    seed: Option<u64>,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = BodyDescriptor {
        scale,
        build: parse_build(build),
    };
    let garment = GarmentDescriptor::from_style_name(style);

    let mut config = SimConfig::default();
    if let Some(steps) = steps {
        config.steps = steps;
    }
    if let Some(seed) = seed {
        config.seed = seed;
    }

    println!("Sartor Drape");
    println!("────────────");
    println!("Style:    {}", garment.style.name());
    println!("Scale:    {scale}");
    println!("Steps:    {}", config.steps);
    println!();

    let mesh = run_drape(&body, &garment, config)?;

    println!("Vertices:    {}", mesh.metadata.vertex_count);
    println!(
        "Resolution:  {}x{}",
        mesh.metadata.resolution.0, mesh.metadata.resolution.1
    );
    println!("Springs:     {}", mesh.metadata.spring_count);
    println!("Constraints: {}", mesh.metadata.constraint_count);
    println!("Triangles:   {}", mesh.triangle_count());

    if let Some(path) = output_path {
        let json = serde_json::to_string(&mesh)?;
        std::fs::write(path, json)?;
        println!();
        println!("Mesh written to: {path}");
    }

    Ok(())
}

/// Run benchmark suite.
pub fn benchmark(
    scenario_name: &str,
    output_path: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Sartor Benchmark Suite");
    println!("══════════════════════");
    println!();

    let scenarios: Vec<ScenarioKind> = if scenario_name == "all" {
        ScenarioKind::all().to_vec()
    } else {
        let kind = match scenario_name {
            "casual_shirt" => ScenarioKind::CasualShirt,
            "formal_dress" => ScenarioKind::FormalDress,
            "sporty_tee" => ScenarioKind::SportyTee,
            "elegant_drape" => ScenarioKind::ElegantDrape,
            other => {
                eprintln!("Unknown scenario: {other}");
                eprintln!(
                    "Available: casual_shirt, formal_dress, sporty_tee, elegant_drape, all"
                );
                return Err("Unknown scenario".into());
            }
        };
        vec![kind]
    };

    let mut all_metrics = Vec::new();

    for &kind in &scenarios {
        let scenario = Scenario::from_kind(kind);
        println!(
            "Running: {} ({} steps)",
            kind.name(),
            scenario.config.steps
        );

        let metrics =
            BenchmarkRunner::run(&scenario).map_err(|e| format!("Benchmark failed: {e}"))?;

        println!("  Wall time:     {:.3}s", metrics.total_wall_time);
        println!("  Avg step:      {:.3}ms", metrics.avg_step_time * 1000.0);
        println!("  Final KE:      {:.6e}", metrics.final_kinetic_energy);
        println!("  Max displace:  {:.4}m", metrics.max_displacement);
        println!();

        all_metrics.push(metrics);
    }

    if let Some(path) = output_path {
        let csv = DrapeMetrics::to_csv(&all_metrics);
        std::fs::write(path, &csv)?;
        println!("Results written to: {path}");
    } else {
        println!("CSV Output:");
        println!("{}", DrapeMetrics::to_csv(&all_metrics));
    }

    Ok(())
}

/// List the built-in garment patterns.
pub fn patterns() -> Result<(), Box<dyn std::error::Error>> {
    println!("Built-in garment patterns");
    println!("─────────────────────────");
    for name in GarmentPattern::names() {
        let p = GarmentPattern::by_name(name);
        println!(
            "{:8} {:>5} vertices  {:.2}m x {:.2}m  attachments: {:?}",
            p.name, p.nominal_vertices, p.width, p.height, p.attachments
        );
    }
    Ok(())
}

/// List the built-in fabric classes.
pub fn fabrics() -> Result<(), Box<dyn std::error::Error>> {
    println!("Built-in fabric classes");
    println!("───────────────────────");
    let lib = FabricLibrary::with_defaults();
    let mut names = lib.names();
    names.sort_unstable();
    for name in names {
        let f = lib.get(name).expect("name came from the library");
        println!(
            "{:8} stiffness {:.2}  stretch {:.2}  bend {:.2}  wrinkle-res {:.2}  density {:.2}",
            f.name, f.stiffness, f.stretch, f.bending_resistance, f.wrinkle_resistance, f.density
        );
    }
    Ok(())
}

fn parse_build(name: &str) -> BodyBuild {
    match name.trim().to_ascii_lowercase().as_str() {
        "slim" => BodyBuild::Slim,
        "athletic" => BodyBuild::Athletic,
        "heavy" => BodyBuild::Heavy,
        _ => BodyBuild::Average,
    }
}
