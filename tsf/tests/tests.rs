#[cfg(test)]
mod tests {
    use std::fs;

    use circpack::io::ext_repr::ExtInstance;
    use circpack::io::export::export_instance;
    use circpack::io::import::{import_circle, import_instance};
    use circpack::util::{EnclosingStrategy, assertions};
    use float_cmp::approx_eq;
    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;

    use tsf::config::TSFConfig;
    use tsf::io;
    use tsf::io::output::TSFOutput;
    use tsf::opt::{TSFPacker, TSFSolution, generate_instance};

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn run(config: TSFConfig) -> (TSFPacker, TSFSolution) {
        let mut rng = match config.prng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        let instance = generate_instance(&config.generator, &mut rng).unwrap();
        let mut packer = TSFPacker::new(instance, config, rng);
        let solution = packer.solve();
        (packer, solution)
    }

    #[test_case(0, EnclosingStrategy::Tight; "seed_0_tight")]
    #[test_case(1, EnclosingStrategy::Tight; "seed_1_tight")]
    #[test_case(42, EnclosingStrategy::Tight; "seed_42_tight")]
    #[test_case(0, EnclosingStrategy::BoundingBox; "seed_0_bbox")]
    #[test_case(7, EnclosingStrategy::BoundingBox; "seed_7_bbox")]
    fn test_packing(seed: u64, enclosing: EnclosingStrategy) {
        init();
        let config = TSFConfig {
            prng_seed: Some(seed),
            enclosing,
            ..TSFConfig::default()
        };
        let (packer, solution) = run(config);
        let snapshot = &solution.snapshot;

        assert!(solution.skipped.is_empty());
        assert_eq!(snapshot.circles.len(), config.generator.n_circles);
        assert!(assertions::packing_is_overlap_free(&packer.packed));
        assert!(assertions::circles_are_enclosed(
            &snapshot.enclosing_circle,
            &snapshot.circles,
            1e-6
        ));
        assert!(snapshot.density > 0.0 && snapshot.density < 1.0);
    }

    #[test]
    fn enclosing_strategy_does_not_affect_placement() {
        init();
        let (_, tight) = run(TSFConfig::default());
        let (_, bbox) = run(TSFConfig {
            enclosing: EnclosingStrategy::BoundingBox,
            ..TSFConfig::default()
        });
        assert_eq!(tight.snapshot.circles, bbox.snapshot.circles);
        assert_eq!(tight.placed_indices, bbox.placed_indices);
    }

    #[test_case(0; "seed_0")]
    #[test_case(13; "seed_13")]
    fn deterministic_under_fixed_seed(seed: u64) {
        let config = TSFConfig {
            prng_seed: Some(seed),
            ..TSFConfig::default()
        };
        let (_, a) = run(config);
        let (_, b) = run(config);

        assert_eq!(a.snapshot, b.snapshot);
        assert_eq!(a.placed_indices, b.placed_indices);
        assert_eq!(a.skipped, b.skipped);
    }

    #[test]
    fn solution_roundtrip_through_solution_folder() {
        init();
        let config = TSFConfig::default();
        let mut rng = SmallRng::seed_from_u64(0);
        let mut generator = config.generator;
        generator.n_circles = 25;
        let instance = generate_instance(&generator, &mut rng).unwrap();
        let ext_instance = export_instance(&instance);
        let solution = TSFPacker::new(instance, config, rng).solve();

        let folder = std::env::temp_dir().join(format!("tsf_test_{}", std::process::id()));
        let (json_path, svg_path) =
            io::write_solution(&folder, "roundtrip", &ext_instance, &solution, &config).unwrap();
        assert_eq!(json_path.file_name().unwrap(), "sol_roundtrip.json");
        assert!(svg_path.exists());

        let output: TSFOutput =
            serde_json::from_reader(fs::File::open(&json_path).unwrap()).unwrap();
        assert_eq!(output.instance, ext_instance);
        assert_eq!(output.config, config);
        assert_eq!(output.solution.circles.len(), 25);
        assert!(approx_eq!(
            f64,
            output.solution.density,
            solution.snapshot.density,
            ulps = 2
        ));

        let enclosing = import_circle(&output.solution.enclosing_circle).unwrap();
        assert_eq!(enclosing, solution.snapshot.enclosing_circle);

        //the instance written with the solution can be read back as input
        let reread: ExtInstance = io::read_instance(&json_path).unwrap();
        assert_eq!(import_instance(&reread).unwrap().n_circles(), 25);

        let svg = fs::read_to_string(&svg_path).unwrap();
        assert!(svg.contains("circles: 25"));

        fs::remove_dir_all(&folder).unwrap();
    }
}
