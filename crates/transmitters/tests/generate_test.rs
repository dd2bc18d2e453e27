use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use transmitters::{
    GenerateOptions, generate, generate_with_options, generate_with_rng, polar_distance,
};

#[test]
fn empty_city_has_no_nodes_and_no_edges() {
    let mut g = generate(100.0, 0, 10.0);
    assert!(g.is_empty());
    assert_eq!(g.edge_count(), 0);
    assert_eq!(transmitters::color(&mut g), 0);
}

#[test]
fn edges_are_exactly_the_pairs_below_the_distance_threshold() {
    for seed in [1u64, 7, 99, 2024] {
        let transmitter_radius = 12.5;
        let g = generate_with_options(&GenerateOptions {
            city_radius: 100.0,
            transmitter_count: 60,
            transmitter_radius,
            random_seed: Some(seed),
        });
        let threshold = 2.0 * transmitter_radius;

        let linked: HashSet<(usize, usize)> = g
            .edges()
            .iter()
            .map(|e| {
                let (a, b) = (e.start.index(), e.end.index());
                (a.min(b), a.max(b))
            })
            .collect();

        for i in 0..g.node_count() {
            for j in (i + 1)..g.node_count() {
                let d = polar_distance(g.nodes()[i].position, g.nodes()[j].position);
                if linked.contains(&(i, j)) {
                    assert!(d < threshold, "seed {seed}: edge {i}-{j} at distance {d}");
                } else {
                    assert!(d >= threshold, "seed {seed}: missing edge {i}-{j} at distance {d}");
                }
            }
        }
    }
}

#[test]
fn no_self_loops_and_no_duplicate_pairs() {
    let g = generate_with_options(&GenerateOptions {
        city_radius: 30.0,
        transmitter_count: 80,
        transmitter_radius: 6.0,
        random_seed: Some(5),
    });
    assert!(g.edge_count() > 0);

    let mut pairs = HashSet::new();
    for e in g.edges() {
        assert_ne!(e.start, e.end);
        let key = (e.start.index().min(e.end.index()), e.start.index().max(e.end.index()));
        assert!(pairs.insert(key), "duplicate edge {key:?}");
    }
}

#[test]
fn edge_ids_are_one_based_and_increasing_per_graph() {
    let opts = GenerateOptions {
        city_radius: 10.0,
        transmitter_count: 20,
        transmitter_radius: 5.0,
        random_seed: Some(11),
    };
    let first = generate_with_options(&opts);
    let second = generate_with_options(&opts);

    let ids: Vec<i64> = first.edges().iter().map(|e| e.id).collect();
    let expected: Vec<i64> = (1..=ids.len() as i64).collect();
    assert_eq!(ids, expected);
    assert_eq!(second.edges().first().map(|e| e.id), Some(1));
}

#[test]
fn degree_counts_match_incident_edges() {
    let mut rng = StdRng::seed_from_u64(17);
    let g = generate_with_rng(&mut rng, 40.0, 50, 5.0);
    for id in g.node_ids() {
        let incident = g
            .edges()
            .iter()
            .filter(|e| e.start == id || e.end == id)
            .count();
        assert_eq!(g.node(id).degree, incident);
        assert_eq!(g.neighbors(id).len(), incident);
    }
}
