#[cfg(test)]
mod generator_tests {
    use std::collections::HashSet;
    use std::io::Write;

    use topogen::config::Config;
    use topogen::config_loader::load_config;
    use topogen::render::CytoscapeDocument;
    use topogen::tapi::{CommonContext, NodeIndex, Tier, Topology, TopologyError};
    use topogen::topology::generate_topology;
    use topogen::utils::validation::validate_topology;

    fn config(yaml: &str) -> Config {
        serde_yaml::from_str(yaml).unwrap()
    }

    fn generate(yaml: &str) -> CommonContext {
        generate_topology(&config(yaml)).unwrap()
    }

    fn topology(context: &CommonContext) -> &Topology {
        context.topology().unwrap()
    }

    fn link_names(topology: &Topology) -> Vec<&str> {
        topology.links().iter().map(|link| link.name()).collect()
    }

    fn full_pattern(s: u32, r: u32, c: u32, d: u32, g: u32, u: u32, e: u32) -> String {
        format!(
            "general:\n  seed: 99\nnetwork:\n  name: full\n  pattern:\n    smo: {}\n    near-rt-ric: {}\n    o-cu: {}\n    o-du: {}\n    fronthaul-gateway: {}\n    o-ru: {}\n    user-equipment: {}\n",
            s, r, c, d, g, u, e
        )
    }

    #[test]
    fn test_node_count_formula() {
        for (s, r, c, d, g, u, e) in [(1, 1, 1, 1, 1, 1, 1), (1, 2, 2, 2, 1, 2, 3), (2, 1, 3, 1, 2, 1, 0)] {
            let context = generate(&full_pattern(s, r, c, d, g, u, e));
            let sr = s * r;
            let src = sr * c;
            // each O-CU is a CP/UP pair, but O-DUs hang off the pair once
            let expected = s + sr + 2 * src + src * d + src * d * g + src * d * g * u + src * d * g * u * e;
            assert_eq!(topology(&context).nodes().len(), expected as usize, "pattern {:?}", (s, r, c, d, g, u, e));
        }
    }

    #[test]
    fn test_link_count_per_tier() {
        let context = generate(&full_pattern(1, 1, 1, 1, 1, 1, 1));
        let topology = topology(&context);

        // RIC 4, O-CU 2x4 + E1, O-DU 2x5, gateway 1, O-RU 1, UE 1
        assert_eq!(topology.links().len(), 4 + 9 + 10 + 3);
    }

    #[test]
    fn test_single_smo_scenario() {
        let context = generate("network:\n  name: one\n  pattern:\n    smo: 1\n");
        let topology = topology(&context);

        assert_eq!(topology.nodes().len(), 1);
        assert!(topology.links().is_empty());
        let names: Vec<&str> = topology.nodes()[0].edge_points().iter().map(|nep| nep.name()).collect();
        assert_eq!(
            names,
            vec!["a1-rest-consumer", "o1-netconf-consumer", "o1-ves-provider", "o1-file-consumer"]
        );
    }

    #[test]
    fn test_two_rics_scenario() {
        let context = generate("network:\n  name: two\n  pattern:\n    smo: 1\n    near-rt-ric: 2\n");
        let topology = topology(&context);

        assert_eq!(topology.nodes().len(), 3);
        assert_eq!(topology.links().len(), 8);
        let smo = topology.nodes()[0].identifier();
        for link in topology.links() {
            let nodes: HashSet<_> = link.ends().iter().map(|end| end.node_uuid).collect();
            assert!(nodes.contains(&smo));
            assert_eq!(nodes.len(), 2);
        }
        assert_eq!(
            &link_names(topology)[..4],
            &[
                "A1-REST|smo-0|->|near-rt-ric-00|",
                "O1-NETCONF|smo-0|->|near-rt-ric-00|",
                "O1-FILE|smo-0|->|near-rt-ric-00|",
                "O1-VES|near-rt-ric-00|->|smo-0|",
            ]
        );
    }

    #[test]
    fn test_o_cu_scenario() {
        let context = generate("network:\n  name: cu\n  pattern:\n    smo: 1\n    near-rt-ric: 1\n    o-cu: 1\n");
        let topology = topology(&context);

        assert_eq!(topology.nodes().len(), 4);
        assert_eq!(topology.links().len(), 4 + 8 + 1);
        let names = link_names(topology);
        assert!(names.contains(&"E1-UNKNOWN|o-cu-cp-000|->|o-cu-up-000|"));
        assert!(names.contains(&"E2-REST|near-rt-ric-00|->|o-cu-cp-000|"));
        assert!(names.contains(&"E2-REST|near-rt-ric-00|->|o-cu-up-000|"));
        assert!(names.contains(&"O1-VES|o-cu-up-000|->|smo-0|"));
    }

    #[test]
    fn test_unknown_entry_scenario() {
        let result = generate_topology(&config("network:\n  name: bogus\n  pattern:\n    bogus: 3\n"));
        assert_eq!(result.unwrap_err(), TopologyError::UnknownTier("bogus".to_string()));
    }

    #[test]
    fn test_generated_topology_is_consistent() {
        let context = generate(&full_pattern(1, 2, 2, 2, 1, 2, 2));
        let topology = topology(&context);

        assert!(validate_topology(topology).is_ok());
        let names: HashSet<&str> = topology.nodes().iter().map(|node| node.name()).collect();
        assert_eq!(names.len(), topology.nodes().len());
    }

    #[test]
    fn test_hop_distances() {
        let context = generate(&full_pattern(1, 1, 1, 1, 1, 1, 1));
        let topology = topology(&context);

        let expected = [
            (Tier::NearRtRic, 1),
            (Tier::OCuCp, 2),
            (Tier::OCuUp, 2),
            (Tier::ODu, 3),
            (Tier::FronthaulGateway, 4),
            (Tier::ORu, 5),
        ];
        for (position, node) in topology.nodes().iter().enumerate() {
            if let Some((_, hops)) = expected.iter().find(|(tier, _)| *tier == node.tier()) {
                assert_eq!(topology.ancestor_distance(NodeIndex(position), Tier::Smo), Some(*hops), "{}", node.name());
            }
        }
    }

    #[test]
    fn test_o_ru_without_gateway() {
        let context = generate(
            "network:\n  name: direct\n  pattern:\n    smo: 1\n    near-rt-ric: 1\n    o-cu: 1\n    o-du: 1\n    o-ru: 1\n",
        );
        let topology = topology(&context);

        assert_eq!(topology.count_tier(Tier::FronthaulGateway), 0);
        assert_eq!(topology.count_tier(Tier::ORu), 1);
        let names = link_names(topology);
        assert!(names.contains(&"OPEN-FRONTHAUL-M-PLANE-NETCONF|smo-0|->|o-ru-00000|"));
        assert!(validate_topology(topology).is_ok());
    }

    #[test]
    fn test_gateway_management_link() {
        let context = generate(&full_pattern(1, 1, 1, 1, 1, 1, 1));
        let names = link_names(topology(&context));

        assert!(names.contains(&"OAM-NETCONF|smo-0|->|fronthaul-gateway-00000|"));
        assert!(names.contains(&"OPEN-FRONTHAUL-M-PLANE-NETCONF|smo-0|->|o-ru-000000|"));
        assert!(names.contains(&"UU-UNKNOWN|user-equipment-0000000|->|o-ru-000000|"));
        assert!(names.contains(&"F1-C-UNKNOWN|o-du-0000|->|o-cu-cp-000|"));
        assert!(names.contains(&"F1-U-UNKNOWN|o-du-0000|->|o-cu-up-000|"));
        assert!(!names.iter().any(|name| name.starts_with("ETH-OFH")));
    }

    #[test]
    fn test_gateway_fronthaul_edge_point_is_unlinked() {
        let context = generate(&full_pattern(1, 1, 1, 1, 1, 1, 1));
        let topology = topology(&context);

        let gateway = topology
            .nodes()
            .iter()
            .find(|node| node.tier() == Tier::FronthaulGateway)
            .unwrap();
        let ofh = gateway.edge_point_by_name("eth-ofh-unknown-provider").unwrap().identifier();
        assert!(topology
            .links()
            .iter()
            .all(|link| link.ends().iter().all(|end| end.node_edge_point_uuid != ofh)));
    }

    #[test]
    fn test_partial_topology_without_smo() {
        let context = generate("network:\n  name: rics\n  pattern:\n    near-rt-ric: 2\n");
        let topology = topology(&context);

        assert_eq!(topology.nodes().len(), 2);
        assert!(topology.links().is_empty());
    }

    #[test]
    fn test_partial_topology_from_o_cu() {
        let context = generate("network:\n  name: cu\n  pattern:\n    o-cu: 1\n    o-du: 1\n");
        let topology = topology(&context);

        // only the E1 and F1 links have both ends inside the generation
        assert_eq!(topology.nodes().len(), 3);
        assert_eq!(
            link_names(topology),
            vec![
                "E1-UNKNOWN|o-cu-cp-0|->|o-cu-up-0|",
                "F1-C-UNKNOWN|o-du-00|->|o-cu-cp-0|",
                "F1-U-UNKNOWN|o-du-00|->|o-cu-up-0|",
            ]
        );
    }

    #[test]
    fn test_o_cloud_branch() {
        let context = generate("network:\n  name: cloud\n  pattern:\n    smo: 1\n    o-cloud: 1\n    near-rt-ric: 1\n");
        let topology = topology(&context);

        assert_eq!(topology.nodes().len(), 3);
        assert_eq!(topology.nodes()[0].edge_points().len(), 5);
        assert_eq!(topology.nodes()[1].tier(), Tier::OCloud);
        let names = link_names(topology);
        assert_eq!(names[0], "O2-REST|smo-0|->|o-cloud-00|");
        assert_eq!(names.len(), 5);
    }

    #[test]
    fn test_connection_points() {
        let context = generate("network:\n  name: ceps\n  connection-points: true\n  pattern:\n    smo: 1\n");
        let topology = topology(&context);

        for nep in topology.nodes()[0].edge_points() {
            assert_eq!(nep.connection_points().len(), 1);
            assert_eq!(nep.connection_points()[0].parent().node_edge_point_uuid, nep.identifier());
        }
        let json = topology.json().unwrap();
        let cep = &json["node"][0]["owned-node-edge-point"][0]["cep-list"]["connection-end-point"][0];
        assert!(cep.get("uuid").is_some());
    }

    #[test]
    fn test_json_projection_is_pure() {
        let context = generate(&full_pattern(1, 1, 1, 1, 0, 0, 0));

        assert_eq!(context.json().unwrap(), context.json().unwrap());
        let json = context.json().unwrap();
        let topology = &json["tapi-common:context"]["tapi-topology:topology-context"]["topology"][0];
        assert_eq!(topology["node"].as_array().map(|nodes| nodes.len()), Some(5));
        assert_eq!(topology["node"][0]["name"][0]["value"], "smo-0");
    }

    #[test]
    fn test_same_seed_same_output() {
        let yaml = full_pattern(1, 2, 1, 1, 1, 1, 1);
        let first = serde_json::to_string(&generate(&yaml)).unwrap();
        let second = serde_json::to_string(&generate(&yaml)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unseeded_runs_share_shape() {
        let yaml = "network:\n  name: shape\n  pattern:\n    smo: 1\n    near-rt-ric: 2\n";
        let first = generate(yaml);
        let second = generate(yaml);

        assert_ne!(topology(&first).identifier(), topology(&second).identifier());
        assert_eq!(link_names(topology(&first)), link_names(topology(&second)));
    }

    #[test]
    fn test_cytoscape_element_count() {
        let context = generate(&full_pattern(1, 1, 1, 1, 1, 1, 1));
        let topology = topology(&context);
        let edge_points: usize = topology.nodes().iter().map(|node| node.edge_points().len()).sum();

        let document = CytoscapeDocument::of(topology);
        assert_eq!(
            document.elements.len(),
            topology.nodes().len() * 2 + edge_points * 2 + topology.links().len()
        );
    }

    #[test]
    fn test_json_config_file_keeps_key_order() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(
            file,
            r#"{{"network": {{"name": "ordered", "pattern": {{"near-rt-ric": 1, "smo": 1}}}}}}"#
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        let context = generate_topology(&config).unwrap();
        let topology = topology(&context);
        assert_eq!(topology.nodes().len(), 1);
        assert_eq!(topology.nodes()[0].tier(), Tier::NearRtRic);
    }

    #[test]
    fn test_explicit_entry_must_be_in_pattern() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "network:\n  name: missing\n  entry: smo\n  pattern:\n    near-rt-ric: 1").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(format!("{:?}", err).contains("smo"));
    }
}
