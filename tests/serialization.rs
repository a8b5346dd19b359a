//! The node tree derives `serde::Serialize`/`Deserialize` so a downstream
//! renderer or a golden-file test can transport a parse tree as JSON;
//! this exercises that round trip end to end.

use rulemark::{parse, Node};

#[test]
fn parse_tree_round_trips_through_json() {
    let nodes = parse("# Title\n\n[a][1]\n\n[1]: http://example.com \"t\"\n\n");
    let json = serde_json::to_string(&nodes).expect("serialize parse tree");
    let restored: Vec<Node> = serde_json::from_str(&json).expect("deserialize parse tree");
    assert_eq!(nodes, restored);
}
