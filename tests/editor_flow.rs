use mindlayout::connection::{ConnectionManager, remove_between};
use mindlayout::model::{MindMapContent, Node};
use mindlayout::{ConnectError, Edge, LayoutEngine, UnreachablePolicy};

fn map(ids: &[&str], pairs: &[(&str, &str)]) -> MindMapContent {
    MindMapContent {
        nodes: ids.iter().map(|id| Node::new(*id).with_label(*id)).collect(),
        edges: pairs.iter().map(|(s, t)| Edge::between(*s, *t)).collect(),
        version: "1.0".to_string(),
    }
}

#[test]
fn levels_match_shortest_hop_count() {
    // Acyclic, with two routes to "leaf" of different lengths.
    let content = map(
        &["root", "a", "b", "c", "leaf"],
        &[
            ("root", "a"),
            ("a", "b"),
            ("b", "c"),
            ("c", "leaf"),
            ("root", "b"),
            ("a", "leaf"),
        ],
    );
    let arrangement = LayoutEngine::default().arrange(&content.nodes, &content.edges);
    let levels = &arrangement.levels;

    assert_eq!(levels.get("root"), Some(0));
    assert_eq!(levels.get("a"), Some(1));
    assert_eq!(levels.get("b"), Some(1));
    assert_eq!(levels.get("c"), Some(2));
    assert_eq!(levels.get("leaf"), Some(2));
}

#[test]
fn fan_out_scenario() {
    let content = map(&["n1", "n2", "n3"], &[("n1", "n2"), ("n1", "n3")]);
    let arrangement = LayoutEngine::default().arrange(&content.nodes, &content.edges);

    let [n1, n2, n3] = [0, 1, 2].map(|i| arrangement.nodes[i].position);
    assert_eq!(arrangement.levels.get("n1"), Some(0));
    assert_eq!(arrangement.levels.get("n2"), Some(1));
    assert_eq!(arrangement.levels.get("n3"), Some(1));
    assert_eq!(n2.x, n3.x);
    assert_ne!(n2.y, n3.y);
    assert!(n1.x < n2.x);
}

#[test]
fn cycle_scenario() {
    let content = map(&["n1", "n2"], &[("n1", "n2"), ("n2", "n1")]);
    let arrangement = LayoutEngine::default().arrange(&content.nodes, &content.edges);

    assert_eq!(arrangement.levels.len(), 2);
    assert_eq!(arrangement.levels.get("n2"), Some(1));
}

#[test]
fn empty_map_is_noop() {
    assert!(LayoutEngine::default().layout(&[], &[]).is_empty());
}

#[test]
fn unreachable_policies_differ() {
    let content = map(&["root", "child", "island"], &[("root", "child")]);

    let zero = LayoutEngine::default()
        .with_unreachable(UnreachablePolicy::LevelZero)
        .arrange(&content.nodes, &content.edges);
    let trailing = LayoutEngine::default()
        .with_unreachable(UnreachablePolicy::TrailingLevel)
        .arrange(&content.nodes, &content.edges);

    assert_eq!(zero.levels.get("island"), Some(0));
    assert_eq!(trailing.levels.get("island"), Some(2));
    assert_ne!(zero.nodes[0].position, zero.nodes[2].position);
}

#[test]
fn connect_then_arrange() {
    let mut content = map(&["root", "a", "b"], &[("root", "a")]);
    let mut manager = ConnectionManager::default();

    // Gesture from a to b.
    manager.begin_connection("a");
    let edge = manager.complete_connection("b").unwrap().unwrap();
    content.edges.push(edge);
    assert_eq!(manager.connecting_from(), None);

    let arranged = LayoutEngine::default().layout(&content.nodes, &content.edges);
    assert!(arranged[2].position.x > arranged[1].position.x);

    // Dropping back on the source is reported, not fatal.
    manager.begin_connection("b");
    assert_eq!(
        manager.complete_connection("b"),
        Some(Err(ConnectError::SelfConnection("b".to_string())))
    );
}

#[test]
fn removing_node_and_edges() {
    let mut content = map(&["root", "a", "b"], &[("root", "a"), ("a", "b"), ("root", "b")]);
    assert_eq!(remove_between(&mut content.edges, "root", "b"), 1);
    assert!(content.remove_node("a"));

    assert!(content.edges.is_empty());
    let arranged = LayoutEngine::default().arrange(&content.nodes, &content.edges);
    assert_eq!(arranged.levels.get("b"), Some(1));
}

#[test]
fn saved_map_round_trip_through_layout() {
    let json = r#"{
        "nodes": [
            { "id": "root", "type": "materialNode", "position": { "x": 0, "y": 0 },
              "data": { "label": "资料总览", "materials": [] } },
            { "id": "node_1", "type": "materialNode", "position": { "x": 0, "y": 0 },
              "data": { "label": "前端开发" }, "style": { "width": 120, "height": 60 } }
        ],
        "edges": [ { "id": "edge-root-node_1", "source": "root", "target": "node_1" } ],
        "version": "1.0"
    }"#;
    let mut content = MindMapContent::from_json(json).unwrap();
    let before = content.clone();

    content.nodes = LayoutEngine::default().layout(&content.nodes, &content.edges);
    let saved = MindMapContent::from_json(&content.to_json().unwrap()).unwrap();

    assert_eq!(saved.edges, before.edges);
    assert_eq!(saved.nodes[0].data, before.nodes[0].data);
    assert_eq!(saved.nodes[1].style, before.nodes[1].style);
    assert_ne!(saved.nodes[1].position, before.nodes[1].position);
}
