use towngraph::{Distance, Graph, Town};

/// Seven towns `a` to `g` linked by twelve roads.
pub fn town_graph() -> Graph {
    let roads = [
        ("a", "b", 4, "AB"),
        ("a", "c", 3, "AC"),
        ("b", "c", 5, "BC"),
        ("b", "d", 2, "BD"),
        ("b", "e", 8, "BE"),
        ("c", "d", 6, "CD"),
        ("c", "e", 1, "CE"),
        ("d", "e", 3, "DE"),
        ("d", "f", 5, "DF"),
        ("e", "f", 6, "EF"),
        ("e", "g", 7, "EG"),
        ("f", "g", 2, "FG"),
    ];

    let mut graph = Graph::new();

    for name in ["a", "b", "c", "d", "e", "f", "g"] {
        graph.add_vertex(Town::new(name)).unwrap();
    }

    for (source, destination, miles, name) in roads {
        graph
            .add_edge(
                &Town::new(source),
                &Town::new(destination),
                Distance::from_miles(miles),
                name,
            )
            .unwrap();
    }

    graph
}

/// Adds a second component `x - y - z` that is not connected to the rest of the graph.
pub fn with_island(mut graph: Graph) -> Graph {
    let (x, y, z) = (Town::new("x"), Town::new("y"), Town::new("z"));

    for town in [&x, &y, &z] {
        graph.add_vertex(town.clone()).unwrap();
    }

    graph.add_edge(&x, &y, Distance::from_miles(1), "XY").unwrap();
    graph.add_edge(&y, &z, Distance::from_miles(1), "YZ").unwrap();

    graph
}
