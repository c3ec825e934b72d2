pub mod lane_graph;
