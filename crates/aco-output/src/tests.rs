//! Integration tests for aco-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvHistoryWriter;
    use crate::row::{ImprovementRow, StepSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn step_row(step: u64, best: Option<f64>) -> StepSummaryRow {
        StepSummaryRow { step, successes: 3, failures: 17, step_best: best, best_cost: best }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvHistoryWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("step_history.csv").exists());
        assert!(dir.path().join("best_history.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvHistoryWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("step_history.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["step", "successes", "failures", "step_best", "best_cost"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("best_history.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["step", "cost", "path"]);
    }

    #[test]
    fn csv_step_rows() {
        let dir = tmp();
        let mut w = CsvHistoryWriter::new(dir.path()).unwrap();
        w.write_step_summary(&step_row(0, None)).unwrap();
        w.write_step_summary(&step_row(1, Some(42.5))).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("step_history.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "0");
        assert_eq!(&rows[0][3], "");     // no step best yet
        assert_eq!(&rows[1][1], "3");    // successes
        assert_eq!(&rows[1][4], "42.5"); // best_cost
    }

    #[test]
    fn csv_improvement_path_space_separated() {
        let dir = tmp();
        let mut w = CsvHistoryWriter::new(dir.path()).unwrap();
        w.write_improvement(&ImprovementRow { step: 4, cost: 9.0, path: vec![2, 0, 1] }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("best_history.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "4");
        assert_eq!(&rows[0][1], "9");
        assert_eq!(&rows[0][2], "2 0 1");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvHistoryWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }
}

#[cfg(test)]
mod json_tests {
    use aco_engine::{BestSnapshot, EdgeView, GraphSnapshot, NodeView};
    use serde_json::{Value, json};
    use tempfile::TempDir;

    use crate::json::{JsonSnapshotWriter, best_json, graph_json};
    use crate::row::ImprovementRow;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn small_graph() -> GraphSnapshot {
        GraphSnapshot {
            nodes: vec![
                NodeView { id: 0, x: 1.0, y: 2.0 },
                NodeView { id: 1, x: 3.5, y: 4.0 },
            ],
            edges: vec![EdgeView { from: 0, to: 1, weight: 2.5 }],
        }
    }

    fn parse(s: &str) -> Value {
        serde_json::from_str(s).unwrap()
    }

    #[test]
    fn graph_shape() {
        let v = parse(&graph_json(&small_graph()).unwrap());
        assert_eq!(
            v,
            json!({
                "nodes": [{"id": 0, "x": 1.0, "y": 2.0}, {"id": 1, "x": 3.5, "y": 4.0}],
                "edges": [{"from": 0, "to": 1, "weight": 2.5}],
            })
        );
    }

    #[test]
    fn best_shape() {
        let best = BestSnapshot { cost: Some(5.0), path: vec![0, 1, 2, 3, 4] };
        let v = parse(&best_json(&best).unwrap());
        assert_eq!(v, json!({"bestDist": 5.0, "bestPath": [0, 1, 2, 3, 4]}));
    }

    #[test]
    fn empty_best_is_null() {
        let v = parse(&best_json(&BestSnapshot::default()).unwrap());
        assert_eq!(v, json!({"bestDist": null, "bestPath": []}));
    }

    #[test]
    fn writer_keeps_best_current() {
        let dir = tmp();
        let mut w = JsonSnapshotWriter::new(dir.path(), &small_graph()).unwrap();

        let graph = std::fs::read_to_string(dir.path().join("graph.json")).unwrap();
        assert_eq!(parse(&graph)["edges"][0]["weight"], json!(2.5));
        let best = std::fs::read_to_string(dir.path().join("best.json")).unwrap();
        assert_eq!(parse(&best)["bestDist"], Value::Null);

        w.write_improvement(&ImprovementRow { step: 2, cost: 7.25, path: vec![1, 0] }).unwrap();
        let best = std::fs::read_to_string(dir.path().join("best.json")).unwrap();
        assert_eq!(parse(&best), json!({"bestDist": 7.25, "bestPath": [1, 0]}));
    }
}

#[cfg(test)]
mod observer_tests {
    use aco_core::{NodeId, Point};
    use aco_engine::{Engine, EngineBuilder};
    use aco_graph::GraphBuilder;
    use tempfile::TempDir;

    use crate::csv::CsvHistoryWriter;
    use crate::json::JsonSnapshotWriter;
    use crate::observer::EngineOutputObserver;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn integration_csv() {
        let mut engine = Engine::initialize(8, 1);
        let dir = tmp();
        let writer = CsvHistoryWriter::new(dir.path()).unwrap();
        let mut obs = EngineOutputObserver::new(writer);
        engine.run_steps(6, &mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("step_history.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(&rows[5][0], "5");
    }

    #[test]
    fn integration_csv_and_json() {
        // Unit ring: the first step always finds the cost-4 tour.
        let mut b = GraphBuilder::new();
        for i in 0..4 {
            b.add_node(Point::new(i as f64, 0.0));
        }
        for i in 0..4 {
            b.add_edge(NodeId(i), NodeId((i + 1) % 4), 1.0).unwrap();
        }
        let mut engine = EngineBuilder::new(b.build()).build().unwrap();

        let dir = tmp();
        let history = CsvHistoryWriter::new(dir.path()).unwrap();
        let snapshots = JsonSnapshotWriter::new(dir.path(), &engine.current_graph()).unwrap();
        let mut obs = EngineOutputObserver::new((history, snapshots));
        engine.run_steps(3, &mut obs);
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("best_history.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1, "ties never replace the best");
        assert_eq!(&rows[0][1], "4");

        let best = std::fs::read_to_string(dir.path().join("best.json")).unwrap();
        let v: serde_json::Value = serde_json::from_str(&best).unwrap();
        assert_eq!(v["bestDist"], serde_json::json!(4.0));
        assert_eq!(v["bestPath"].as_array().unwrap().len(), 4);
    }
}
