mod integration_tests {
    use crate::schemas::StatusResponse;
    use crate::snapshots::{FORECAST_FILE, GRAPH_DIR, HEALTH_FILE, HISTORY_FILE, RISK_FILE};
    use crate::test_utils::{init_test_tracing, setup_test_app, write_snapshot};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::{
        DEFAULT_EXECUTIVE_SUMMARY, ErrorResponse, ExecutiveResponse, ForecastResponse, GraphResponse,
        HealthResponse, ImpactResponse,
    };
    use serde_json::{json, Value};

    fn history(len: usize) -> Value {
        let entries: Vec<Value> = (0..len)
            .map(|i| {
                let score = 80.0 + i as f64;
                json!({
                    "timestamp": format!("2026-01-01T00:00:{:02}Z", i),
                    "health_score": score,
                    "raw": {"health_score": score, "edge_count": 10, "edges": []}
                })
            })
            .collect();
        Value::Array(entries)
    }

    #[tokio::test]
    async fn test_status_check() {
        let _guard = init_test_tracing();
        let (app, _dir) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/status").await;

        response.assert_status(StatusCode::OK);
        let body: StatusResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.data_dir, "available");
    }

    #[tokio::test]
    async fn test_forecast_without_snapshots() {
        let (app, _dir) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/forecast/").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["forecast"], json!({}));
        assert_eq!(body["history"], json!([]));
        assert!(body["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[tokio::test]
    async fn test_forecast_returns_persisted_output_verbatim() {
        let (app, dir) = setup_test_app();
        let expected = json!({
            "status": "success",
            "forecast_next": 91.2,
            "confidence_interval": {"lower": 88.1, "upper": 94.3},
        });
        write_snapshot(dir.path(), FORECAST_FILE, &expected);
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/forecast/").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["forecast"], expected);
    }

    #[tokio::test]
    async fn test_forecast_history_drops_raw_payload() {
        let (app, dir) = setup_test_app();
        write_snapshot(dir.path(), HISTORY_FILE, &history(12));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/forecast/").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        let entries = body["history"].as_array().unwrap();
        assert_eq!(entries.len(), 12);
        assert_eq!(entries[11]["health_score"], 91.0);
        assert!(entries.iter().all(|entry| entry.get("raw").is_none()));

        let typed: ForecastResponse = response.json();
        assert_eq!(typed.history[0].timestamp, "2026-01-01T00:00:00Z");
    }

    #[tokio::test]
    async fn test_served_forecast_derives_a_chart() {
        let (app, dir) = setup_test_app();
        write_snapshot(dir.path(), HISTORY_FILE, &history(10));
        write_snapshot(
            dir.path(),
            FORECAST_FILE,
            &json!({
                "status": "success",
                "forecast_next": 90.5,
                "confidence_interval": {"lower": 88.0, "upper": 93.0},
                "rmse": 0.41,
                "residual_variance": 0.17,
                "confidence_score": 0.82,
                "volatility": "medium"
            }),
        );
        let server = TestServer::new(app).unwrap();

        let response: ForecastResponse = server.get("/api/forecast/").await.json();
        let view = chart::derive(&response, &chart::ChartConfig::default());

        let model = view.model().expect("served snapshot should chart");
        assert_eq!(model.series().points().len(), 11);
        assert_eq!(model.resolve_index(model.x_scale().apply(10.0)), Some(10));
    }

    #[tokio::test]
    async fn test_malformed_forecast_is_an_error_response() {
        let (app, dir) = setup_test_app();
        std::fs::write(dir.path().join(FORECAST_FILE), "{\"forecast_next\": ").unwrap();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/forecast/").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response.json();
        assert!(!body.success);
        assert_eq!(body.code, "SNAPSHOT_MALFORMED");
    }

    #[tokio::test]
    async fn test_health_snapshot() {
        let (app, dir) = setup_test_app();
        write_snapshot(
            dir.path(),
            HEALTH_FILE,
            &json!({
                "architecture_health_score": 74.5,
                "risk_label": "moderate",
                "stability_index": 0.66,
                "confidence": 0.7
            }),
        );
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/health/").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.score(), Some(74.5));
        assert_eq!(body.risk_label.as_deref(), Some("moderate"));
        assert!(!body.timestamp.is_empty());
    }

    #[tokio::test]
    async fn test_health_keeps_unknown_engine_fields() {
        let (app, dir) = setup_test_app();
        write_snapshot(
            dir.path(),
            HEALTH_FILE,
            &json!({
                "architecture_health_score": 61.0,
                "coupling_density": 0.42,
                "hotspots": ["billing", "auth"]
            }),
        );
        let server = TestServer::new(app).unwrap();

        let body: Value = server.get("/api/health/").await.json();

        assert_eq!(body["architecture_health_score"], 61.0);
        assert_eq!(body["coupling_density"], 0.42);
        assert_eq!(body["hotspots"], json!(["billing", "auth"]));
    }

    #[tokio::test]
    async fn test_health_without_snapshot_has_only_timestamp() {
        let (app, _dir) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let body: Value = server.get("/api/health/").await.json();

        let keys: Vec<&String> = body.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["timestamp"]);
    }

    #[tokio::test]
    async fn test_executive_summary() {
        let (app, dir) = setup_test_app();
        write_snapshot(dir.path(), FORECAST_FILE, &json!({"forecast_next": 77.0}));
        write_snapshot(dir.path(), RISK_FILE, &json!({"anomalies": 2}));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/executive/").await;

        response.assert_status(StatusCode::OK);
        let body: ExecutiveResponse = response.json();
        assert_eq!(body.summary.as_deref(), Some(DEFAULT_EXECUTIVE_SUMMARY));
        assert_eq!(body.forecast_outlook, json!({"forecast_next": 77.0}));
        assert_eq!(body.risk_analysis, json!({"anomalies": 2}));
    }

    #[tokio::test]
    async fn test_impact_wraps_risk_output() {
        let (app, dir) = setup_test_app();
        let ranking = json!({"top_impact": [{"node": "billing.charge", "score": 0.93}]});
        write_snapshot(dir.path(), RISK_FILE, &ranking);
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/impact/").await;

        response.assert_status(StatusCode::OK);
        let body: ImpactResponse = response.json();
        assert_eq!(body.impact_ranking, ranking);
        assert!(!body.timestamp.is_empty());
    }

    #[tokio::test]
    async fn test_impact_without_snapshot_is_empty_object() {
        let (app, _dir) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let body: Value = server.get("/api/impact/").await.json();

        assert_eq!(body["impact_ranking"], json!({}));
    }

    #[tokio::test]
    async fn test_graph_without_snapshot_dir_is_empty() {
        let (app, _dir) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/graph/").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert_eq!(body["nodes"], json!([]));
        assert_eq!(body["edges"], json!([]));
        assert!(body["timestamp"].as_str().is_some_and(|t| !t.is_empty()));
    }

    #[tokio::test]
    async fn test_graph_serves_latest_snapshot() {
        let (app, dir) = setup_test_app();
        let graphs = dir.path().join(GRAPH_DIR);
        std::fs::create_dir_all(&graphs).unwrap();
        write_snapshot(
            &graphs,
            "2026-01-01T00-00-00.json",
            &json!({"nodes": [{"id": "old"}], "edges": []}),
        );
        write_snapshot(
            &graphs,
            "2026-02-01T00-00-00.json",
            &json!({
                "nodes": [{"id": "api"}, {"id": "db"}],
                "edges": [{"source": "api", "target": "db"}]
            }),
        );
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/graph/").await;

        response.assert_status(StatusCode::OK);
        let body: GraphResponse = response.json();
        assert_eq!(body.nodes, vec![json!({"id": "api"}), json!({"id": "db"})]);
        assert_eq!(body.edges, vec![json!({"source": "api", "target": "db"})]);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let (app, _dir) = setup_test_app();
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api-docs/openapi.json").await;

        response.assert_status(StatusCode::OK);
        let body: Value = response.json();
        assert!(body["paths"].get("/api/forecast/").is_some());
        assert!(body["paths"].get("/api/impact/").is_some());
        assert!(body["paths"].get("/api/graph/").is_some());
    }
}
