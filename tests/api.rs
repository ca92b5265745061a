#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use taskd::db::db::Db;
    use taskd::db::tasks::Tasks;
    use taskd::server::router;
    use test_context::{test_context, AsyncTestContext};
    use tower::ServiceExt;

    struct ApiTestContext {
        tasks: Tasks,
        app: Router,
    }

    impl AsyncTestContext for ApiTestContext {
        async fn setup() -> Self {
            let tasks = Tasks::init(Db::open_in_memory().unwrap()).unwrap();
            let app = router(tasks.clone());
            ApiTestContext { tasks, app }
        }
    }

    impl ApiTestContext {
        async fn send(&self, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
            let body = match body {
                Some(body) => Body::from(body.to_string()),
                None => Body::empty(),
            };
            let request = Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(body)
                .unwrap();

            let response = self.app.clone().oneshot(request).await.unwrap();
            let status = response.status();
            let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
            (status, value)
        }

        async fn create(&self, body: Value) -> Value {
            let (status, task) = self.send(Method::POST, "/tasks", Some(&body.to_string())).await;
            assert_eq!(status, StatusCode::CREATED);
            task
        }
    }

    fn sample() -> Value {
        json!({"title": "A", "description": "d", "due_date": "2024-01-01", "status": "open"})
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_create_returns_task_with_id(ctx: &mut ApiTestContext) {
        let task = ctx.create(sample()).await;

        assert!(task["id"].as_i64().unwrap() > 0);
        assert_eq!(task["title"], "A");
        assert_eq!(task["description"], "d");
        assert_eq!(task["due_date"], "2024-01-01");
        assert_eq!(task["status"], "open");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_create_ignores_client_id(ctx: &mut ApiTestContext) {
        let mut body = sample();
        body["id"] = json!(999);

        let task = ctx.create(body).await;
        assert_ne!(task["id"], 999);
        assert_eq!(ctx.tasks.count().unwrap(), 1);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_create_missing_fields_default_to_empty(ctx: &mut ApiTestContext) {
        let task = ctx.create(json!({"title": "only"})).await;

        assert_eq!(task["title"], "only");
        assert_eq!(task["description"], "");
        assert_eq!(task["status"], "");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_create_malformed_json(ctx: &mut ApiTestContext) {
        let (status, body) = ctx.send(Method::POST, "/tasks", Some("{\"title\": ")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body["error"].as_str().unwrap().is_empty());
        assert_eq!(ctx.tasks.count().unwrap(), 0);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_create_wrong_field_type(ctx: &mut ApiTestContext) {
        let (status, body) = ctx.send(Method::POST, "/tasks", Some("{\"title\": 5}")).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("invalid type"));
        assert_eq!(ctx.tasks.count().unwrap(), 0);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_create_array_body_rejected(ctx: &mut ApiTestContext) {
        for body in [r#"["A","d","2024-01-01","open"]"#, "[]"] {
            let (status, response) = ctx.send(Method::POST, "/tasks", Some(body)).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(response["error"], "request body must be a JSON object");
        }
        assert_eq!(ctx.tasks.count().unwrap(), 0);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_create_scalar_body_rejected(ctx: &mut ApiTestContext) {
        for body in ["null", "\"A\"", "42"] {
            let (status, _) = ctx.send(Method::POST, "/tasks", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
        }
        assert_eq!(ctx.tasks.count().unwrap(), 0);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_create_empty_body(ctx: &mut ApiTestContext) {
        let (status, body) = ctx.send(Method::POST, "/tasks", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().contains("EOF"));
        assert_eq!(ctx.tasks.count().unwrap(), 0);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_get_returns_created_task(ctx: &mut ApiTestContext) {
        let created = ctx.create(sample()).await;

        let (status, task) = ctx.send(Method::GET, &format!("/tasks/{}", created["id"]), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(task, created);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_get_missing(ctx: &mut ApiTestContext) {
        let (status, body) = ctx.send(Method::GET, "/tasks/12345", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Task not found"}));
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_get_non_numeric_id(ctx: &mut ApiTestContext) {
        let (status, body) = ctx.send(Method::GET, "/tasks/abc", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Task not found");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_update_replaces_fields(ctx: &mut ApiTestContext) {
        let created = ctx.create(sample()).await;
        let uri = format!("/tasks/{}", created["id"]);
        let changed = json!({"title": "B", "description": "e", "due_date": "2025-02-02", "status": "done"});

        let (status, returned) = ctx.send(Method::PUT, &uri, Some(&changed.to_string())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(returned["id"], created["id"]);
        assert_eq!(returned["title"], "B");

        let (_, stored) = ctx.send(Method::GET, &uri, None).await;
        assert_eq!(stored["title"], "B");
        assert_eq!(stored["description"], "e");
        assert_eq!(stored["due_date"], "2025-02-02");
        assert_eq!(stored["status"], "done");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_update_missing(ctx: &mut ApiTestContext) {
        let (status, body) = ctx.send(Method::PUT, "/tasks/77", Some(&sample().to_string())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Task not found");
        assert_eq!(ctx.tasks.count().unwrap(), 0);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_update_malformed_json_keeps_row(ctx: &mut ApiTestContext) {
        let created = ctx.create(sample()).await;
        let uri = format!("/tasks/{}", created["id"]);

        let (status, _) = ctx.send(Method::PUT, &uri, Some("not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, stored) = ctx.send(Method::GET, &uri, None).await;
        assert_eq!(stored, created);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_update_array_body_keeps_row(ctx: &mut ApiTestContext) {
        let created = ctx.create(sample()).await;
        let uri = format!("/tasks/{}", created["id"]);

        let (status, body) = ctx.send(Method::PUT, &uri, Some(r#"["B","e","2025-02-02","done"]"#)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "request body must be a JSON object");

        let (_, stored) = ctx.send(Method::GET, &uri, None).await;
        assert_eq!(stored, created);
        assert_eq!(ctx.tasks.count().unwrap(), 1);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_update_non_numeric_id(ctx: &mut ApiTestContext) {
        let (status, body) = ctx.send(Method::PUT, "/tasks/abc", Some(&sample().to_string())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Task not found");
        assert_eq!(ctx.tasks.count().unwrap(), 0);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_delete_removes_task(ctx: &mut ApiTestContext) {
        let created = ctx.create(sample()).await;
        let uri = format!("/tasks/{}", created["id"]);

        let (status, body) = ctx.send(Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Task deleted successfully"}));

        let (status, _) = ctx.send(Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_delete_missing(ctx: &mut ApiTestContext) {
        let (status, body) = ctx.send(Method::DELETE, "/tasks/5", None).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Task not found");
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_delete_non_numeric_id(ctx: &mut ApiTestContext) {
        ctx.create(sample()).await;

        let (status, body) = ctx.send(Method::DELETE, "/tasks/abc", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Task not found");
        assert_eq!(ctx.tasks.count().unwrap(), 1);
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_list_empty(ctx: &mut ApiTestContext) {
        let (status, body) = ctx.send(Method::GET, "/tasks", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[test_context(ApiTestContext)]
    #[tokio::test]
    async fn test_list_returns_every_task(ctx: &mut ApiTestContext) {
        let mut created = Vec::new();
        for i in 0..3 {
            created.push(ctx.create(json!({"title": format!("T{}", i), "status": "open"})).await);
        }

        let (status, body) = ctx.send(Method::GET, "/tasks", None).await;
        assert_eq!(status, StatusCode::OK);

        // Order is unspecified
        let listed = body.as_array().unwrap();
        assert_eq!(listed.len(), created.len());
        for task in &created {
            assert!(listed.contains(task));
        }
    }
}
