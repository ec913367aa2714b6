//! Integration tests for the history client.

#[cfg(test)]
mod tests {
    use hd_cli::client::HistoryClient;
    use human_detect_shared::{FilterCriteria, HistoryError, HistoryQuery, PageState};
    use serde_json::json;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn record(query_id: i64) -> serde_json::Value {
        json!({
            "query_id": query_id,
            "time": "2024-05-01_10-00-00",
            "query_image_file": format!("media_storage/queries/{query_id}.png"),
            "result_image_file": format!("media_storage/results/{query_id}.png"),
            "num_humans": query_id % 3,
        })
    }

    fn page_body(total: u64, ids: std::ops::RangeInclusive<i64>) -> serde_json::Value {
        json!({
            "total": total,
            "records": ids.map(record).collect::<Vec<_>>(),
        })
    }

    fn client_for(server: &MockServer) -> HistoryClient {
        HistoryClient::new(&format!("{}/api/v1/", server.uri())).expect("build client")
    }

    #[tokio::test]
    async fn sends_every_parameter_even_when_unfiltered() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/history"))
            .and(query_param("query_id", ""))
            .and(query_param("time_min", ""))
            .and(query_param("time_max", ""))
            .and(query_param("num_humans_min", ""))
            .and(query_param("num_humans_max", ""))
            .and(query_param("page_index", "1"))
            .and(query_param("page_size", "10"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(3, 1..=3)))
            .expect(1)
            .mount(&server)
            .await;

        let query = HistoryQuery::new(FilterCriteria::default(), PageState::first());
        let page = client_for(&server).fetch_page(&query).await.expect("page");
        assert_eq!(page.total, 3);
        assert_eq!(page.records.len(), 3);
        assert_eq!(page.records[2].query_id, 3);
    }

    #[tokio::test]
    async fn forwards_filters_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/history"))
            .and(query_param("query_id", "17"))
            .and(query_param("time_min", "2024-05-01_00-00-00"))
            .and(query_param("num_humans_max", "2"))
            .and(query_param("page_index", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 1..=0)))
            .expect(1)
            .mount(&server)
            .await;

        let criteria = FilterCriteria {
            query_id: "17".to_string(),
            time_min: "2024-05-01_00-00-00".to_string(),
            num_humans_max: Some(2),
            ..FilterCriteria::default()
        };
        let query = HistoryQuery::new(
            criteria,
            PageState {
                index: 2,
                size: 10,
            },
        );
        let page = client_for(&server).fetch_page(&query).await.expect("page");
        assert_eq!(page.total, 0);
        assert!(page.records.is_empty());
    }

    #[tokio::test]
    async fn unprocessable_entity_becomes_api_error_with_joined_detail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/history"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "detail": [{"msg": "time_min invalid"}, {"msg": "time_max invalid"}]
            })))
            .mount(&server)
            .await;

        let query = HistoryQuery::new(FilterCriteria::default(), PageState::first());
        let err = client_for(&server).fetch_page(&query).await.expect_err("422");
        assert_eq!(
            err,
            HistoryError::Api {
                status: 422,
                message: "time_min invalid\ntime_max invalid".to_string(),
            }
        );
        assert!(err.is_user_facing());
    }

    #[tokio::test]
    async fn malformed_body_is_a_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/history"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let query = HistoryQuery::new(FilterCriteria::default(), PageState::first());
        let err = client_for(&server).fetch_page(&query).await.expect_err("bad body");
        assert!(matches!(err, HistoryError::Decode(_)), "{err:?}");
        assert!(!err.is_user_facing());
    }

    #[tokio::test]
    async fn unreachable_service_is_a_network_error() {
        // Reserve a port, then close it so the connection is refused.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().expect("local addr").port();
        drop(listener);
        let client =
            HistoryClient::new(&format!("http://127.0.0.1:{port}/api/v1")).expect("build client");

        let query = HistoryQuery::new(FilterCriteria::default(), PageState::first());
        let err = client.fetch_page(&query).await.expect_err("server is gone");
        assert!(matches!(err, HistoryError::Network(_)), "{err:?}");
    }

    #[tokio::test]
    async fn fetch_all_walks_until_last_page() {
        let server = MockServer::start().await;
        for (index, ids) in [(1, 1..=10), (2, 11..=20), (3, 21..=25)] {
            Mock::given(method("GET"))
                .and(path("/api/v1/history"))
                .and(query_param("page_index", index.to_string()))
                .respond_with(ResponseTemplate::new(200).set_body_json(page_body(25, ids)))
                .expect(1)
                .mount(&server)
                .await;
        }

        let all = client_for(&server)
            .fetch_all(&FilterCriteria::default(), 10)
            .await
            .expect("all pages");
        assert_eq!(all.total, 25);
        assert_eq!(all.records.len(), 25);
        assert_eq!(all.records.last().map(|r| r.query_id), Some(25));
    }

    #[tokio::test]
    async fn fetch_all_with_no_matches_makes_one_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/history"))
            .respond_with(ResponseTemplate::new(200).set_body_json(page_body(0, 1..=0)))
            .expect(1)
            .mount(&server)
            .await;

        let all = client_for(&server)
            .fetch_all(&FilterCriteria::default(), 10)
            .await
            .expect("empty history");
        assert_eq!(all.total, 0);
        assert!(all.records.is_empty());
    }
}
