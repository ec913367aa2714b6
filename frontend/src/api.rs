#[cfg(not(feature = "mock"))]
use gloo_net::http::Request;
#[cfg(not(feature = "mock"))]
use human_detect_shared::ErrorResponse;
use human_detect_shared::{HistoryError, HistoryQuery, HistoryResponse};

#[cfg(not(feature = "mock"))]
use crate::config::api_url;
#[cfg(feature = "mock")]
use crate::models;

/// 按过滤条件获取一页检测历史
///
/// A non-2xx answer becomes [`HistoryError::Api`] carrying the joined
/// `detail[].msg` text; anything that prevents reading a response becomes a
/// transport error.
pub async fn fetch_history(query: &HistoryQuery) -> Result<HistoryResponse, HistoryError> {
    #[cfg(feature = "mock")]
    {
        return models::mock_history_page(query);
    }

    #[cfg(not(feature = "mock"))]
    {
        let url = format!("{}?{}", api_url("history"), query.to_query_string());

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| HistoryError::Network(format!("{:?}", e)))?;

        if !response.ok() {
            let status = response.status();
            let body: ErrorResponse = response
                .json()
                .await
                .map_err(|e| HistoryError::Decode(format!("HTTP {}: {:?}", status, e)))?;
            return Err(HistoryError::Api {
                status,
                message: body.message(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| HistoryError::Decode(format!("{:?}", e)))
    }
}
