// Mock 模式下的本地历史数据（无需启动后端）
use human_detect_shared::{HistoryError, HistoryQuery, HistoryRecord, HistoryResponse};

const MOCK_RECORD_COUNT: i64 = 37;

/// Serve one page of an in-memory history, filtered the way the service does.
pub fn mock_history_page(query: &HistoryQuery) -> Result<HistoryResponse, HistoryError> {
    let criteria = &query.criteria;
    let mut problems = Vec::new();

    let query_id = match criteria.query_id.trim() {
        "" => None,
        raw => match raw.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => {
                problems.push("Invalid query id. Must be an integer.");
                None
            },
        },
    };
    for time in [&criteria.time_min, &criteria.time_max] {
        if !time.is_empty() && !is_service_timestamp(time) {
            problems.push("Invalid time format. Must be in the format: YYYY-MM-DD_HH-MM-SS");
        }
    }
    if !problems.is_empty() {
        return Err(HistoryError::Api {
            status: 422,
            message: problems.join("\n"),
        });
    }

    // 固定宽度时间戳，字典序即时间序
    let matching: Vec<HistoryRecord> = mock_records()
        .into_iter()
        .filter(|r| query_id.map_or(true, |id| r.query_id == id))
        .filter(|r| criteria.time_min.is_empty() || r.time >= criteria.time_min)
        .filter(|r| criteria.time_max.is_empty() || r.time <= criteria.time_max)
        .filter(|r| criteria.num_humans_min.map_or(true, |min| r.num_humans >= min))
        .filter(|r| criteria.num_humans_max.map_or(true, |max| r.num_humans <= max))
        .collect();

    let total = matching.len() as u64;
    let records = matching
        .into_iter()
        .skip(query.page.offset() as usize)
        .take(query.page.size as usize)
        .collect();

    Ok(HistoryResponse {
        total,
        records,
    })
}

fn mock_records() -> Vec<HistoryRecord> {
    (1..=MOCK_RECORD_COUNT)
        .map(|id| {
            let minutes = id * 7;
            let time = format!("2024-05-01_{:02}-{:02}-00", 8 + minutes / 60, minutes % 60);
            HistoryRecord {
                query_id: id,
                query_image_file: format!("media_storage/queries/{time}.png"),
                result_image_file: format!("media_storage/results/{time}.png"),
                time,
                num_humans: (id * 5) % 9,
            }
        })
        .collect()
}

fn is_service_timestamp(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 19
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 | 13 | 16 => *b == b'-',
            10 => *b == b'_',
            _ => b.is_ascii_digit(),
        })
}
