//! `hd-cli history`.

use anyhow::Result;
use human_detect_shared::HistoryError;

use crate::{cli::HistoryArgs, client::HistoryClient, config, output};

/// Fetch one page or every page and print it.
pub async fn run(args: &HistoryArgs) -> Result<()> {
    let query = config::load_query(args)?;
    let client = HistoryClient::new(&args.api_base)?;
    tracing::debug!(url = %client.history_url(), "querying history service");

    let (response, page) = if args.all {
        let response = client
            .fetch_all(&query.criteria, query.page.size)
            .await
            .map_err(describe)?;
        (response, None)
    } else {
        let response = client.fetch_page(&query).await.map_err(describe)?;
        (response, Some(query.page))
    };

    let rendered = output::render(&response, page, args.format)?;
    println!("{rendered}");
    Ok(())
}

// 终端没有单独的开发者控制台：两类错误都直接报告给用户
fn describe(err: HistoryError) -> anyhow::Error {
    let user_facing = err.is_user_facing();
    let err = anyhow::Error::new(err);
    if user_facing {
        err.context("history service rejected the query")
    } else {
        err.context("could not reach the history service")
    }
}
