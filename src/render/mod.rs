// src/render/mod.rs
pub mod chart;
pub mod form;
pub mod page;
pub mod rankings;

use crate::backend::DataService;
use crate::fetch::{FetchCache, fetch};

pub use chart::ChartView;
pub use page::{Page, render_page};
pub use rankings::RankingsView;

/// Reads both leaderboard sections, one after the other. A failure in one
/// does not stop the other.
pub async fn load_sections(
    cache: &mut FetchCache,
    service: &dyn DataService,
) -> (RankingsView, ChartView) {
    let top = fetch(cache, service, rankings::ACTION).await;
    let rankings = rankings::rankings_view(&top);

    let by_class = fetch(cache, service, chart::ACTION).await;
    let chart = chart::chart_view(&by_class);

    (rankings, chart)
}
