// src/render/rankings.rs
use maud::{Markup, html};

use crate::models::{FetchResult, TopStudent};

pub const ACTION: &str = "top_students";

#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    pub rank: usize,
    pub marker: String,
    pub student: String,
    pub count: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RankingsView {
    Unavailable(String),
    Empty,
    Ranked(Vec<RankedRow>),
}

/// Medals for the podium, the plain rank number below it.
pub fn rank_marker(rank: usize) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        n => format!("{}.", n),
    }
}

/// Builds the list in the order the backend sent it; rank is the 1-based
/// position.
pub fn rankings_view(result: &FetchResult) -> RankingsView {
    let data = match result {
        FetchResult::Success { data } => data,
        FetchResult::Error { message } => return RankingsView::Unavailable(message.clone()),
    };

    if data.is_null() {
        return RankingsView::Empty;
    }

    let students: Vec<TopStudent> = match serde_json::from_value(data.clone()) {
        Ok(students) => students,
        Err(e) => {
            log::warn!("⚠️  unexpected {} data: {}", ACTION, e);
            return RankingsView::Unavailable(format!("unexpected data from backend: {}", e));
        }
    };

    if students.is_empty() {
        return RankingsView::Empty;
    }

    RankingsView::Ranked(
        students
            .into_iter()
            .enumerate()
            .map(|(i, s)| RankedRow {
                rank: i + 1,
                marker: rank_marker(i + 1),
                count: s.count_label(),
                student: s.student,
            })
            .collect(),
    )
}

pub fn render_rankings(view: &RankingsView) -> Markup {
    html! {
        section.rankings {
            h3 { "🏆 Top participants" }
            @match view {
                RankingsView::Unavailable(message) => {
                    div.notice.error { "Could not load the rankings: " (message) }
                }
                RankingsView::Empty => {
                    div.notice.info { "🚀 Nobody has taken part yet. Be the first!" }
                }
                RankingsView::Ranked(rows) => {
                    ol.ranking-list {
                        @for row in rows {
                            li.ranking-row.podium[row.rank <= 3] data-rank=(row.rank) {
                                span.marker { (row.marker) }
                                " "
                                strong { (row.student) }
                                " (" (row.count) " participations)"
                            }
                        }
                    }
                }
            }
        }
    }
}
