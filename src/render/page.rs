// src/render/page.rs
use maud::{DOCTYPE, Markup, html};

use crate::config::PageSettings;
use crate::form::FormState;
use crate::render::chart::{ChartView, render_chart};
use crate::render::form::render_form;
use crate::render::rankings::{RankingsView, render_rankings};
use crate::submission::Notice;

/// Everything one render pass needs.
pub struct Page<'a> {
    pub settings: &'a PageSettings,
    pub form: &'a FormState,
    pub notices: &'a [Notice],
    pub rankings: &'a RankingsView,
    pub chart: &'a ChartView,
}

fn render_notice(notice: &Notice) -> Markup {
    let (kind, text) = match notice {
        Notice::Info(text) => ("info", text),
        Notice::Success(text) => ("success", text),
        Notice::Error(text) => ("error", text),
    };
    html! { div class={"notice " (kind)} role="status" { (text) } }
}

pub fn render_page(page: &Page<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (page.settings.title) }
                link rel="stylesheet" href="/static/app.css";
                script src="https://cdn.jsdelivr.net/npm/vega@5" defer {}
                script src="https://cdn.jsdelivr.net/npm/vega-lite@5" defer {}
                script src="https://cdn.jsdelivr.net/npm/vega-embed@6" defer {}
                script src="/static/app.js" defer {}
            }
            body {
                div.layout {
                    aside.hero {
                        img src=(page.settings.hero_image_url) alt="";
                    }
                    main.content {
                        h1 { (page.settings.title) }
                        p { "Take part in a coding mission and submit your result to lift your class up the rankings!" }
                        a.link-button href=(page.settings.party_site_url) target="_blank" rel="noopener" {
                            "🎮 Go to the coding party site"
                        }
                        hr;
                        div.notices {
                            @for notice in page.notices {
                                (render_notice(notice))
                            }
                        }
                        (render_form(page.form))
                        hr;
                        h2 { "✨ Live participation" }
                        (render_rankings(page.rankings))
                        hr;
                        (render_chart(page.chart))
                    }
                }
            }
        }
    }
}
