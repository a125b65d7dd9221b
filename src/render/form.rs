// src/render/form.rs
use maud::{Markup, html};

use crate::catalog;
use crate::form::FormState;
use crate::submission::SUBMITTING;

fn select_options<T: ToString>(values: impl IntoIterator<Item = T>, current: &str, blank: &str) -> Markup {
    html! {
        option value="" selected[current.is_empty()] { (blank) }
        @for value in values {
            @let value = value.to_string();
            option value=(value) selected[value == current] { (value) }
        }
    }
}

pub fn render_form(state: &FormState) -> Markup {
    html! {
        section.submit-form {
            h2 { "🎉 Submit your mission result" }
            form id="mission-form" method="post" action="/submit" enctype="multipart/form-data" {
                h4 { "Student" }
                div.student-row {
                    select #grade name="grade" aria-label="Grade" {
                        (select_options(catalog::GRADES, &state.grade, "Grade"))
                    }
                    select id="class_value" name="class_value" aria-label="Class"
                        data-selected=(state.class_value) {
                        (select_options(state.class_options(), &state.class_value, "Class"))
                    }
                    select #num name="num" aria-label="Number" {
                        (select_options(1..=catalog::MAX_STUDENT_NUMBER, &state.num, "No."))
                    }
                    input #name type="text" name="name" placeholder="Name" aria-label="Name"
                        value=(state.name);
                }
                hr;
                h4 { "Mission" }
                select #mission name="mission" aria-label="Mission" {
                    (select_options(catalog::MISSIONS, &state.mission, "Choose the coding-party mission you completed"))
                }
                hr;
                h4 { "Certificate or activity screenshot" }
                input #attachment type="file" name="attachment"
                    accept=".png,.jpg,.jpeg,image/png,image/jpeg";
                div.notice.info id="submit-status" hidden data-text=(SUBMITTING) {}
                button.submit type="submit" { "🎉 Done, submit!" }
            }
        }
    }
}
