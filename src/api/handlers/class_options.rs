// src/api/handlers/class_options.rs
use actix_web::{HttpResponse, Result, web};
use serde::{Deserialize, Serialize};

use crate::catalog;

#[derive(Deserialize)]
pub struct ClassOptionsQuery {
    #[serde(default)]
    pub grade: Option<String>,
}

#[derive(Serialize)]
pub struct ClassOptionsResponse {
    pub grade: Option<u8>,
    pub max_class: u8,
    pub options: Vec<u8>,
}

/// GET /api/v1/class-options?grade=N - Class numbers selectable for a grade
pub async fn get_class_options(query: web::Query<ClassOptionsQuery>) -> Result<HttpResponse> {
    let grade = query
        .grade
        .as_deref()
        .and_then(|g| g.trim().parse::<u8>().ok())
        .filter(|g| catalog::GRADES.contains(g));

    Ok(HttpResponse::Ok().json(ClassOptionsResponse {
        grade,
        max_class: catalog::max_class(grade),
        options: catalog::class_options(grade),
    }))
}
