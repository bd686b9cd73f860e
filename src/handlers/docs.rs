//! HTML documentation page served at `GET /api`.

use crate::models::{Appointment, Doctor, MedicalRecord, Patient, Resource};
use axum::response::Html;

const STYLE: &str = "body { font-family: Arial, sans-serif; margin: 0; padding: 0; background-color: #f4f4f4; color: #333; }\
 h1, h2 { color: #5a5a5a; }\
 ul { list-style-type: none; padding: 0; }\
 li { margin: 10px 0; }\
 code { background-color: #eee; padding: 2px 4px; border-radius: 3px; }\
 .container { max-width: 760px; margin: auto; padding: 20px; background-color: #fff; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }";

fn endpoints<R: Resource>() -> String {
    let base = format!("/api/{}", R::PATH);
    let fields = std::iter::once(R::TABLE.key)
        .chain(R::TABLE.columns.iter().copied())
        .collect::<Vec<_>>()
        .join(", ");
    let rows = [
        format!("GET {} - Retrieves all {}", base, R::PLURAL),
        format!("GET {}/(id) - Retrieves a specific {}", base, R::NOUN),
        format!("POST {} - Creates a new {}", base, R::NOUN),
        format!("PUT {} - Updates a {} (id in body)", base, R::NOUN),
        format!("PUT {}/(id) - Updates a specific {}", base, R::NOUN),
        format!("DELETE {}/(id) - Deletes a specific {}", base, R::NOUN),
    ];
    let items: String = rows.iter().map(|r| format!("<li>{}</li>", r)).collect();
    format!(
        "<h2>{}</h2><p>Fields: <code>{}</code></p><ul>{}</ul>",
        R::LABEL,
        fields,
        items
    )
}

pub fn render() -> String {
    let sections = [
        endpoints::<Patient>(),
        endpoints::<Doctor>(),
        endpoints::<Appointment>(),
        endpoints::<MedicalRecord>(),
    ]
    .concat();
    format!(
        "<html><head><title>Healthcare System API</title><style>{}</style></head>\
         <body><div class='container'><h1>Healthcare System API Documentation</h1>\
         <p>All bodies are JSON. Errors are returned as <code>{{\"error\": \"...\"}}</code>.</p>\
         {}</div></body></html>",
        STYLE, sections
    )
}

pub async fn api_home() -> Html<String> {
    Html(render())
}
