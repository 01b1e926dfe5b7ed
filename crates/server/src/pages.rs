//! Server-rendered HTML for the browser form flow.
//!
//! No template engine: the pages are small enough that `format!` into
//! [`axum::response::Html`] keeps the dependency surface flat.

use pipeline::Recommendation;

/// The input form served at `GET /`.
pub fn index_page() -> String {
    PAGE_SHELL.replace(
        "{body}",
        r#"<h2>PackWise — Packaging Recommendation</h2>
<form method="post" action="/">
  <fieldset>
    <legend>Item dimensions (inches)</legend>
    <label>Length <input name="item_l" required></label>
    <label>Width <input name="item_w" required></label>
    <label>Height <input name="item_h" required></label>
  </fieldset>
  <fieldset>
    <legend>Bin dimensions (inches)</legend>
    <label>Length <input name="bin_l" required></label>
    <label>Width <input name="bin_w" required></label>
    <label>Height <input name="bin_h" required></label>
  </fieldset>
  <label>Weather <input name="weather" placeholder="e.g. humid"></label>
  <button type="submit">Recommend packaging</button>
</form>"#,
    )
}

/// The result page rendered after a successful form submission.
pub fn result_page(rec: &Recommendation) -> String {
    let rows = [
        ("Packaging type", rec.packaging_type.as_str()),
        ("Box dimensions", rec.box_dimensions.as_str()),
        ("Box category", rec.box_category.as_str()),
        ("Filler type", rec.filler_type.as_str()),
        ("Filler amount", rec.filler_amount.as_str()),
        ("Weather recommendation", rec.weather_recommendation.as_str()),
        ("Cost savings per unit", rec.cost_savings_per_unit.as_str()),
        ("Fit status", rec.fit_status.as_str()),
        ("Arrangement", rec.arrangement.as_str()),
        ("Eco material swap", rec.eco_material_swap.as_str()),
        ("Anomaly", rec.anomaly_label.as_str()),
        ("Fix suggestion", rec.fix_suggestion.as_str()),
    ];

    let mut table = String::from("<table>\n");
    for (name, value) in rows {
        table.push_str(&format!(
            "  <tr><th>{name}</th><td>{}</td></tr>\n",
            escape(value)
        ));
    }
    table.push_str(&format!(
        "  <tr><th>Plastic saved (kg)</th><td>{}</td></tr>\n  <tr><th>CO2 saved (kg)</th><td>{}</td></tr>\n</table>",
        rec.environmental_impact.plastic_saved_kg, rec.environmental_impact.co2_saved_kg
    ));

    PAGE_SHELL.replace(
        "{body}",
        &format!("<h2>Recommendation</h2>\n{table}\n<p><a href=\"/\">Back</a></p>"),
    )
}

/// Error page for failed form submissions.
pub fn error_page(message: &str) -> String {
    PAGE_SHELL.replace(
        "{body}",
        &format!(
            "<h3>Error: {}</h3>\n<p><a href=\"/\">Back</a></p>",
            escape(message)
        ),
    )
}

const PAGE_SHELL: &str = r#"<!doctype html>
<html>
<head>
  <meta charset="utf-8">
  <title>PackWise</title>
  <style>
    body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }
    fieldset { margin-bottom: 1rem; }
    label { display: inline-block; margin-right: 1rem; }
    th { text-align: left; padding-right: 1rem; }
  </style>
</head>
<body>
{body}
</body>
</html>
"#;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
