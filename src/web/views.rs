// ============================================================
// Layer 1 — HTML Views
// ============================================================
// Plain HTML pages built with format!. Every user-supplied
// string goes through escape() before it is written out.

use crate::application::predict_use_case::PredictionOutcome;
use crate::domain::contact::ContactInfo;
use crate::domain::schema::FeatureSpec;

const STYLE: &str = "body{font-family:sans-serif;max-width:46rem;margin:2rem auto;padding:0 1rem}\
label{display:inline-block;width:16rem}\
.field{margin:.3rem 0}\
.error{color:#a40000}\
.result{font-size:1.2rem;font-weight:bold}";

/// Minimal HTML escaping for text and attribute values
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&'  => out.push_str("&amp;"),
            '<'  => out.push_str("&lt;"),
            '>'  => out.push_str("&gt;"),
            '"'  => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c    => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        title = escape(title),
    )
}

fn hidden_contact(contact: &ContactInfo) -> String {
    format!(
        "<input type=\"hidden\" name=\"name\" value=\"{}\">\n\
         <input type=\"hidden\" name=\"email\" value=\"{}\">\n",
        escape(&contact.name),
        escape(&contact.email),
    )
}

/// GET /
pub fn welcome_page() -> String {
    page(
        "Alzheimer's Screening",
        "<h1>Alzheimer's Screening</h1>\n\
         <p>Enter a patient's clinical and demographic data to get a \
         screening prediction from a logistic regression model.</p>\n\
         <p><a href=\"/input\">Start</a></p>",
    )
}

/// GET /input: contact details, optionally pre-filled
pub fn contact_page(contact: &ContactInfo) -> String {
    let body = format!(
        "<h1>Your details</h1>\n\
         <form method=\"post\" action=\"/input\">\n\
         <div class=\"field\"><label for=\"name\">Name</label>\
         <input id=\"name\" name=\"name\" value=\"{}\"></div>\n\
         <div class=\"field\"><label for=\"email\">Email</label>\
         <input id=\"email\" name=\"email\" type=\"email\" value=\"{}\"></div>\n\
         <button type=\"submit\">Continue</button>\n</form>",
        escape(&contact.name),
        escape(&contact.email),
    );
    page("Your details", &body)
}

/// POST /input: the feature form, one input per feature
pub fn feature_form_page(contact: &ContactInfo, features: &[&FeatureSpec]) -> String {
    let mut body = String::from("<h1>Patient data</h1>\n");
    if !contact.name.trim().is_empty() {
        body.push_str(&format!("<p>Submitting as {}</p>\n", escape(&contact.name)));
    }

    body.push_str("<form method=\"post\" action=\"/predict\">\n");
    body.push_str(&hidden_contact(contact));
    for spec in features {
        body.push_str(&format!(
            "<div class=\"field\"><label for=\"{name}\">{name} ({kind})</label>\
             <input id=\"{name}\" name=\"{name}\" type=\"number\" step=\"{step}\" required></div>\n",
            name = spec.name,
            kind = spec.kind,
            step = spec.kind.input_step(),
        ));
    }
    body.push_str("<button type=\"submit\">Predict</button>\n</form>");

    page("Patient data", &body)
}

/// POST /predict: either the diagnosis or the list of field errors
pub fn result_page(outcome: &PredictionOutcome) -> String {
    let mut body = String::new();

    if outcome.error {
        body.push_str("<h1>Please correct the form</h1>\n");
        body.push_str(&format!(
            "<p class=\"error\" data-error=\"true\">{}</p>\n<ul>\n",
            escape(&outcome.message)
        ));
        for e in &outcome.errors {
            body.push_str(&format!("<li class=\"error\">{}</li>\n", escape(e)));
        }
        body.push_str("</ul>\n");
    } else {
        body.push_str("<h1>Result</h1>\n");
        if !outcome.contact.name.trim().is_empty() {
            body.push_str(&format!("<p>Patient: {}</p>\n", escape(&outcome.contact.name)));
        }
        body.push_str(&format!(
            "<p class=\"result\" data-error=\"false\">{}</p>\n",
            escape(&outcome.message)
        ));
    }

    // Back to the feature form, keeping the contact details
    body.push_str(&format!(
        "<form method=\"post\" action=\"/input\">\n{}<button type=\"submit\">New prediction</button>\n</form>",
        hidden_contact(&outcome.contact)
    ));

    page("Prediction", &body)
}

/// 500 page; the cause is logged, never shown
pub fn server_error_page() -> String {
    page(
        "Error",
        "<h1>Something went wrong</h1>\n<p>The prediction could not be completed. Please try again.</p>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::schema::FEATURE_SCHEMA;

    #[test]
    fn test_escape() {
        assert_eq!(escape("<b>\"O'Neil\" & co</b>"), "&lt;b&gt;&quot;O&#39;Neil&quot; &amp; co&lt;/b&gt;");
    }

    #[test]
    fn test_feature_form_has_every_field() {
        let features: Vec<&FeatureSpec> = FEATURE_SCHEMA.iter().collect();
        let html = feature_form_page(&ContactInfo::new("Ada", "ada@example.org"), &features);
        for spec in FEATURE_SCHEMA.iter() {
            assert!(html.contains(&format!("name=\"{}\"", spec.name)));
        }
        assert!(html.contains("value=\"ada@example.org\""));
        assert!(html.contains("step=\"any\""));
    }

    #[test]
    fn test_contact_values_are_escaped() {
        let html = contact_page(&ContactInfo::new("<script>", ""));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
