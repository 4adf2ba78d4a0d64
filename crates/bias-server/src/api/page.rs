//! Server-rendered HTML for the demo page
//!
//! The page is a plain form plus a result view: verdict, reasons, a bar chart
//! of the three scores and a table of detected entities.

use bias_core::{AnalysisReport, ModelScore, SentimentLabel};

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; color: #222; }
form { display: flex; gap: .5rem; margin-bottom: 1.5rem; }
input[type=text] { flex: 1; padding: .5rem; font-size: 1rem; }
button { padding: .5rem 1rem; font-size: 1rem; }
.verdict { font-size: 1.4rem; font-weight: bold; padding: .75rem 1rem; border-radius: 6px; }
.verdict.biased { background: #fde2e1; color: #a11; }
.verdict.neutral { background: #e3f4e1; color: #185c12; }
.chart { margin: 1rem 0; }
.row { display: grid; grid-template-columns: 9rem 1fr 4rem; align-items: center; gap: .5rem; margin: .35rem 0; }
.track { background: #eee; height: 1.1rem; border-radius: 3px; position: relative; }
.bar { height: 100%; border-radius: 3px; }
.bar.positive { background: #3a8f3a; }
.bar.negative { background: #c0392b; }
.bar.neutral { background: #999; }
.threshold { position: absolute; top: -2px; bottom: -2px; border-left: 2px dashed #333; }
table { border-collapse: collapse; width: 100%; }
td, th { border-bottom: 1px solid #ddd; padding: .35rem; text-align: left; }
.error { background: #fff3cd; padding: .75rem 1rem; border-radius: 6px; }
"#;

fn layout(headline: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Media Bias Detection</title>
<style>{style}</style>
</head>
<body>
<h1>Media Bias Detection</h1>
<form method="post" action="/analyze">
<input type="text" name="headline" placeholder="Enter a news headline" value="{headline}" autofocus>
<button type="submit">Analyze</button>
</form>
{content}
</body>
</html>
"#,
        style = STYLE,
        headline = escape_html(headline),
        content = content,
    )
}

pub fn render_index() -> String {
    layout("", "")
}

pub fn render_error(headline: &str, message: &str) -> String {
    let content = format!(r#"<p class="error">{}</p>"#, escape_html(message));
    layout(headline, &content)
}

pub fn render_report(report: &AnalysisReport) -> String {
    let verdict = &report.verdict;
    let class = if verdict.is_biased() { "biased" } else { "neutral" };

    let mut content = String::new();
    content.push_str("<h2>Analysis Results</h2>\n");
    content.push_str(&format!(
        r#"<div class="verdict {}">{} <small>({} of 3 models)</small></div>"#,
        class,
        escape_html(&verdict.decision.to_string()),
        verdict.vote_count()
    ));

    if !verdict.reasons.is_empty() {
        content.push_str("\n<ul>\n");
        for reason in &verdict.reasons {
            content.push_str(&format!("<li>{}</li>\n", escape_html(reason)));
        }
        content.push_str("</ul>\n");
    }

    content.push_str("<h3>Model scores</h3>\n<div class=\"chart\">\n");
    for score in &report.scores {
        content.push_str(&score_bar(score, report.threshold));
    }
    content.push_str("</div>\n");

    let interpretations = &report.interpretations;
    content.push_str("<h3>Model output</h3>\n<table>\n");
    for (name, text) in [
        ("Rule-based", &interpretations.rule_based),
        ("Lexicon-based", &interpretations.lexicon_based),
        ("Entities", &interpretations.entities),
        ("Transformer", &interpretations.transformer),
    ] {
        content.push_str(&format!(
            "<tr><th>{}</th><td>{}</td></tr>\n",
            name,
            escape_html(text)
        ));
    }
    content.push_str("</table>\n");

    if !report.entities.is_empty() {
        content.push_str("<h3>Named entities</h3>\n<table>\n<tr><th>Entity</th><th>Type</th></tr>\n");
        for entity in &report.entities {
            content.push_str(&format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                escape_html(&entity.text),
                escape_html(&entity.label)
            ));
        }
        content.push_str("</table>\n");
    }

    layout(&report.headline, &content)
}

/// One chart row; bar width is the absolute magnitude, the dashed line the threshold
fn score_bar(score: &ModelScore, threshold: f64) -> String {
    let width = (score.magnitude.abs() * 100.0).clamp(0.0, 100.0);
    let marker = (threshold * 100.0).clamp(0.0, 100.0);
    let class = match score.label {
        SentimentLabel::Positive => "positive",
        SentimentLabel::Negative => "negative",
        SentimentLabel::Neutral => "neutral",
    };

    format!(
        r#"<div class="row"><span>{source}</span><div class="track"><div class="bar {class}" style="width: {width:.1}%"></div><div class="threshold" style="left: {marker:.1}%"></div></div><span>{magnitude:+.2}</span></div>
"#,
        source = score.source,
        class = class,
        width = width,
        marker = marker,
        magnitude = score.magnitude,
    )
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
