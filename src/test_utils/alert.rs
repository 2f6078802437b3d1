use scraper::{Html, Selector};

fn alert_text(html: &Html, selector: &str) -> String {
    let alert_container = html
        .select(&Selector::parse("#alert-container").unwrap())
        .next()
        .expect("No alert container found");

    alert_container
        .select(&Selector::parse(selector).unwrap())
        .next()
        .unwrap_or_else(|| panic!("No {selector} found in alert"))
        .text()
        .collect::<String>()
        .trim()
        .to_owned()
}

#[track_caller]
fn assert_alert(html: &Html, kind: &str, message: &str, details: Option<&str>) {
    let alert_kind = html
        .select(&Selector::parse("#alert-container [role=alert]").unwrap())
        .next()
        .and_then(|alert| alert.value().attr("data-alert-kind"))
        .expect("No alert found");
    assert_eq!(alert_kind, kind, "want {kind} alert, got {alert_kind}");

    assert_eq!(alert_text(html, "p.text-sm.font-medium"), message);

    if let Some(details) = details {
        assert_eq!(alert_text(html, "p.mt-1.text-sm.opacity-80"), details);
    }
}

#[track_caller]
pub(crate) fn assert_alert_error(html: &Html, message: &str, details: Option<&str>) {
    assert_alert(html, "error", message, details);
}

#[track_caller]
pub(crate) fn assert_alert_success(html: &Html, message: &str, details: Option<&str>) {
    assert_alert(html, "success", message, details);
}
