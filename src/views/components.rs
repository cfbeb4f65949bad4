use maud::{html, Markup};

/// htmx tab link with href fallback + hx-get swapping the whole tab strip.
pub fn tab_link(href: &str, target: &str, active: bool, body: Markup) -> Markup {
    html! {
        a href=(href)
          role="tab"
          aria-selected=(if active { "true" } else { "false" })
          class=(if active { "tab active" } else { "tab" })
          hx-get=(href)
          hx-target=(format!("#{target}"))
          hx-swap="outerHTML" {
            (body)
        }
    }
}

/// Labelled number, like a dashboard metric tile.
pub fn metric(label: &str, value: Markup) -> Markup {
    html! {
        article.metric {
            small.metric-label { (label) }
            p.metric-value { (value) }
        }
    }
}

pub fn callout(kind: &str, body: Markup) -> Markup {
    html! {
        p class=(format!("callout callout-{kind}")) role="status" { (body) }
    }
}
