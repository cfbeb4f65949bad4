use maud::{html, Markup, DOCTYPE};

use crate::utils;

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js(htmx_src: &str) -> Markup {
    html! {
        script src=(htmx_src) {}
        script src="/static/celebrate.js" defer {}
    }
}

fn icon() -> Markup {
    html! {
        link rel="icon" href="/static/img/icon.svg" type="image/svg+xml" {}
    }
}

fn header() -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        a href="/" {
                            strong { "🐾 Division Dash" }
                        }
                    }
                }
                ul {
                    li."secondary" { (utils::VERSION) }
                }
            }
            p.credit {
                strong { "www.cognitivecloud.ai" }
                br;
                "Developed by Xavier Honablue M.Ed"
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

/// Full HTML document. Pages without `htmx_src` load no scripts.
pub fn page(title: &str, body: Markup, htmx_src: Option<&str>) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light dark";

            (css())
            @if let Some(src) = htmx_src {
                (js(src))
            }
            (icon())

            title { (format!("{title} - Animal Kingdom Division Dash")) }
        }

        body."container" {
            (header())
            (main(body))
            div id="balloons" aria-hidden="true" {}
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - Animal Kingdom Division Dash" }
        (body)
    }
}

/// Fragment for htmx requests, full page otherwise.
pub fn render(is_htmx: bool, title: &str, body: Markup, htmx_src: &str) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body, Some(htmx_src))
    }
}
