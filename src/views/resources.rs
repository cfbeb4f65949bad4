use maud::{html, Markup};

use crate::{
    names,
    resources::{categories, ResourceCategory},
    views::components,
};

fn panel(category: &ResourceCategory) -> Markup {
    html! {
        div role="tabpanel" {
            @for link in category.links {
                p {
                    strong {
                        a href=(link.url) target="_blank" rel="noopener noreferrer" { (link.name) }
                    }
                }
                p { "📝 " (link.description) }
                hr;
            }
        }
    }
}

/// Tab strip plus the active tab's links. Swapped as a whole on tab change.
pub fn tabs(active: usize) -> Markup {
    html! {
        div id=(names::RESOURCE_TABS_ID) {
            nav.tabs role="tablist" {
                @for (idx, category) in categories().iter().enumerate() {
                    (components::tab_link(
                        &names::resource_tab_url(idx),
                        names::RESOURCE_TABS_ID,
                        idx == active,
                        html! { (category.category) },
                    ))
                }
            }
            @if let Some(category) = categories().get(active) {
                (panel(category))
            }
        }
    }
}
