// ============================================================================
// SIDEBAR - Navegación entre secciones
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::state::{NavSection, Route};

const LINKS: [(NavSection, &str, &str); 3] = [
    (NavSection::Dashboard, "#/", "Dashboard"),
    (NavSection::Employees, "#/employees", "Employees"),
    (NavSection::WorklogTypes, "#/worklog-types", "Worklog Types"),
];

pub fn render_sidebar(route: &Route) -> Result<Element, JsValue> {
    let active = route.nav_section();

    let mut items = Vec::with_capacity(LINKS.len());
    for (section, href, label) in LINKS {
        let class = if active == Some(section) { "nav-link active" } else { "nav-link" };
        let link = ElementBuilder::new("a")?
            .class(class)
            .attr("href", href)?
            .text(label)
            .build();
        items.push(ElementBuilder::new("li")?.class("nav-item").child(link)?.build());
    }

    Ok(ElementBuilder::new("nav")?
        .class("sidebar")
        .child(ElementBuilder::new("div")?.class("sidebar-brand").text("Worklog Admin").build())?
        .child(ElementBuilder::new("ul")?.class("nav").children(items)?.build())?
        .build())
}
