// ============================================================================
// SHARED COMPONENTS - Piezas reutilizadas por todas las vistas
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use gloo_timers::callback::Timeout;

use crate::dom::{on_change, on_click, on_input, set_select_value, ElementBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl AlertKind {
    fn class(&self) -> &'static str {
        match self {
            AlertKind::Error => "alert alert-danger",
            AlertKind::Success => "alert alert-success",
            AlertKind::Info => "alert alert-info",
        }
    }
}

pub fn render_alert(kind: AlertKind, message: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class(kind.class())
        .attr("role", "alert")?
        .text(message)
        .build())
}

/// Alerta opcional (error/éxito guardados en el estado)
pub fn render_optional_alert(kind: AlertKind, message: Option<&str>) -> Result<Option<Element>, JsValue> {
    message.map(|m| render_alert(kind, m)).transpose()
}

pub fn render_spinner(label: &str) -> Result<Element, JsValue> {
    ElementBuilder::new("div")?
        .class("loading")
        .child(ElementBuilder::new("div")?.class("spinner").build())?
        .child(ElementBuilder::new("span")?.text(label).build())
        .map(ElementBuilder::build)
}

pub fn render_page_header(title: &str, actions: Vec<Element>) -> Result<Element, JsValue> {
    let actions = ElementBuilder::new("div")?
        .class("page-actions")
        .children(actions)?
        .build();
    Ok(ElementBuilder::new("div")?
        .class("page-header")
        .child(ElementBuilder::new("h1")?.text(title).build())?
        .child(actions)?
        .build())
}

pub fn render_link(href: &str, class: &str, text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("a")?
        .class(class)
        .attr("href", href)?
        .text(text)
        .build())
}

pub fn render_button<F>(class: &str, text: &str, mut handler: F) -> Result<Element, JsValue>
where
    F: FnMut() + 'static,
{
    let button = ElementBuilder::new("button")?
        .class(class)
        .attr("type", "button")?
        .text(text)
        .build();
    on_click(&button, move |_| handler())?;
    Ok(button)
}

pub fn render_table(headers: &[&str], rows: Vec<Element>, body_id: Option<&str>) -> Result<Element, JsValue> {
    let header_cells = headers
        .iter()
        .map(|h| ElementBuilder::new("th").map(|b| b.text(h).build()))
        .collect::<Result<Vec<_>, _>>()?;

    let mut tbody = ElementBuilder::new("tbody")?;
    if let Some(id) = body_id {
        tbody = tbody.id(id)?;
    }

    Ok(ElementBuilder::new("table")?
        .class("table")
        .child(
            ElementBuilder::new("thead")?
                .child(ElementBuilder::new("tr")?.children(header_cells)?.build())?
                .build(),
        )?
        .child(tbody.children(rows)?.build())?
        .build())
}

pub fn render_cell(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("td")?.text(text).build())
}

/// Fila única que ocupa todas las columnas ("No data available", "No employees found"...)
pub fn render_empty_row(colspan: usize, text: &str) -> Result<Element, JsValue> {
    let cell = ElementBuilder::new("td")?
        .class("text-center text-muted")
        .attr("colspan", &colspan.to_string())?
        .text(text)
        .build();
    Ok(ElementBuilder::new("tr")?.child(cell)?.build())
}

/// Grupo label + control de formulario
pub fn render_field(label: &str, control: Element, required: bool) -> Result<Element, JsValue> {
    let text = if required { format!("{} *", label) } else { label.to_string() };
    Ok(ElementBuilder::new("div")?
        .class("form-group")
        .child(ElementBuilder::new("label")?.text(&text).build())?
        .child(control)?
        .build())
}

pub fn render_text_input<F>(id: &str, input_type: &str, value: &str, on_value: F) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let input = ElementBuilder::new("input")?
        .id(id)?
        .class("form-control")
        .attr("type", input_type)?
        .attr("name", id)?
        .attr("value", value)?
        .build();
    on_input(&input, on_value)?;
    Ok(input)
}

/// <select> con opción vacía inicial; `on_value` recibe el value elegido
pub fn render_select<F>(
    id: &str,
    placeholder: &str,
    options: Vec<(String, String)>,
    selected: &str,
    disabled: bool,
    on_value: F,
) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let mut option_elements = vec![ElementBuilder::new("option")?
        .attr("value", "")?
        .text(placeholder)
        .build()];
    for (value, label) in options {
        option_elements.push(
            ElementBuilder::new("option")?
                .attr("value", &value)?
                .text(&label)
                .build(),
        );
    }

    let select = ElementBuilder::new("select")?
        .id(id)?
        .class("form-control")
        .attr_if(disabled, "disabled")?
        .children(option_elements)?
        .build();
    set_select_value(&select, selected);
    on_change(&select, on_value)?;
    Ok(select)
}

pub fn render_modal(title: &str, body: Vec<Element>, footer: Vec<Element>) -> Result<Element, JsValue> {
    let dialog = ElementBuilder::new("div")?
        .class("modal-dialog")
        .child(
            ElementBuilder::new("div")?
                .class("modal-header")
                .child(ElementBuilder::new("h5")?.class("modal-title").text(title).build())?
                .build(),
        )?
        .child(ElementBuilder::new("div")?.class("modal-body").children(body)?.build())?
        .child(ElementBuilder::new("div")?.class("modal-footer").children(footer)?.build())?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("modal-backdrop active")
        .attr("role", "dialog")?
        .child(dialog)?
        .build())
}

/// Ejecutar `f` pasado `delay_ms` (redirecciones, limpieza de flash)
pub fn schedule<F>(delay_ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    Timeout::new(delay_ms, f).forget();
}
