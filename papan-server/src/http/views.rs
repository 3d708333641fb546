//! Page rendering
//!
//! Templates are compiled into the binary and rendered with minijinja.
//! `.html` templates are auto-escaped.

use axum::response::Html;
use minijinja::Environment;
use serde::Serialize;

use crate::db::repos::{Board, Item};

const TEMPLATES: [(&str, &str); 4] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("view_board.html", include_str!("../../templates/view_board.html")),
    ("create.html", include_str!("../../templates/create.html")),
];

/// Template environment shared by all handlers
pub struct Views {
    env: Environment<'static>,
}

impl Views {
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)?;
        }
        Ok(Self { env })
    }

    /// Render `template` with `ctx` as its context.
    pub fn render<C: Serialize>(&self, template: &str, ctx: C) -> Result<Html<String>, minijinja::Error> {
        let html = self.env.get_template(template)?.render(ctx)?;
        Ok(Html(html))
    }
}

/// Board as shown in lists and on its own page
#[derive(Debug, Serialize)]
pub struct BoardSummary {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<Board> for BoardSummary {
    fn from(b: Board) -> Self {
        Self {
            id: b.id,
            name: b.name,
            description: b.description,
        }
    }
}

/// Item as shown on a board page
#[derive(Debug, Serialize)]
pub struct ItemView {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub image_url: Option<String>,
}

impl From<Item> for ItemView {
    fn from(i: Item) -> Self {
        Self {
            id: i.id,
            title: i.title,
            content: i.content,
            image_url: i.image_url,
        }
    }
}

/// Context for `home.html`
#[derive(Debug, Serialize)]
pub struct HomeContext {
    pub boards: Vec<BoardSummary>,
}

/// Context for `view_board.html`
#[derive(Debug, Serialize)]
pub struct BoardContext {
    pub board: BoardSummary,
    pub items: Vec<ItemView>,
}
